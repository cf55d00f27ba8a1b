//! Standalone demo binary: a minimal scene with the snap popup wired in.
//!
//! Press `X` to open the popup at the cursor.

use bevy::prelude::*;
use bevy_snap_popup::SnapPopupPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Snap Popup Demo".to_string(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(SnapPopupPlugin::default())
        .add_systems(Startup, setup_demo_scene)
        .run();
}

/// A camera, some light, and a cube to look at
fn setup_demo_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(6.0, 6.0, 8.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.spawn(AmbientLight {
        color: Color::WHITE,
        brightness: 300.0,
        affects_lightmapped_meshes: true,
    });

    commands.spawn((
        Mesh3d(meshes.add(Cuboid::from_length(1.0))),
        MeshMaterial3d(materials.add(Color::srgb(0.8, 0.7, 0.6))),
        Transform::default(),
    ));
}
