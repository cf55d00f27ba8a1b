use bevy::prelude::*;
use bevy_egui::{EguiPlugin, EguiPrimaryContextPass};

use crate::popup::{
    draw_snap_popup, handle_popup_hotkey, poll_shift_release, PopupHotkey, SnapPopup,
};
use crate::settings::{save_settings_on_exit, SnapPopupSettings};
use crate::snap::SnapModes;
use crate::ui::icons::SnapIcons;
use crate::ui::status::{
    collect_status_messages, draw_status_overlay, tick_status_overlay, SnapStatusMessage,
    StatusOverlay,
};

/// Plugin adding the transient snap-mode popup toolbar to a Bevy app.
///
/// The host may insert its own [`SnapModes`] resource before this plugin to
/// share flag state with existing snapping systems; otherwise an all-off
/// default is provided.
pub struct SnapPopupPlugin {
    /// Key that summons the popup at the cursor.
    pub hotkey: KeyCode,
}

impl Default for SnapPopupPlugin {
    fn default() -> Self {
        Self {
            hotkey: KeyCode::KeyX,
        }
    }
}

impl Plugin for SnapPopupPlugin {
    fn build(&self, app: &mut App) {
        // Host editors that already run egui keep their instance
        if !app.is_plugin_added::<EguiPlugin>() {
            app.add_plugins(EguiPlugin::default());
        }

        let settings = SnapPopupSettings::load();

        app.insert_resource(settings)
            .insert_resource(PopupHotkey(self.hotkey))
            .init_resource::<SnapModes>()
            .init_resource::<SnapPopup>()
            .init_resource::<SnapIcons>()
            .init_resource::<StatusOverlay>()
            .add_message::<SnapStatusMessage>()
            .add_systems(
                Update,
                (
                    handle_popup_hotkey,
                    poll_shift_release,
                    collect_status_messages,
                    tick_status_overlay,
                    save_settings_on_exit,
                ),
            )
            .add_systems(
                EguiPrimaryContextPass,
                (draw_snap_popup, draw_status_overlay),
            );
    }
}
