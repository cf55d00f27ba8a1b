//! Snap mode flags shared with the host editor.
//!
//! The popup never owns snapping behavior; it only queries and toggles the
//! flags in [`SnapModes`]. A host editor reads the same resource when
//! applying its transform snapping.

use bevy::prelude::*;

/// One snap mode the popup can toggle.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum SnapMode {
    /// Snap to the world grid
    Grid,
    /// Snap to curves
    Curve,
    /// Snap to points/vertices
    Point,
    /// Snap to mesh centers
    MeshCenter,
    /// Snap to the view plane
    ViewPlane,
}

impl SnapMode {
    /// Fixed left-to-right button order in the popup.
    pub const ALL: [SnapMode; 5] = [
        SnapMode::Grid,
        SnapMode::Curve,
        SnapMode::Point,
        SnapMode::MeshCenter,
        SnapMode::ViewPlane,
    ];

    /// Label shown in tooltips and status messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            SnapMode::Grid => "Grid Snap",
            SnapMode::Curve => "Curve Snap",
            SnapMode::Point => "Point Snap",
            SnapMode::MeshCenter => "MeshCenter Snap",
            SnapMode::ViewPlane => "Plane Snap",
        }
    }

    /// Stable key used in logs and settings files.
    pub fn flag_key(&self) -> &'static str {
        match self {
            SnapMode::Grid => "grid",
            SnapMode::Curve => "curve",
            SnapMode::Point => "point",
            SnapMode::MeshCenter => "meshCenter",
            SnapMode::ViewPlane => "viewPlane",
        }
    }

    /// Icon filename looked up in the icon directory.
    pub fn icon_filename(&self) -> &'static str {
        match self {
            SnapMode::Grid => "snapGrid.png",
            SnapMode::Curve => "snapCurve.png",
            SnapMode::Point => "snapPoint.png",
            SnapMode::MeshCenter => "snapMeshCenter.png",
            SnapMode::ViewPlane => "snapPlane.png",
        }
    }

    /// Short text fallback for buttons when no icon file is available.
    pub fn short_label(&self) -> &'static str {
        match self {
            SnapMode::Grid => "Grid",
            SnapMode::Curve => "Crv",
            SnapMode::Point => "Pt",
            SnapMode::MeshCenter => "Ctr",
            SnapMode::ViewPlane => "Pln",
        }
    }
}

/// The five snap-mode flags. Host-owned state; the popup reads and toggles it.
#[derive(Resource, Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct SnapModes {
    grid: bool,
    curve: bool,
    point: bool,
    mesh_center: bool,
    view_plane: bool,
}

impl SnapModes {
    /// Query a single flag.
    pub fn is_enabled(&self, mode: SnapMode) -> bool {
        match mode {
            SnapMode::Grid => self.grid,
            SnapMode::Curve => self.curve,
            SnapMode::Point => self.point,
            SnapMode::MeshCenter => self.mesh_center,
            SnapMode::ViewPlane => self.view_plane,
        }
    }

    /// Set a single flag.
    pub fn set(&mut self, mode: SnapMode, enabled: bool) {
        let flag = match mode {
            SnapMode::Grid => &mut self.grid,
            SnapMode::Curve => &mut self.curve,
            SnapMode::Point => &mut self.point,
            SnapMode::MeshCenter => &mut self.mesh_center,
            SnapMode::ViewPlane => &mut self.view_plane,
        };
        *flag = enabled;
    }

    /// Turn on exactly one mode, forcing every other mode off.
    pub fn enable_only(&mut self, mode: SnapMode) {
        for other in SnapMode::ALL {
            self.set(other, other == mode);
        }
    }

    /// Turn every mode off.
    pub fn clear_all(&mut self) {
        for mode in SnapMode::ALL {
            self.set(mode, false);
        }
    }

    /// Whether any mode is currently enabled.
    pub fn any_enabled(&self) -> bool {
        SnapMode::ALL.iter().any(|m| self.is_enabled(*m))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_all_off() {
        let modes = SnapModes::default();
        assert!(!modes.any_enabled());
    }

    #[test]
    fn set_and_query_each_mode() {
        for mode in SnapMode::ALL {
            let mut modes = SnapModes::default();
            modes.set(mode, true);
            assert!(modes.is_enabled(mode));
            for other in SnapMode::ALL.iter().filter(|m| **m != mode) {
                assert!(!modes.is_enabled(*other));
            }
            modes.set(mode, false);
            assert!(!modes.is_enabled(mode));
        }
    }

    #[test]
    fn enable_only_forces_siblings_off() {
        for survivor in SnapMode::ALL {
            let mut modes = SnapModes::default();
            for mode in SnapMode::ALL {
                modes.set(mode, true);
            }
            modes.enable_only(survivor);
            for mode in SnapMode::ALL {
                assert_eq!(modes.is_enabled(mode), mode == survivor);
            }
        }
    }

    #[test]
    fn clear_all_from_mixed_state() {
        let mut modes = SnapModes::default();
        modes.set(SnapMode::Grid, true);
        modes.set(SnapMode::ViewPlane, true);
        modes.clear_all();
        assert!(!modes.any_enabled());
    }
}
