//! Click semantics for the popup's toggle buttons.
//!
//! Kept as pure functions over [`SnapModes`] so the egui layer stays a thin
//! translation of pointer events. Each function returns the status text to
//! show for the mutation it performed.

use super::{SnapMode, SnapModes};

/// Left-click on a mode button.
///
/// Plain click toggles the mode and leaves siblings alone. With Alt held the
/// clicked mode ends up as the only enabled one, regardless of its prior
/// state ("only this mode").
pub fn left_click(modes: &mut SnapModes, mode: SnapMode, alt_held: bool) -> String {
    if alt_held {
        modes.enable_only(mode);
        return format!("Only {} On", mode.display_name());
    }

    if modes.is_enabled(mode) {
        modes.set(mode, false);
        format!("{} Off", mode.display_name())
    } else {
        modes.set(mode, true);
        format!("{} On", mode.display_name())
    }
}

/// Right-click on any button: global "all off" shortcut, Alt ignored.
pub fn all_off(modes: &mut SnapModes) -> String {
    modes.clear_all();
    "All Snap Modes Off".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_click_toggles_on_then_off() {
        for mode in SnapMode::ALL {
            let mut modes = SnapModes::default();

            let msg = left_click(&mut modes, mode, false);
            assert!(modes.is_enabled(mode));
            assert_eq!(msg, format!("{} On", mode.display_name()));

            let msg = left_click(&mut modes, mode, false);
            assert!(!modes.is_enabled(mode));
            assert_eq!(msg, format!("{} Off", mode.display_name()));
        }
    }

    #[test]
    fn plain_click_leaves_siblings_untouched() {
        let mut modes = SnapModes::default();
        modes.set(SnapMode::Curve, true);
        modes.set(SnapMode::Point, true);

        left_click(&mut modes, SnapMode::Grid, false);
        assert!(modes.is_enabled(SnapMode::Grid));
        assert!(modes.is_enabled(SnapMode::Curve));
        assert!(modes.is_enabled(SnapMode::Point));

        // Toggling back off also leaves siblings alone
        left_click(&mut modes, SnapMode::Grid, false);
        assert!(!modes.is_enabled(SnapMode::Grid));
        assert!(modes.is_enabled(SnapMode::Curve));
        assert!(modes.is_enabled(SnapMode::Point));
    }

    #[test]
    fn alt_click_makes_mode_exclusive() {
        for survivor in SnapMode::ALL {
            let mut modes = SnapModes::default();
            for mode in SnapMode::ALL {
                modes.set(mode, true);
            }

            let msg = left_click(&mut modes, survivor, true);
            assert_eq!(msg, format!("Only {} On", survivor.display_name()));
            for mode in SnapMode::ALL {
                assert_eq!(modes.is_enabled(mode), mode == survivor);
            }
        }
    }

    #[test]
    fn alt_click_on_disabled_mode_enables_it_exclusively() {
        let mut modes = SnapModes::default();
        modes.set(SnapMode::Curve, true);

        let msg = left_click(&mut modes, SnapMode::Grid, true);
        assert_eq!(msg, "Only Grid Snap On");
        assert!(modes.is_enabled(SnapMode::Grid));
        assert!(!modes.is_enabled(SnapMode::Curve));
    }

    #[test]
    fn alt_click_on_enabled_mode_keeps_it_on() {
        let mut modes = SnapModes::default();
        modes.set(SnapMode::Point, true);
        modes.set(SnapMode::Grid, true);

        let msg = left_click(&mut modes, SnapMode::Point, true);
        assert_eq!(msg, "Only Point Snap On");
        assert!(modes.is_enabled(SnapMode::Point));
        assert!(!modes.is_enabled(SnapMode::Grid));
    }

    #[test]
    fn right_click_clears_everything() {
        let mut modes = SnapModes::default();
        for mode in SnapMode::ALL {
            modes.set(mode, true);
        }

        let msg = all_off(&mut modes);
        assert_eq!(msg, "All Snap Modes Off");
        assert!(!modes.any_enabled());

        // Idempotent from the empty state too
        let msg = all_off(&mut modes);
        assert_eq!(msg, "All Snap Modes Off");
        assert!(!modes.any_enabled());
    }
}
