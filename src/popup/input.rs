//! Keyboard-side systems for the popup: hotkey invocation and the
//! Shift-release poll.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::popup::SnapPopup;
use crate::settings::SnapPopupSettings;

/// Hotkey that summons the popup. Configured through
/// [`SnapPopupPlugin`](crate::SnapPopupPlugin), not persisted.
#[derive(Resource, Clone, Copy, Debug)]
pub struct PopupHotkey(pub KeyCode);

/// Open (or replace) the popup at the cursor when the hotkey is pressed.
pub fn handle_popup_hotkey(
    keyboard: Res<ButtonInput<KeyCode>>,
    hotkey: Res<PopupHotkey>,
    mut popup: ResMut<SnapPopup>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    if !keyboard.just_pressed(hotkey.0) {
        return;
    }

    let Ok(window) = windows.single() else {
        return;
    };

    // Center on the cursor; fall back to the window center when the cursor
    // is outside the window (e.g. hotkey pressed right after focus change).
    let anchor = window
        .cursor_position()
        .unwrap_or_else(|| Vec2::new(window.width() * 0.5, window.height() * 0.5));

    popup.open_at(anchor);
}

/// Drive the per-session Shift poll and dismiss the popup when a shift-drag
/// session ends with the key going up.
pub fn poll_shift_release(
    time: Res<Time>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut popup: ResMut<SnapPopup>,
) {
    let shift_down =
        keyboard.pressed(KeyCode::ShiftLeft) || keyboard.pressed(KeyCode::ShiftRight);

    let should_close = popup
        .session_mut()
        .is_some_and(|session| session.tick(time.delta(), shift_down));

    if should_close {
        debug!("shift released, dismissing snap popup");
        popup.close();
    }
}
