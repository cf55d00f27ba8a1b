//! Centralized constants for the popup toolbar.

/// Popup layout defaults
pub mod popup {
    /// Side length of each mode button in points
    pub const BUTTON_SIZE: f32 = 40.0;
    /// Icon size inside a button in points
    pub const ICON_SIZE: f32 = 30.0;
    /// Horizontal spacing between buttons
    pub const BUTTON_SPACING: f32 = 5.0;
    /// Extra margin around the popup rect before a pointer counts as "left"
    pub const POINTER_LEAVE_MARGIN: f32 = 4.0;
}

/// Timing defaults
pub mod timing {
    /// Cadence of the Shift-release poll in milliseconds
    pub const DEFAULT_POLL_INTERVAL_MS: u64 = 100;
    /// How long a status message stays on screen before fading out
    pub const DEFAULT_STATUS_FADE_SECS: f32 = 2.0;
}
