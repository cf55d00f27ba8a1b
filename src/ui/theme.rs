//! Color palette for the popup and its status overlay.

pub mod colors {
    use bevy_egui::egui::Color32;

    // Popup frame (semi-transparent dark, floats over the viewport)
    pub const POPUP_BG: Color32 = Color32::from_rgba_premultiplied(38, 38, 38, 240);

    // Button fills
    pub const BUTTON_IDLE: Color32 = Color32::from_rgba_premultiplied(10, 10, 10, 240);
    pub const BUTTON_ACTIVE: Color32 = Color32::from_rgba_premultiplied(82, 133, 166, 240);

    // Text colors
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(220, 220, 220);
}
