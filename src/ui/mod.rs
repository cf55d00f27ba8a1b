pub mod icons;
pub mod status;
pub mod theme;

pub use icons::SnapIcons;
pub use status::{SnapStatusMessage, StatusOverlay};
