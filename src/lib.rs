//! # Bevy Snap Popup
//!
//! A transient popup toolbar for toggling snap modes in Bevy-based editors.
//!
//! Press the hotkey (default `X`) and a small frameless toolbar appears
//! centered on the cursor, one toggle button per snap mode: grid, curve,
//! point, mesh center, view plane.
//!
//! ## Quick Start
//!
//! ```no_run
//! use bevy::prelude::*;
//! use bevy_snap_popup::SnapPopupPlugin;
//!
//! fn main() {
//!     App::new()
//!         .add_plugins(DefaultPlugins)
//!         .add_plugins(SnapPopupPlugin::default())
//!         .run();
//! }
//! ```
//!
//! ## Interaction
//!
//! - **Left-click** toggles a mode; the popup closes on release.
//! - **Alt + left-click** turns the clicked mode into the only enabled one.
//! - **Right-click** turns every mode off.
//! - **Shift + click** keeps the popup open; releasing Shift dismisses it.
//! - Moving the pointer off the popup dismisses it.
//!
//! ## Host integration
//!
//! The flags live in the [`SnapModes`] resource. A host editor reads it when
//! applying snapping and may insert its own instance before the plugin.
//! Every mutation also emits a [`SnapStatusMessage`] for feedback; the
//! built-in overlay renders these top-center with a short fade.

pub mod constants;
pub mod popup;
pub mod settings;
pub mod snap;
pub mod ui;

mod plugin;

// Re-export the main plugin and configuration
pub use plugin::SnapPopupPlugin;
pub use settings::SnapPopupSettings;

// Re-export commonly used types
pub use popup::{ModifierSnapshot, PopupSession, SnapPopup};
pub use snap::{SnapMode, SnapModes};
pub use ui::{SnapStatusMessage, StatusOverlay};
