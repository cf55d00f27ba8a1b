//! Icon loading for the mode buttons.
//!
//! Icons live in a fixed subfolder of the user preference directory, one PNG
//! per mode. A missing or unreadable file is not an error; the affected
//! button simply renders its text label instead.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use bevy::prelude::*;
use bevy_egui::egui;

use crate::snap::SnapMode;

/// Conventional icon location: `<preference dir>/icons/SnapPopIcons`.
pub fn default_icon_dir() -> Option<PathBuf> {
    dirs::preference_dir().map(|p| p.join("icons").join("SnapPopIcons"))
}

/// Loaded icon textures, keyed by mode.
#[derive(Resource, Default)]
pub struct SnapIcons {
    loaded: bool,
    textures: HashMap<SnapMode, egui::TextureHandle>,
}

impl SnapIcons {
    pub fn texture_id(&self, mode: SnapMode) -> Option<egui::TextureId> {
        self.textures.get(&mode).map(|handle| handle.id())
    }

    /// Load all icons on first use. Runs once per process; failures degrade
    /// to icon-less buttons.
    pub fn ensure_loaded(&mut self, ctx: &egui::Context, dir: Option<&Path>) {
        if self.loaded {
            return;
        }
        self.loaded = true;

        let Some(dir) = dir else {
            debug!("no icon directory resolved, falling back to text buttons");
            return;
        };

        for mode in SnapMode::ALL {
            let path = dir.join(mode.icon_filename());
            match load_icon(&path) {
                Some(image) => {
                    let handle =
                        ctx.load_texture(mode.flag_key(), image, egui::TextureOptions::LINEAR);
                    self.textures.insert(mode, handle);
                }
                None => debug!("icon not found: {:?}", path),
            }
        }
    }
}

fn load_icon(path: &Path) -> Option<egui::ColorImage> {
    let bytes = fs::read(path).ok()?;
    let decoded = image::load_from_memory(&bytes).ok()?;
    let rgba = decoded.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Some(egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}
