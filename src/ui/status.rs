//! Short-lived status messages shown after every snap-mode mutation.
//!
//! Mutations emit [`SnapStatusMessage`]; the overlay shows the latest one
//! top-center and fades it out. A host editor that prefers its own
//! notification surface can consume the same message stream instead.

use std::time::Duration;

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::settings::SnapPopupSettings;
use crate::ui::theme::colors;

/// On-screen feedback for a snap-mode mutation, e.g. "Grid Snap On".
#[derive(Message, Clone, Debug)]
pub struct SnapStatusMessage {
    pub text: String,
}

struct StatusEntry {
    text: String,
    fade: Timer,
}

/// The currently displayed status message, if any. A new message replaces
/// the old one and restarts the fade.
#[derive(Resource, Default)]
pub struct StatusOverlay {
    current: Option<StatusEntry>,
}

impl StatusOverlay {
    pub fn show(&mut self, text: impl Into<String>, fade: Duration) {
        self.current = Some(StatusEntry {
            text: text.into(),
            fade: Timer::new(fade, TimerMode::Once),
        });
    }

    pub fn advance(&mut self, delta: Duration) {
        if let Some(entry) = self.current.as_mut() {
            entry.fade.tick(delta);
            if entry.fade.is_finished() {
                self.current = None;
            }
        }
    }

    /// Current text and its remaining-lifetime fraction (1.0 fresh, 0.0 gone).
    pub fn visible(&self) -> Option<(&str, f32)> {
        self.current
            .as_ref()
            .map(|entry| (entry.text.as_str(), entry.fade.fraction_remaining()))
    }
}

pub fn collect_status_messages(
    mut messages: MessageReader<SnapStatusMessage>,
    mut overlay: ResMut<StatusOverlay>,
    settings: Res<SnapPopupSettings>,
) {
    for message in messages.read() {
        overlay.show(message.text.clone(), settings.status_fade());
    }
}

pub fn tick_status_overlay(time: Res<Time>, mut overlay: ResMut<StatusOverlay>) {
    overlay.advance(time.delta());
}

/// Draw the active status message top-center, fading with remaining lifetime.
pub fn draw_status_overlay(mut contexts: EguiContexts, overlay: Res<StatusOverlay>) -> Result {
    let Some((text, alpha)) = overlay.visible().map(|(t, a)| (t.to_string(), a)) else {
        return Ok(());
    };

    let ctx = contexts.ctx_mut()?;

    egui::Area::new(egui::Id::new("snap_status"))
        .order(egui::Order::Foreground)
        .anchor(egui::Align2::CENTER_TOP, [0.0, 24.0])
        .show(ctx, |ui| {
            ui.label(
                egui::RichText::new(text)
                    .strong()
                    .size(16.0)
                    .color(colors::TEXT_PRIMARY.gamma_multiply(alpha)),
            );
        });

    Ok(())
}
