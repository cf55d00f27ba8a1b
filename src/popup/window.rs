//! egui rendering and pointer handling for the popup toolbar.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::constants::popup as layout;
use crate::popup::{ModifierSnapshot, SnapPopup};
use crate::settings::SnapPopupSettings;
use crate::snap::{self, SnapMode, SnapModes};
use crate::ui::icons::SnapIcons;
use crate::ui::status::SnapStatusMessage;
use crate::ui::theme::colors;

/// Pointer/modifier state sampled once per frame.
struct PointerState {
    pressed: bool,
    released: bool,
    pos: Option<egui::Pos2>,
    modifiers: ModifierSnapshot,
}

/// Draw the popup centered on its anchor and resolve button interactions.
///
/// Button visuals are re-derived from [`SnapModes`] every frame, so the
/// rendered "active" state can never lag the flags.
pub fn draw_snap_popup(
    mut contexts: EguiContexts,
    mut popup: ResMut<SnapPopup>,
    mut modes: ResMut<SnapModes>,
    mut icons: ResMut<SnapIcons>,
    settings: Res<SnapPopupSettings>,
    mut status: MessageWriter<SnapStatusMessage>,
) -> Result {
    let Some((anchor, alt_held)) = popup.session().map(|s| (s.anchor(), s.alt_held())) else {
        return Ok(());
    };

    let ctx = contexts.ctx_mut()?;

    icons.ensure_loaded(ctx, settings.resolved_icon_dir().as_deref());

    let frame = egui::Frame::window(&ctx.style()).fill(colors::POPUP_BG);
    let button_size = egui::vec2(settings.button_size, settings.button_size);
    let icon_size = egui::vec2(settings.icon_size, settings.icon_size);

    let area = egui::Area::new(egui::Id::new("snap_popup"))
        .order(egui::Order::Foreground)
        .pivot(egui::Align2::CENTER_CENTER)
        .fixed_pos(egui::pos2(anchor.x, anchor.y))
        .show(ctx, |ui| {
            frame.show(ui, |ui| {
                ui.spacing_mut().item_spacing = egui::vec2(layout::BUTTON_SPACING, 0.0);
                ui.horizontal(|ui| {
                    for mode in SnapMode::ALL {
                        let active = modes.is_enabled(mode);
                        let fill = if active {
                            colors::BUTTON_ACTIVE
                        } else {
                            colors::BUTTON_IDLE
                        };

                        let button = match icons.texture_id(mode) {
                            Some(id) => {
                                egui::Button::image(egui::Image::new((id, icon_size))).fill(fill)
                            }
                            // Missing icon degrades to a labeled button
                            None => egui::Button::new(
                                egui::RichText::new(mode.short_label())
                                    .small()
                                    .color(colors::TEXT_PRIMARY),
                            )
                            .fill(fill),
                        };

                        let response = ui
                            .add_sized(button_size, button)
                            .on_hover_text(mode.display_name());

                        if response.secondary_clicked() {
                            let text = snap::all_off(&mut modes);
                            info!("{}", text);
                            status.write(SnapStatusMessage { text });
                        } else if response.clicked() {
                            let text = snap::left_click(&mut modes, mode, alt_held);
                            info!("{}", text);
                            status.write(SnapStatusMessage { text });
                        }
                    }
                });
            });
        });

    let rect = area.response.rect;
    let pointer = ctx.input(|i| PointerState {
        pressed: i.pointer.any_pressed(),
        released: i.pointer.any_released(),
        pos: i.pointer.latest_pos(),
        modifiers: ModifierSnapshot {
            shift: i.modifiers.shift,
            alt: i.modifiers.alt,
        },
    });

    let mut close = false;
    if let Some(session) = popup.session_mut() {
        if pointer.pressed && pointer.pos.is_some_and(|p| rect.contains(p)) {
            session.note_press(pointer.modifiers, settings.poll_interval());
        }

        // Press-release cycle without Shift dismisses the popup, after the
        // click handlers above have already applied their toggles
        if pointer.released && session.note_release() {
            close = true;
        }

        // Pointer leaving the popup bounds dismisses it
        if pointer_left_popup(rect, pointer.pos, layout::POINTER_LEAVE_MARGIN) {
            close = true;
        }
    }

    if close {
        popup.close();
    }

    Ok(())
}

/// Whether the pointer has moved off the popup, with a small grace margin.
/// An unknown pointer position never counts as leaving.
fn pointer_left_popup(rect: egui::Rect, pos: Option<egui::Pos2>, margin: f32) -> bool {
    pos.is_some_and(|p| !rect.expand(margin).contains(p))
}
