//! View rendering (header, roster grid, battle controls, winner panel, toast)

use super::App;
use crate::battle;
use crate::constants::{TOAST_FADE_SECS, TOAST_VISIBLE_SECS};
use crate::selection::MAX_SELECTED;
use crate::theme;
use crate::types::{Creature, Phase};
use crate::ui::components::{paint_image, paint_image_placeholder, paint_stat_row};
use crate::utils;
use eframe::egui;

const CARD_PADDING: f32 = 10.0;
const CARD_NAME_HEIGHT: f32 = 24.0;
const CONTROL_BUTTON_WIDTH: f32 = 150.0;

/// Columns and card size for a grid `available` wide. Cards keep the
/// base aspect ratio and stretch to fill the row.
pub(crate) fn grid_layout(available: f32, base: (f32, f32), spacing: f32) -> (usize, f32, f32) {
    let (base_w, base_h) = base;
    let num_cols = ((available + spacing) / (base_w + spacing)).floor().max(1.0);
    let card_w = ((available - spacing * (num_cols - 1.0)) / num_cols).floor().max(1.0);
    let card_h = (base_h * (card_w / base_w)).floor();
    (num_cols as usize, card_w, card_h)
}

pub(crate) fn phase_hint(phase: Phase) -> &'static str {
    match phase {
        Phase::Empty => "Pick two monsters to battle",
        Phase::OneSelected => "Pick one more monster",
        Phase::Ready => "Ready! Start the battle",
        Phase::Resolved => "Battle over. Start a new one",
    }
}

impl App {
    pub(crate) fn render_header(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        if self.logo_texture.is_none() {
            self.logo_texture = utils::rasterize_logo(96).map(|(pixels, w, h)| {
                ctx.load_texture(
                    "logo",
                    egui::ColorImage::from_rgba_unmultiplied([w as usize, h as usize], &pixels),
                    egui::TextureOptions::LINEAR,
                )
            });
        }

        ui.horizontal(|ui| {
            if let Some(texture) = &self.logo_texture {
                ui.image(egui::load::SizedTexture::new(texture.id(), egui::vec2(40.0, 40.0)));
            }
            ui.vertical(|ui| {
                ui.add(
                    egui::Label::new(
                        egui::RichText::new("Battle Monsters")
                            .size(theme::FONT_TITLE)
                            .strong()
                            .color(theme::TEXT_PRIMARY),
                    )
                    .selectable(false),
                );
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(format!(
                            "{} monsters • {}/{} selected • {}",
                            self.arena.roster().len(),
                            self.arena.selection().len(),
                            MAX_SELECTED,
                            phase_hint(self.arena.phase())
                        ))
                        .size(theme::FONT_SMALL)
                        .color(theme::TEXT_DIM),
                    )
                    .selectable(false),
                );
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(egui::vec2(32.0, 32.0), egui::Sense::click());
                let (fill, draw_rect) = theme::button_visual(&response, theme::BG_ELEVATED, rect);
                ui.painter().rect_filled(draw_rect, theme::RADIUS_DEFAULT, fill);
                ui.painter().text(
                    draw_rect.center(),
                    egui::Align2::CENTER_CENTER,
                    egui_phosphor::regular::GEAR,
                    egui::FontId::proportional(18.0),
                    theme::TEXT_MUTED,
                );
                if response.hovered() {
                    ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                }
                if response.on_hover_text("Settings").clicked() {
                    self.show_settings = true;
                }
            });
        });
        ui.add_space(theme::SPACING_XL);
    }

    pub(crate) fn render_roster_grid(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let spacing = theme::SPACING_XL;
        let base = if self.large_cards {
            theme::CARD_LARGE
        } else {
            theme::CARD_SMALL
        };
        let (_, card_w, card_h) = grid_layout(ui.available_width(), base, spacing);
        let text_h = CARD_NAME_HEIGHT
            + if self.show_stats {
                theme::CARD_STAT_ROW * 4.0
            } else {
                0.0
            };

        // Clone so the loop can borrow self mutably for image loading
        let cards: Vec<Creature> = self.arena.roster().iter().cloned().collect();
        let mut clicked = None;

        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing = egui::vec2(spacing, spacing);
            for creature in &cards {
                let is_selected = self.arena.is_selected(creature.id);
                let (rect, response) =
                    ui.allocate_exact_size(egui::vec2(card_w, card_h), egui::Sense::click());

                if ui.is_rect_visible(rect) {
                    let texture = self.load_image(ctx, &creature.image_url);
                    let rect = theme::card_lift(&response, rect);
                    let painter = ui.painter().with_clip_rect(rect.expand(6.0));

                    painter.rect_filled(rect, theme::RADIUS_LARGE, theme::BG_ELEVATED);
                    if is_selected {
                        painter.rect_stroke(
                            rect.expand(2.0),
                            theme::RADIUS_LARGE + 2.0,
                            egui::Stroke::new(4.0, theme::ACCENT_GLOW),
                            egui::StrokeKind::Outside,
                        );
                    }
                    let border = if is_selected {
                        theme::ACCENT
                    } else {
                        theme::BORDER_CARD
                    };
                    painter.rect_stroke(
                        rect,
                        theme::RADIUS_LARGE,
                        egui::Stroke::new(theme::STROKE_THICK, border),
                        egui::StrokeKind::Inside,
                    );

                    let inner = rect.shrink(CARD_PADDING);
                    let img_rect = egui::Rect::from_min_size(
                        inner.min,
                        egui::vec2(inner.width(), (inner.height() - text_h).max(0.0)),
                    );
                    match &texture {
                        Some(tex) => paint_image(&painter, tex, img_rect),
                        None => paint_image_placeholder(&painter, img_rect),
                    }

                    painter.text(
                        egui::pos2(inner.center().x, img_rect.bottom() + 4.0),
                        egui::Align2::CENTER_TOP,
                        &creature.name,
                        egui::FontId::proportional(theme::FONT_HEADING),
                        theme::TEXT_PRIMARY,
                    );

                    if self.show_stats {
                        let mut y = img_rect.bottom() + CARD_NAME_HEIGHT;
                        for (label, stat) in creature.stat_rows() {
                            let row = egui::Rect::from_min_size(
                                egui::pos2(inner.left(), y),
                                egui::vec2(inner.width(), theme::CARD_STAT_ROW),
                            );
                            paint_stat_row(&painter, row, label, stat);
                            y += theme::CARD_STAT_ROW;
                        }
                    }

                    if response.hovered() {
                        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                    }
                }

                if response.clicked_by(egui::PointerButton::Primary) {
                    clicked = Some(creature.id);
                }

                response.context_menu(|ui| {
                    self.creature_context_menu(ui, creature.id, &creature.image_url);
                });
            }
        });

        if let Some(id) = clicked {
            self.arena.select(id);
        }
    }

    pub(crate) fn render_controls(&mut self, ui: &mut egui::Ui) {
        ui.add_space(theme::SPACING_XL);
        let spacing = theme::SPACING_MD;
        let row_w = CONTROL_BUTTON_WIDTH * 3.0 + spacing * 2.0;
        let size = egui::vec2(CONTROL_BUTTON_WIDTH, theme::BUTTON_HEIGHT_LARGE);

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = spacing;
            ui.add_space(((ui.available_width() - row_w) / 2.0).max(0.0));

            let add = theme::action_button(
                format!("{}  Add Creature", egui_phosphor::regular::PLUS),
                theme::BTN_ADD,
                theme::TEXT_PRIMARY,
                true,
            );
            if ui.add(add.min_size(size)).clicked() {
                self.open_add_form();
            }

            let can_battle = self.arena.can_battle();
            let start = theme::action_button(
                format!("{}  Start Battle", egui_phosphor::regular::SWORD),
                theme::BTN_BATTLE,
                theme::TEXT_PRIMARY,
                can_battle,
            );
            if ui.add_enabled(can_battle, start.min_size(size)).clicked() {
                self.arena.start_battle();
            }

            let can_reset = self.arena.can_reset();
            let reset = theme::action_button(
                format!("{}  New Battle", egui_phosphor::regular::ARROW_COUNTER_CLOCKWISE),
                theme::BTN_RESET,
                theme::TEXT_DARK,
                can_reset,
            );
            if ui.add_enabled(can_reset, reset.min_size(size)).clicked() {
                self.arena.new_battle();
            }
        });
    }

    pub(crate) fn render_winner(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let Some(winner) = self.arena.winner().cloned() else {
            return;
        };

        ui.add_space(theme::SPACING_XL);
        theme::winner_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(format!(
                            "{}  Winner: {}",
                            egui_phosphor::regular::TROPHY,
                            winner.name
                        ))
                        .size(theme::FONT_TITLE)
                        .strong()
                        .color(theme::STATUS_SUCCESS),
                    )
                    .selectable(false),
                );
                if let Some(score) = battle::score(&winner) {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(format!("Total stats: {}", score))
                                .size(theme::FONT_SMALL)
                                .color(theme::TEXT_MUTED),
                        )
                        .selectable(false),
                    );
                }
                ui.add_space(theme::SPACING_MD);

                let img_w = ui.available_width().min(theme::WINNER_IMG_HEIGHT * 2.0);
                let (rect, _) = ui.allocate_exact_size(
                    egui::vec2(img_w, theme::WINNER_IMG_HEIGHT),
                    egui::Sense::hover(),
                );
                match self.load_image(ctx, &winner.image_url) {
                    Some(tex) => paint_image(ui.painter(), &tex, rect),
                    None => paint_image_placeholder(ui.painter(), rect),
                }
            });
        });
    }

    /// Toast in the bottom-right of the central panel: 3s visible, then
    /// fade. Hovering pauses the timer.
    pub(crate) fn render_toast(&mut self, ctx: &egui::Context) {
        let (Some(msg), Some(panel_rect)) = (self.toast_message.clone(), self.central_panel_rect)
        else {
            return;
        };
        let total_duration = TOAST_VISIBLE_SECS + TOAST_FADE_SECS;
        let margin = theme::SPACING_LG;
        let toast_pos = egui::pos2(panel_rect.right() - margin, panel_rect.bottom() - margin);

        let response = egui::Area::new(egui::Id::new("roster_toast"))
            .fixed_pos(toast_pos)
            .pivot(egui::Align2::RIGHT_BOTTOM)
            .show(ctx, |ui| {
                let elapsed = self.toast_start.map(|t| t.elapsed().as_secs_f32()).unwrap_or(0.0);
                let alpha = if elapsed > TOAST_VISIBLE_SECS {
                    ((total_duration - elapsed) / TOAST_FADE_SECS).clamp(0.0, 1.0)
                } else {
                    1.0
                };

                egui::Frame::new()
                    .fill(egui::Color32::from_rgba_unmultiplied(0x1a, 0x1a, 0x1e, (230.0 * alpha) as u8))
                    .stroke(egui::Stroke::new(
                        theme::STROKE_DEFAULT,
                        egui::Color32::from_rgba_unmultiplied(
                            theme::BTN_ADD.r(),
                            theme::BTN_ADD.g(),
                            theme::BTN_ADD.b(),
                            (100.0 * alpha) as u8,
                        ),
                    ))
                    .corner_radius(theme::RADIUS_MEDIUM)
                    .inner_margin(egui::Margin::symmetric(16, 10))
                    .show(ui, |ui| {
                        ui.label(egui::RichText::new(&msg).color(
                            egui::Color32::from_rgba_unmultiplied(255, 255, 255, (255.0 * alpha) as u8),
                        ));
                    });
            });

        // Pause timer while hovering
        if response.response.hovered() {
            self.toast_start = Some(std::time::Instant::now());
        }

        let elapsed = self.toast_start.map(|t| t.elapsed().as_secs_f32()).unwrap_or(0.0);
        if elapsed >= total_duration {
            self.toast_message = None;
            self.toast_start = None;
        } else {
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_fits_four_large_cards_in_content_width() {
        let (cols, w, h) = grid_layout(theme::CONTENT_MAX_WIDTH, theme::CARD_LARGE, theme::SPACING_XL);
        assert_eq!(cols, 4);
        assert_eq!(w, 185.0);
        assert_eq!(h, 256.0);
    }

    #[test]
    fn grid_never_drops_below_one_column() {
        let (cols, w, _) = grid_layout(100.0, theme::CARD_LARGE, theme::SPACING_XL);
        assert_eq!(cols, 1);
        assert_eq!(w, 100.0);
    }

    #[test]
    fn hints_follow_phase() {
        assert_eq!(phase_hint(Phase::Ready), "Ready! Start the battle");
        assert_ne!(phase_hint(Phase::Empty), phase_hint(Phase::Resolved));
    }
}
