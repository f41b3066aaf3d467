//! Modal dialogs (add creature form, settings)

use super::App;
use crate::constants::APP_VERSION;
use crate::theme;
use eframe::egui;

/// Title row with a close "X". Returns true if the X was clicked.
fn modal_title(ui: &mut egui::Ui, title: &str) -> bool {
    let mut close = false;
    ui.horizontal(|ui| {
        ui.add(
            egui::Label::new(egui::RichText::new(title).size(theme::FONT_HEADING).strong())
                .selectable(false),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let (rect, response) = ui.allocate_exact_size(egui::vec2(24.0, 24.0), egui::Sense::click());
            let color = if response.hovered() {
                ui.painter().rect_filled(rect, theme::RADIUS_DEFAULT, theme::BG_SURFACE);
                ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                theme::STATUS_ERROR
            } else {
                theme::TEXT_DIM
            };
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                egui_phosphor::regular::X,
                egui::FontId::proportional(16.0),
                color,
            );
            close = response.clicked();
        });
    });
    ui.add_space(theme::SPACING_SM);
    ui.separator();
    ui.add_space(theme::SPACING_SM);
    close
}

fn section_label(ui: &mut egui::Ui, text: &str) {
    ui.add(
        egui::Label::new(egui::RichText::new(text).size(theme::FONT_LABEL).color(theme::ACCENT))
            .selectable(false),
    );
    ui.add_space(2.0);
}

impl App {
    pub(crate) fn render_add_form(&mut self, ctx: &egui::Context) {
        if !self.show_add_form {
            return;
        }

        let mut close = false;
        let mut submit = false;

        let modal_response = egui::Modal::new(egui::Id::new("add_creature_modal"))
            .backdrop_color(egui::Color32::from_black_alpha(120))
            .frame(theme::modal_frame())
            .show(ctx, |ui| {
                ui.set_width(theme::MODAL_WIDTH);
                close |= modal_title(ui, "Add Creature");

                let focus = std::mem::take(&mut self.focus_form);
                let form = &mut self.form;
                egui::Grid::new("add_creature_grid")
                    .num_columns(2)
                    .spacing([theme::SPACING_LG, theme::SPACING_MD])
                    .show(ui, |ui| {
                        let fields: [(&str, &mut String, &str); 6] = [
                            ("Name", &mut form.name, "Required"),
                            ("Attack", &mut form.attack, "0"),
                            ("Defense", &mut form.defense, "0"),
                            ("Speed", &mut form.speed, "0"),
                            ("HP", &mut form.hp, "0"),
                            ("Image URL", &mut form.image_url, "https://..."),
                        ];
                        for (i, (label, value, hint)) in fields.into_iter().enumerate() {
                            ui.label(egui::RichText::new(label).color(theme::TEXT_MUTED));
                            let response = ui.add(
                                egui::TextEdit::singleline(value)
                                    .hint_text(hint)
                                    .desired_width(200.0),
                            );
                            if i == 0 && focus {
                                response.request_focus();
                            }
                            ui.end_row();
                        }
                    });

                ui.add_space(theme::SPACING_SM);
                ui.add(
                    egui::Label::new(
                        egui::RichText::new("Decimals are rounded; anything that isn't a number is stored as NaN.")
                            .size(theme::FONT_SMALL)
                            .color(theme::TEXT_DIM),
                    )
                    .selectable(false),
                );
                ui.add_space(theme::SPACING_LG);

                let can_submit = self.form.has_name();
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let add = theme::action_button("Add", theme::BTN_ADD, theme::TEXT_PRIMARY, can_submit);
                    if ui.add_enabled(can_submit, add).clicked() {
                        submit = true;
                    }
                    if ui.add(theme::button("Cancel")).clicked() {
                        close = true;
                    }
                });

                if can_submit && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    submit = true;
                }
            });

        if submit {
            self.submit_add_form(ctx);
        } else if close || modal_response.should_close() {
            self.show_add_form = false;
        }
    }

    pub(crate) fn render_settings(&mut self, ctx: &egui::Context) {
        if !self.show_settings {
            return;
        }

        let mut close = false;
        let modal_response = egui::Modal::new(egui::Id::new("settings_modal"))
            .backdrop_color(egui::Color32::from_black_alpha(120))
            .frame(theme::modal_frame())
            .show(ctx, |ui| {
                ui.set_width(theme::MODAL_WIDTH);
                close |= modal_title(ui, "Settings");

                section_label(ui, "View");
                if theme::settings_checkbox(ui, self.large_cards, "Large cards") {
                    self.large_cards = !self.large_cards;
                }
                if theme::settings_checkbox(ui, self.show_stats, "Show stats on cards") {
                    self.show_stats = !self.show_stats;
                }

                ui.add_space(theme::SPACING_MD);
                ui.separator();
                ui.add_space(theme::SPACING_SM);

                section_label(ui, "Images");
                let (rect, response) =
                    ui.allocate_exact_size(egui::vec2(140.0, 26.0), egui::Sense::click());
                if response.hovered() {
                    ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                }
                let (fill, draw_rect) = theme::button_visual(&response, theme::BTN_DANGER, rect);
                ui.painter().rect_filled(draw_rect, theme::RADIUS_DEFAULT, fill);
                ui.painter().text(
                    draw_rect.center(),
                    egui::Align2::CENTER_CENTER,
                    format!("{}  Clear Image Cache", egui_phosphor::regular::TRASH),
                    egui::FontId::proportional(12.0),
                    theme::TEXT_PRIMARY,
                );
                if response.clicked() {
                    self.clear_image_cache(ui.ctx());
                }

                ui.add_space(theme::SPACING_LG);
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(format!("v{}", APP_VERSION))
                            .size(theme::FONT_SMALL)
                            .color(theme::TEXT_DIM),
                    )
                    .selectable(false),
                );
            });

        if close || modal_response.should_close() {
            self.show_settings = false;
            self.save_settings();
        }
    }
}
