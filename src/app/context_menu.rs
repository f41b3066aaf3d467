//! Right-click menu for roster cards

use super::App;
use crate::theme;
use crate::types::CreatureId;
use crate::utils::resolve_image_url;
use eframe::egui;
use tracing::warn;

impl App {
    pub(crate) fn creature_context_menu(&mut self, ui: &mut egui::Ui, id: CreatureId, image_url: &str) {
        ui.spacing_mut().item_spacing.y = 2.0;

        if self.arena.is_selected(id) {
            ui.add(
                egui::Label::new(
                    egui::RichText::new(format!("{}  Selected", egui_phosphor::regular::CHECK))
                        .size(theme::FONT_LABEL)
                        .color(theme::TEXT_DIM),
                )
                .selectable(false),
            );
        } else if theme::menu_item(ui, egui_phosphor::regular::CROSSHAIR, "Select for battle") {
            self.arena.select(id);
            ui.close_menu();
        }

        if !image_url.is_empty()
            && theme::menu_item(ui, egui_phosphor::regular::ARROW_SQUARE_OUT, "Open image in browser")
        {
            let url = resolve_image_url(image_url);
            if let Err(e) = open::that(url.as_ref()) {
                warn!(url = %url, error = %e, "Failed to open image URL");
            }
            ui.close_menu();
        }
    }
}
