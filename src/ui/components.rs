//! Reusable UI components
//!
//! Standalone painting helpers shared by the roster grid and the winner
//! panel.

use crate::theme;
use crate::types::Stat;
use eframe::egui;

/// Text and color for a stat value; NaN stands out in amber
pub fn stat_text(stat: Stat) -> (String, egui::Color32) {
    match stat {
        Stat::Value(v) => (v.to_string(), theme::TEXT_SECONDARY),
        Stat::NotANumber => ("NaN".to_string(), theme::STATUS_NAN),
    }
}

/// Largest rect with the image's aspect ratio that fits inside `bounds`,
/// centered. Falls back to `bounds` for a degenerate image size.
pub fn fit_rect(image_size: egui::Vec2, bounds: egui::Rect) -> egui::Rect {
    if image_size.x <= 0.0 || image_size.y <= 0.0 {
        return bounds;
    }
    let scale = (bounds.width() / image_size.x).min(bounds.height() / image_size.y);
    egui::Rect::from_center_size(bounds.center(), image_size * scale)
}

/// Paint a texture letterboxed into `bounds`
pub fn paint_image(painter: &egui::Painter, texture: &egui::TextureHandle, bounds: egui::Rect) {
    let size = texture.size_vec2();
    let rect = fit_rect(size, bounds);
    let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
    painter.image(texture.id(), rect, uv, egui::Color32::WHITE);
}

/// Placeholder shown while an image loads or when it failed
pub fn paint_image_placeholder(painter: &egui::Painter, bounds: egui::Rect) {
    painter.rect_filled(bounds, theme::RADIUS_DEFAULT, theme::BG_ELEVATED);
    painter.text(
        bounds.center(),
        egui::Align2::CENTER_CENTER,
        egui_phosphor::regular::IMAGE,
        egui::FontId::proportional((bounds.height() * 0.3).clamp(12.0, 40.0)),
        theme::TEXT_DIM,
    );
}

/// One "Label: value" line on a card
pub fn paint_stat_row(painter: &egui::Painter, rect: egui::Rect, label: &str, stat: Stat) {
    let (value, color) = stat_text(stat);
    painter.text(
        rect.left_center(),
        egui::Align2::LEFT_CENTER,
        label,
        egui::FontId::proportional(theme::FONT_SMALL),
        theme::TEXT_MUTED,
    );
    painter.text(
        rect.right_center(),
        egui::Align2::RIGHT_CENTER,
        value,
        egui::FontId::proportional(theme::FONT_SMALL),
        color,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_rect_letterboxes_wide_image() {
        let bounds = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(100.0, 100.0));
        let r = fit_rect(egui::vec2(200.0, 100.0), bounds);
        assert_eq!(r.size(), egui::vec2(100.0, 50.0));
        assert_eq!(r.center(), bounds.center());
    }

    #[test]
    fn fit_rect_degenerate_uses_bounds() {
        let bounds = egui::Rect::from_min_size(egui::pos2(10.0, 10.0), egui::vec2(40.0, 30.0));
        assert_eq!(fit_rect(egui::Vec2::ZERO, bounds), bounds);
    }

    #[test]
    fn nan_stat_is_highlighted() {
        assert_eq!(stat_text(Stat::Value(7)), ("7".to_string(), theme::TEXT_SECONDARY));
        assert_eq!(stat_text(Stat::NotANumber).1, theme::STATUS_NAN);
    }
}
