//! Small drawing helpers shared by the dashboard panels.

use eframe::egui;
use egui::{Color32, RichText, Stroke};
use garage::ThemeColors;

/// Draws a card frame around `add_contents`.
pub fn card<R>(
    ui: &mut egui::Ui,
    colors: &ThemeColors,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    egui::Frame::NONE
        .fill(colors.card)
        .stroke(Stroke::new(1.0, colors.border))
        .corner_radius(8.0)
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            add_contents(ui)
        })
        .inner
}

/// Card title line.
pub fn card_title(ui: &mut egui::Ui, colors: &ThemeColors, title: &str) {
    ui.label(RichText::new(title).strong().size(16.0).color(colors.text));
    ui.add_space(6.0);
}

/// Horizontal bar filled to `fraction` of the available width.
pub fn value_bar(ui: &mut egui::Ui, fraction: f32, fill: Color32, track: Color32) {
    let width = ui.available_width().max(1.0);
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, 8.0), egui::Sense::hover());
    let painter = ui.painter();
    painter.rect_filled(rect, 4.0, track);

    let fraction = fraction.clamp(0.0, 1.0);
    if fraction > 0.0 {
        let mut filled = rect;
        filled.set_width(rect.width() * fraction);
        painter.rect_filled(filled, 4.0, fill);
    }
}

/// Small colored square used as a legend marker.
pub fn swatch(ui: &mut egui::Ui, color: Color32) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(10.0, 10.0), egui::Sense::hover());
    ui.painter().rect_filled(rect, 2.0, color);
}
