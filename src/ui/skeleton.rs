//! Placeholder blocks shown while a section is loading.

use eframe::egui;
use garage::ThemeColors;

use crate::presentation::color_mapping;
use crate::ui::widgets::card;

/// Number of benefit cards drawn while benefits load.
pub const BENEFIT_PLACEHOLDERS: usize = 6;

fn block(ui: &mut egui::Ui, colors: &ThemeColors, width: f32, height: f32) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::hover());
    ui.painter()
        .rect_filled(rect, 4.0, color_mapping::skeleton_color(colors));
}

pub fn render_profile_skeleton(ui: &mut egui::Ui, colors: &ThemeColors) {
    card(ui, colors, |ui| {
        ui.horizontal(|ui| {
            block(ui, colors, 64.0, 64.0);
            ui.vertical(|ui| {
                block(ui, colors, 160.0, 18.0);
                ui.add_space(6.0);
                block(ui, colors, 100.0, 14.0);
            });
        });
        ui.add_space(10.0);
        let width = ui.available_width();
        block(ui, colors, width, 8.0);
    });
}

pub fn render_benefit_skeleton(ui: &mut egui::Ui, colors: &ThemeColors) {
    card(ui, colors, |ui| {
        let width = ui.available_width();
        block(ui, colors, 32.0, 32.0);
        ui.add_space(6.0);
        block(ui, colors, width * 0.6, 16.0);
        ui.add_space(4.0);
        block(ui, colors, width, 12.0);
        ui.add_space(8.0);
        block(ui, colors, 80.0, 24.0);
    });
}

pub fn render_points_skeleton(ui: &mut egui::Ui, colors: &ThemeColors) {
    card(ui, colors, |ui| {
        let width = ui.available_width();
        block(ui, colors, 180.0, 18.0);
        ui.add_space(8.0);
        block(ui, colors, width, 160.0);
    });
}
