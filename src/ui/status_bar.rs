//! Status bar UI rendering
//!
//! Handles the bottom bar with the footer notice and the active theme.

use eframe::egui;
use egui::RichText;
use crate::app::AppState;

pub const FOOTER_TEXT: &str = "© 2025 CRED Garage. All rights reserved.";

/// Renders the status panel at the bottom of the window
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState) {
    let colors = state.theme.colors();
    let snapshot = state.theme.snapshot();

    ui.horizontal(|ui| {
        ui.label(RichText::new(FOOTER_TEXT).color(colors.text_dim));

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let theme_text = format!("Theme: {} ({})", snapshot.mode.label(), snapshot.class().as_str());
            ui.label(RichText::new(theme_text).color(colors.text_dim));

            if !state.dashboard.all_loaded() {
                ui.separator();
                ui.spinner();
                ui.label(RichText::new("Loading…").color(colors.text_dim));
            }
        });
    });
}
