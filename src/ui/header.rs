//! Header panel UI rendering
//!
//! Handles the top bar with the dashboard title, the light/dark toggle and
//! the theme mode selector.

use eframe::egui;
use egui::{Color32, RichText};
use garage::ThemeMode;
use crate::app::AppState;

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// User clicked the light/dark toggle
    ToggleRequested,
    /// User picked a mode in the selector
    ModeSelected(ThemeMode),
}

/// Icon and accessible label of the toggle for the current effective theme.
///
/// The button always offers the opposite of what is shown.
pub fn toggle_label(is_dark: bool) -> (&'static str, &'static str) {
    if is_dark {
        ("☀", "Switch to light mode")
    } else {
        ("🌙", "Switch to dark mode")
    }
}

/// Renders the application header
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
///
/// # Returns
/// * `Option<HeaderInteraction>` - User interaction result
pub fn render_header(ui: &mut egui::Ui, state: &AppState) -> Option<HeaderInteraction> {
    let mut interaction = None;
    let colors = state.theme.colors();

    ui.horizontal(|ui| {
        ui.label(
            RichText::new("CRED Garage")
                .heading()
                .strong()
                .color(colors.primary),
        );

        // Push theme controls to the right
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let (icon, label) = toggle_label(state.theme.is_dark());
            let toggle = ui.button(RichText::new(icon).size(18.0)).on_hover_text(label);
            if toggle.clicked() {
                interaction = Some(HeaderInteraction::ToggleRequested);
            }

            let current_mode = state.theme.mode();
            let mut selected = current_mode;
            egui::ComboBox::from_id_salt("theme_mode_selector")
                .selected_text(selected.label())
                .show_ui(ui, |ui| {
                    for mode in ThemeMode::ALL {
                        ui.selectable_value(&mut selected, mode, mode.label());
                    }
                });

            if selected != current_mode {
                interaction = Some(HeaderInteraction::ModeSelected(selected));
            }

            ui.label("Theme:");
        });
    });

    if let Some(err) = &state.error_message {
        ui.colored_label(Color32::RED, err);
    }

    interaction
}
