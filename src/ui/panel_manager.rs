//! Panel orchestration and layout management.
//!
//! Coordinates all UI panels (header, profile, benefits, finance, status) and
//! decides between section content and skeleton placeholders.

use crate::app::AppState;
use crate::ui::{benefits_panel, finance_panels, header, profile_panel, skeleton, status_bar};
use garage::{Section, ThemeMode};

/// Result of panel interactions that need to be handled by the application.
pub enum PanelInteraction {
    /// The light/dark toggle was clicked
    ThemeToggled,
    /// A theme mode was picked in the selector
    ThemeModeSelected(ThemeMode),
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// This is the main entry point for rendering the entire UI, called from
    /// the eframe::App::update() implementation.
    pub fn render_all_panels(ctx: &egui::Context, state: &AppState) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;
        let colors = state.theme.colors().clone();

        // Header panel at the top
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header_interaction) = header::render_header(ui, state) {
                interaction = Some(match header_interaction {
                    header::HeaderInteraction::ToggleRequested => PanelInteraction::ThemeToggled,
                    header::HeaderInteraction::ModeSelected(mode) => {
                        PanelInteraction::ThemeModeSelected(mode)
                    }
                });
            }
        });

        // Status panel at the very bottom
        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state);
        });

        let content_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(12))
            .fill(colors.background);

        egui::CentralPanel::default()
            .frame(content_frame)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().auto_shrink(false).show(ui, |ui| {
                    match state.dashboard.profile() {
                        Some(profile) => profile_panel::render_profile_panel(ui, profile, &colors),
                        None => skeleton::render_profile_skeleton(ui, &colors),
                    }
                    ui.add_space(12.0);

                    benefits_panel::render_benefits_panel(ui, state.dashboard.benefits(), &colors);
                    ui.add_space(12.0);

                    match state.dashboard.finance() {
                        Some(finance) if !state.dashboard.is_loading(Section::Points) => {
                            finance_panels::render_finance_panels(ui, finance, &colors);
                        }
                        _ => skeleton::render_points_skeleton(ui, &colors),
                    }
                });
            });

        interaction
    }
}
