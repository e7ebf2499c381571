//! CRED Garage dashboard GUI application
//!
//! A personal finance dashboard built with the egui framework:
//! - Profile, benefits and finance sections released after simulated loading delays
//! - Skeleton placeholders while a section is loading
//! - Light, dark and system-following themes with a persisted preference

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state and coordinators
//! - `presentation/` - Visual styling and color mapping
//! - `ui/` - UI panel rendering
//! - `state/` - Theme and loading state

use eframe::egui;

mod app;
mod presentation;
mod state;
mod ui;

use app::{AppState, DashboardCoordinator, ThemeCoordinator};
use garage::config::{help_text, parse_args};
use garage::{Command, DashboardConfig};
use state::DashboardState;
use ui::panel_manager::{PanelInteraction, PanelManager};

/// Parses the command line and launches the dashboard window.
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = match parse_args(std::env::args().skip(1))? {
        Command::Help => {
            print!("{}", help_text());
            return Ok(());
        }
        Command::Run(config) => config,
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 860.0])
            .with_title("CRED Garage"),
        ..Default::default()
    };

    eframe::run_native(
        "CRED Garage",
        options,
        Box::new(move |cc| Ok(Box::new(GarageApp::new(cc, &config)))),
    )
    .map_err(|err| anyhow::anyhow!("failed to run the dashboard: {err}"))
}

/// The dashboard application.
///
/// Delegates to coordinators:
/// - `ThemeCoordinator` wires the theme controller to the egui context
/// - `DashboardCoordinator` loads data and releases sections
/// - `PanelManager` handles UI panel layout and rendering
struct GarageApp {
    /// Centralized application state
    state: AppState,
}

impl GarageApp {
    fn new(cc: &eframe::CreationContext, config: &DashboardConfig) -> Self {
        let theme = ThemeCoordinator::bootstrap(&cc.egui_ctx, config);
        let (data, error_message) = DashboardCoordinator::load_data(config);
        let dashboard = DashboardState::new(data, config.load_schedule());

        let mut state = AppState::new(theme, dashboard);
        state.error_message = error_message;
        Self { state }
    }

    fn handle_panel_interaction(&mut self, interaction: PanelInteraction, ctx: &egui::Context) {
        match interaction {
            PanelInteraction::ThemeToggled => self.state.theme.toggle(),
            PanelInteraction::ThemeModeSelected(mode) => self.state.theme.set_mode(mode),
        }
        ctx.request_repaint();
    }
}

impl eframe::App for GarageApp {
    /// Main update loop:
    /// 1. Follow the system colour scheme
    /// 2. Release sections whose loading delay elapsed
    /// 3. Render all panels via PanelManager
    /// 4. Handle panel interactions
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ThemeCoordinator::track_system_theme(ctx, &mut self.state);
        DashboardCoordinator::tick(ctx, &mut self.state);

        if let Some(interaction) = PanelManager::render_all_panels(ctx, &self.state) {
            self.handle_panel_interaction(interaction, ctx);
        }
    }
}

impl Drop for GarageApp {
    fn drop(&mut self) {
        self.state.unmount();
    }
}
