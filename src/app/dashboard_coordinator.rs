//! Dashboard data loading coordination.
//!
//! Loads the data set at startup and releases sections as their simulated
//! loading delays elapse.

use garage::{DashboardConfig, DashboardData};

use crate::app::AppState;

/// Coordinates dashboard data loading.
pub struct DashboardCoordinator;

impl DashboardCoordinator {
    /// Loads the configured data set, falling back to the built-in sample.
    ///
    /// Returns the data and an error message for the header if the file
    /// could not be used.
    pub fn load_data(config: &DashboardConfig) -> (DashboardData, Option<String>) {
        let Some(path) = &config.data_path else {
            return (DashboardData::sample(), None);
        };

        match DashboardData::from_json_file(path) {
            Ok(data) => {
                tracing::info!(path = %path.display(), "loaded dashboard data");
                (data, None)
            }
            Err(err) => {
                tracing::error!(path = %path.display(), error = %format!("{err:#}"), "falling back to sample data");
                (DashboardData::sample(), Some(format!("Error loading data: {err:#}")))
            }
        }
    }

    /// Releases due sections and schedules a repaint for the next one.
    ///
    /// Called every frame.
    pub fn tick(ctx: &egui::Context, state: &mut AppState) {
        let elapsed = state.dashboard.elapsed();
        for section in state.dashboard.advance(elapsed) {
            tracing::debug!(?section, elapsed_ms = elapsed.as_millis() as u64, "section loaded");
        }
        if let Some(wait) = state.dashboard.next_deadline(elapsed) {
            ctx.request_repaint_after(wait);
        }
    }
}
