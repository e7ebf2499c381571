//! Centralized application state for the Garage dashboard.
//!
//! Composes focused state components so that panels can borrow the theme and
//! the dashboard data independently.

use crate::state::{DashboardState, ThemeState};

/// Main application state composed of focused state components.
#[derive(Debug)]
pub struct AppState {
    // ===== Focused State Components =====
    /// Theme controller and effective palette
    pub theme: ThemeState,

    /// Section loading and released data
    pub dashboard: DashboardState,

    // ===== Top-Level State =====
    /// Current error message to display (if any)
    pub error_message: Option<String>,
}

impl AppState {
    pub fn new(theme: ThemeState, dashboard: DashboardState) -> Self {
        Self {
            theme,
            dashboard,
            error_message: None,
        }
    }

    /// Unmounts the dashboard: pending section releases are dropped and the
    /// theme stops following the system colour scheme.
    pub fn unmount(&mut self) {
        self.dashboard.unmount();
        self.theme.teardown();
    }
}
