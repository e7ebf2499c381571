//! Application-level modules for the Garage dashboard.
//!
//! This module contains the coordinators and centralized state management.

mod app_state;
mod dashboard_coordinator;
mod theme_coordinator;

pub use app_state::AppState;
pub use dashboard_coordinator::DashboardCoordinator;
pub use theme_coordinator::ThemeCoordinator;
