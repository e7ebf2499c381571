//! State management modules for the Garage dashboard.
//!
//! This module contains state-only logic (no UI concerns):
//! - Theme state (controller handle, latest snapshot, palette)
//! - Dashboard state (loading gate and released section data)

mod theme_state;
mod dashboard_state;

pub use theme_state::ThemeState;
pub use dashboard_state::DashboardState;
