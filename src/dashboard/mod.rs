//! Dashboard data model, simulated loading and derived figures.
//!
//! - `fixtures` - the sections' data types and the built-in sample data
//! - `loading` - the three-flag gate that releases sections after fixed delays
//! - `metrics` - percentages, totals and growth computed from the data

pub mod fixtures;
pub mod loading;
pub mod metrics;

pub use fixtures::{
    Benefit, CreditLine, DashboardData, ExpenseCategory, FinanceData, InvestmentPoint,
    PointsHistory, PointsSource, SavingsGoal, Transaction, UserProfile,
};
pub use loading::{LoadSchedule, LoadingGate, Section};
