//! UI panel rendering subsystem
//!
//! This module contains all UI panel rendering logic for the Garage dashboard:
//! - Header panel (title, theme toggle, theme mode selector)
//! - Profile panel (level progress and badges)
//! - Benefits panel (benefit cards)
//! - Finance panels (points, expenses, transactions, credit, investments, savings)
//! - Skeleton placeholders shown while sections load
//! - Status bar (footer)
//! - Panel manager (panel orchestration and layout)

pub mod header;
pub mod profile_panel;
pub mod benefits_panel;
pub mod finance_panels;
pub mod skeleton;
pub mod widgets;
pub mod status_bar;
pub mod panel_manager;
