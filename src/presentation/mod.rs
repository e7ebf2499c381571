//! Presentation layer for visual styling and color mapping.
//!
//! This module contains presentation logic separated from the dashboard model:
//! - Chart series colors
//! - Colors for credits, debits and portfolio growth

pub mod color_mapping;
