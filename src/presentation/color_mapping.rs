//! Color mapping for dashboard figures.
//!
//! Series colors cycle through the palette in a fixed order, so the same
//! category keeps its color across the points and expense panels.

use egui::Color32;
use garage::dashboard::metrics::{Direction, Growth};
use garage::{with_alpha, ThemeColors};

/// Returns the color of the `index`-th entry of a chart series.
pub fn series_color(index: usize, colors: &ThemeColors) -> Color32 {
    colors.series[index % colors.series.len()]
}

/// Green for credits, red for debits.
pub fn direction_color(direction: Direction, colors: &ThemeColors) -> Color32 {
    match direction {
        Direction::Credit => colors.positive,
        Direction::Debit => colors.negative,
    }
}

pub fn growth_color(growth: &Growth, colors: &ThemeColors) -> Color32 {
    if growth.is_gain() {
        colors.positive
    } else {
        colors.negative
    }
}

/// Fill of skeleton placeholders.
pub fn skeleton_color(colors: &ThemeColors) -> Color32 {
    with_alpha(colors.text_dim, 48)
}
