//! Figures derived from dashboard data.

use crate::dashboard::fixtures::{ExpenseCategory, InvestmentPoint, PointsSource};

/// Percentage of `part` in `whole`, where an empty whole counts as fully used
/// whenever anything was spent against it.
fn share_percent(part: f64, whole: f64) -> f64 {
    if whole == 0.0 {
        if part > 0.0 {
            100.0
        } else {
            0.0
        }
    } else {
        part / whole * 100.0
    }
}

/// Progress towards the next level, clamped to `0..=100`.
pub fn level_progress(current_xp: u32, target_xp: u32) -> f32 {
    share_percent(f64::from(current_xp), f64::from(target_xp)).clamp(0.0, 100.0) as f32
}

/// Sum of all reward point sources, saturating at `u64::MAX`.
pub fn total_points(sources: &[PointsSource]) -> u64 {
    sources
        .iter()
        .fold(0u64, |total, source| total.saturating_add(source.value))
}

/// Rounded percentage of the credit limit in use.
///
/// May exceed 100 when the line is over its limit.
pub fn credit_utilization_percent(used: u64, limit: u64) -> u32 {
    share_percent(used as f64, limit as f64).round() as u32
}

/// Progress towards a savings goal, capped at 100.
pub fn savings_progress(saved: u64, goal: u64) -> f32 {
    share_percent(saved as f64, goal as f64).min(100.0) as f32
}

/// Change of a portfolio between its first and last data point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Growth {
    pub initial: i64,
    pub latest: i64,
    pub delta: i64,
    pub percent: f64,
}

impl Growth {
    pub fn is_gain(&self) -> bool {
        self.delta >= 0
    }
}

/// Growth over the series, `None` when there is no data.
pub fn investment_growth(series: &[InvestmentPoint]) -> Option<Growth> {
    let initial = series.first()?.value;
    let latest = series.last()?.value;
    // Widened so extreme series cannot overflow.
    let wide_delta = i128::from(latest) - i128::from(initial);
    let delta = latest.saturating_sub(initial);
    let percent = if initial == 0 {
        0.0
    } else {
        wide_delta as f64 / initial as f64 * 100.0
    };
    Some(Growth {
        initial,
        latest,
        delta,
        percent,
    })
}

/// Whether a transaction added or removed money.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Credit,
    Debit,
}

impl Direction {
    /// Credits are the amounts written with a leading `+`.
    pub fn of(amount: &str) -> Self {
        if amount.trim_start().starts_with('+') {
            Direction::Credit
        } else {
            Direction::Debit
        }
    }
}

pub fn expense_total(categories: &[ExpenseCategory]) -> u64 {
    categories
        .iter()
        .fold(0u64, |total, category| total.saturating_add(category.value))
}

/// Each category's share of total spending, in percent.
pub fn expense_shares(categories: &[ExpenseCategory]) -> Vec<(String, f32)> {
    let total = expense_total(categories) as f64;
    categories
        .iter()
        .map(|category| {
            let share = if total == 0.0 {
                0.0
            } else {
                category.value as f64 / total * 100.0
            };
            (category.name.clone(), share as f32)
        })
        .collect()
}

/// Largest value in a series, used to scale bar widths.
pub fn series_max(values: impl IntoIterator<Item = u64>) -> u64 {
    values.into_iter().max().unwrap_or(0)
}
