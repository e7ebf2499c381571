//! Finance panels released together with the reward points.
//!
//! Charts are drawn as labelled bars: every row shows its value and a bar
//! scaled against the largest value of the series.

use eframe::egui;
use egui::RichText;
use garage::dashboard::metrics::{
    credit_utilization_percent, expense_shares, expense_total, investment_growth,
    savings_progress, series_max, total_points, Direction,
};
use garage::dashboard::{CreditLine, InvestmentPoint, SavingsGoal, Transaction};
use garage::format::{group_thousands, growth_label, percent, rupees, rupees_of};
use garage::{FinanceData, ThemeColors};

use crate::presentation::color_mapping;
use crate::ui::widgets::{card, card_title, swatch, value_bar};

fn fraction_of(value: u64, max: u64) -> f32 {
    if max == 0 {
        0.0
    } else {
        (value as f64 / max as f64) as f32
    }
}

/// Labelled row followed by a bar.
fn bar_row(
    ui: &mut egui::Ui,
    colors: &ThemeColors,
    index: usize,
    label: &str,
    value: &str,
    fraction: f32,
) {
    let color = color_mapping::series_color(index, colors);
    ui.horizontal(|ui| {
        swatch(ui, color);
        ui.label(RichText::new(label).color(colors.text));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(RichText::new(value).strong().color(colors.text));
        });
    });
    value_bar(ui, fraction, color, colors.muted);
    ui.add_space(4.0);
}

fn render_points(ui: &mut egui::Ui, finance: &FinanceData, colors: &ThemeColors) {
    card(ui, colors, |ui| {
        card_title(ui, colors, "Reward Points");
        let total = total_points(&finance.points);
        ui.label(
            RichText::new(group_thousands(total))
                .size(28.0)
                .strong()
                .color(colors.primary),
        );
        ui.label(RichText::new("Total points earned").color(colors.text_dim));
        ui.add_space(8.0);

        for (i, source) in finance.points.iter().enumerate() {
            bar_row(
                ui,
                colors,
                i,
                &source.name,
                &group_thousands(source.value),
                fraction_of(source.value, total),
            );
        }

        if !finance.history.is_empty() {
            ui.separator();
            ui.label(RichText::new("Monthly points").color(colors.text_dim));
            let max = series_max(finance.history.iter().map(|entry| entry.points));
            for entry in &finance.history {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(&entry.month).monospace().color(colors.text_dim));
                    ui.label(RichText::new(group_thousands(entry.points)).color(colors.text));
                });
                value_bar(ui, fraction_of(entry.points, max), colors.primary, colors.muted);
            }
        }
    });
}

fn render_expenses(ui: &mut egui::Ui, finance: &FinanceData, colors: &ThemeColors) {
    card(ui, colors, |ui| {
        card_title(ui, colors, "Expense Breakdown");
        ui.label(
            RichText::new(format!("Total spent: {}", rupees(expense_total(&finance.expenses))))
                .color(colors.text_dim),
        );
        ui.add_space(6.0);

        for (i, (category, share)) in expense_shares(&finance.expenses).iter().enumerate() {
            let amount = finance.expenses[i].value;
            bar_row(
                ui,
                colors,
                i,
                category,
                &format!("{} ({})", rupees(amount), percent(*share)),
                share / 100.0,
            );
        }
    });
}

fn render_transactions(ui: &mut egui::Ui, transactions: &[Transaction], colors: &ThemeColors) {
    card(ui, colors, |ui| {
        card_title(ui, colors, "Recent Transactions");
        for transaction in transactions {
            ui.horizontal(|ui| {
                ui.label(RichText::new(&transaction.icon).size(20.0));
                ui.vertical(|ui| {
                    ui.label(RichText::new(&transaction.name).color(colors.text));
                    ui.label(RichText::new(&transaction.date).small().color(colors.text_dim));
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let color =
                        color_mapping::direction_color(Direction::of(&transaction.amount), colors);
                    ui.label(RichText::new(&transaction.amount).strong().color(color));
                });
            });
            ui.add_space(4.0);
        }
    });
}

fn render_credit(ui: &mut egui::Ui, credit: CreditLine, colors: &ThemeColors) {
    card(ui, colors, |ui| {
        card_title(ui, colors, "Credit Utilization");
        let utilization = credit_utilization_percent(credit.used, credit.limit);
        ui.label(
            RichText::new(format!("{utilization}%"))
                .size(28.0)
                .strong()
                .color(colors.primary),
        );
        value_bar(ui, utilization as f32 / 100.0, colors.primary, colors.muted);
        ui.add_space(4.0);
        ui.label(RichText::new(rupees_of(credit.used, credit.limit)).color(colors.text));
        ui.label(RichText::new("Used of your credit limit").color(colors.text_dim));
    });
}

fn render_investments(ui: &mut egui::Ui, series: &[InvestmentPoint], colors: &ThemeColors) {
    card(ui, colors, |ui| {
        card_title(ui, colors, "Investment Portfolio");
        let Some(growth) = investment_growth(series) else {
            ui.label(RichText::new("No investment data available.").color(colors.text_dim));
            return;
        };

        ui.label(
            RichText::new(format!("₹{}", group_thousands(growth.latest)))
                .size(24.0)
                .strong()
                .color(colors.text),
        );
        ui.label(
            RichText::new(growth_label(&growth)).color(color_mapping::growth_color(&growth, colors)),
        );
        ui.add_space(6.0);

        let max = series_max(series.iter().map(|point| point.value.max(0) as u64));
        for point in series {
            ui.horizontal(|ui| {
                ui.label(RichText::new(&point.name).monospace().color(colors.text_dim));
                ui.label(RichText::new(format!("₹{}", group_thousands(point.value))).color(colors.text));
            });
            value_bar(ui, fraction_of(point.value.max(0) as u64, max), colors.primary, colors.muted);
        }
    });
}

fn render_savings(ui: &mut egui::Ui, goals: &[SavingsGoal], colors: &ThemeColors) {
    card(ui, colors, |ui| {
        card_title(ui, colors, "Savings Goals");
        if goals.is_empty() {
            ui.label(RichText::new("No savings goals available.").color(colors.text_dim));
            return;
        }

        for (i, goal) in goals.iter().enumerate() {
            let progress = savings_progress(goal.saved, goal.goal);
            bar_row(
                ui,
                colors,
                i,
                &goal.name,
                &format!("{} ({})", rupees_of(goal.saved, goal.goal), percent(progress)),
                progress / 100.0,
            );
        }
    });
}

/// Renders every finance panel in a two-column layout.
pub fn render_finance_panels(ui: &mut egui::Ui, finance: &FinanceData, colors: &ThemeColors) {
    ui.columns(2, |columns| {
        render_points(&mut columns[0], finance, colors);
        columns[0].add_space(8.0);
        render_transactions(&mut columns[0], &finance.transactions, colors);
        columns[0].add_space(8.0);
        render_investments(&mut columns[0], &finance.investments, colors);

        render_expenses(&mut columns[1], finance, colors);
        columns[1].add_space(8.0);
        render_credit(&mut columns[1], finance.credit, colors);
        columns[1].add_space(8.0);
        render_savings(&mut columns[1], &finance.savings, colors);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction_of() {
        assert_eq!(fraction_of(5, 10), 0.5);
        assert_eq!(fraction_of(3, 0), 0.0);
    }
}
