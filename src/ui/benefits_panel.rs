//! Benefits panel: grid of benefit cards.

use eframe::egui;
use egui::RichText;
use garage::dashboard::Benefit;
use garage::ThemeColors;

use crate::ui::skeleton::{render_benefit_skeleton, BENEFIT_PLACEHOLDERS};
use crate::ui::widgets::card;

const COLUMNS: usize = 3;

fn render_benefit_card(ui: &mut egui::Ui, benefit: &Benefit, colors: &ThemeColors) {
    card(ui, colors, |ui| {
        ui.label(RichText::new(&benefit.icon).size(28.0));
        ui.label(RichText::new(&benefit.title).strong().color(colors.text));
        ui.label(RichText::new(&benefit.description).color(colors.text_dim));
        ui.add_space(6.0);
        // Call to action has no destination.
        ui.add(egui::Button::new(RichText::new(&benefit.cta).color(colors.primary)));
    });
}

/// Renders the benefit cards, or placeholders while `benefits` is `None`.
pub fn render_benefits_panel(ui: &mut egui::Ui, benefits: Option<&[Benefit]>, colors: &ThemeColors) {
    ui.label(RichText::new("Your Benefits").size(18.0).strong().color(colors.text));
    ui.add_space(6.0);

    ui.columns(COLUMNS, |columns| match benefits {
        Some(benefits) => {
            for (i, benefit) in benefits.iter().enumerate() {
                render_benefit_card(&mut columns[i % COLUMNS], benefit, colors);
                columns[i % COLUMNS].add_space(8.0);
            }
        }
        None => {
            for i in 0..BENEFIT_PLACEHOLDERS {
                render_benefit_skeleton(&mut columns[i % COLUMNS], colors);
                columns[i % COLUMNS].add_space(8.0);
            }
        }
    });
}
