//! Profile panel: name, level progress and badges.

use eframe::egui;
use egui::RichText;
use garage::dashboard::metrics::level_progress;
use garage::dashboard::UserProfile;
use garage::format::{group_thousands, percent};
use garage::ThemeColors;

use crate::ui::widgets::{card, value_bar};

pub fn render_profile_panel(ui: &mut egui::Ui, profile: &UserProfile, colors: &ThemeColors) {
    let progress = level_progress(profile.current_xp, profile.target_xp);

    card(ui, colors, |ui| {
        ui.horizontal(|ui| {
            let initial = profile.name.chars().next().unwrap_or('?');
            ui.label(
                RichText::new(initial.to_string())
                    .size(36.0)
                    .strong()
                    .color(colors.primary),
            )
            .on_hover_text(&profile.avatar_url);

            ui.vertical(|ui| {
                ui.label(RichText::new(&profile.name).size(20.0).strong().color(colors.text));
                ui.label(RichText::new(format!("Level {}", profile.level)).color(colors.text_dim));
            });
        });

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(format!(
                    "{} / {} XP",
                    group_thousands(profile.current_xp),
                    group_thousands(profile.target_xp)
                ))
                .color(colors.text_dim),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(RichText::new(percent(progress)).strong().color(colors.text));
            });
        });
        value_bar(ui, progress / 100.0, colors.primary, colors.muted);

        if !profile.badges.is_empty() {
            ui.add_space(8.0);
            ui.horizontal_wrapped(|ui| {
                for badge in &profile.badges {
                    egui::Frame::NONE
                        .fill(colors.muted)
                        .corner_radius(10.0)
                        .inner_margin(egui::Margin::symmetric(8, 2))
                        .show(ui, |ui| {
                            ui.label(RichText::new(badge).small().color(colors.text));
                        });
                }
            });
        }
    });
}
