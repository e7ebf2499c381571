//! Theme modes, resolution and colour palettes for the Garage dashboard.
//!
//! A [`ThemeMode`] is the user-facing preference (`system`, `light`, `dark`).
//! The effective dark/light state is never stored on its own: it is always
//! derived with [`resolve`] from the mode and the host's colour-scheme signal.
//!
//! # Examples
//!
//! ```
//! use garage::theme::{resolve, resolve_raw, ThemeMode};
//!
//! assert!(resolve(ThemeMode::Dark, false));
//! assert!(!resolve(ThemeMode::Light, true));
//! assert!(resolve_raw(Some("blue"), true));
//! ```

use egui::Color32;
use serde::{Deserialize, Serialize};
use std::fmt;

/// User-facing theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Always light.
    Light,
    /// Always dark.
    Dark,
    /// Follow the host's colour-scheme preference.
    #[default]
    #[serde(other)]
    System,
}

impl ThemeMode {
    /// All modes in the order they are offered in the UI.
    pub const ALL: [ThemeMode; 3] = [ThemeMode::System, ThemeMode::Light, ThemeMode::Dark];

    /// Strict parse: only the three literal strings are accepted.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "system" => Some(ThemeMode::System),
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    /// Lenient parse used for persisted and requested values.
    ///
    /// Absent, empty or unknown strings all become [`ThemeMode::System`].
    pub fn normalize(raw: Option<&str>) -> Self {
        raw.and_then(Self::parse).unwrap_or_default()
    }

    /// Storage representation of the mode.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::System => "system",
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Label shown in the mode selector.
    pub fn label(self) -> &'static str {
        match self {
            ThemeMode::System => "System",
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Binary class applied to the root presentation surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeClass {
    Light,
    Dark,
}

impl ThemeClass {
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark {
            ThemeClass::Dark
        } else {
            ThemeClass::Light
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeClass::Light => "light",
            ThemeClass::Dark => "dark",
        }
    }
}

/// Computes the effective dark mode for a mode and the system signal.
///
/// Callers without a colour-scheme query must pass `false`.
pub fn resolve(mode: ThemeMode, system_prefers_dark: bool) -> bool {
    match mode {
        ThemeMode::Light => false,
        ThemeMode::Dark => true,
        ThemeMode::System => system_prefers_dark,
    }
}

/// Same as [`resolve`] but for an unvalidated mode string.
pub fn resolve_raw(mode: Option<&str>, system_prefers_dark: bool) -> bool {
    resolve(ThemeMode::normalize(mode), system_prefers_dark)
}

/// Complete colour palette for one of the two presentation classes.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeColors {
    // Surfaces
    pub background: Color32,
    pub card: Color32,
    pub muted: Color32,
    pub border: Color32,

    // Text
    pub text: Color32,
    pub text_dim: Color32,

    // Accents
    pub primary: Color32,
    pub positive: Color32,
    pub negative: Color32,
    pub warning: Color32,

    /// Categorical series colours (points distribution, savings bars)
    pub series: [Color32; 4],
}

impl ThemeColors {
    /// Palette for the light class.
    pub fn light() -> Self {
        Self {
            background: hex_to_color32("#ffffff"),
            card: hex_to_color32("#f8fafc"),
            muted: hex_to_color32("#e2e8f0"),
            border: hex_to_color32("#cbd5e1"),

            text: hex_to_color32("#0f172a"),
            text_dim: hex_to_color32("#64748b"),

            primary: hex_to_color32("#6d28d9"),
            positive: hex_to_color32("#16a34a"),
            negative: hex_to_color32("#dc2626"),
            warning: hex_to_color32("#d97706"),

            series: [
                hex_to_color32("#FF5D51"),
                hex_to_color32("#FFB74D"),
                hex_to_color32("#4CAF50"),
                hex_to_color32("#2196F3"),
            ],
        }
    }

    /// Palette for the dark class.
    pub fn dark() -> Self {
        Self {
            background: hex_to_color32("#0b0f19"),
            card: hex_to_color32("#111827"),
            muted: hex_to_color32("#1f2937"),
            border: hex_to_color32("#374151"),

            text: hex_to_color32("#f8fafc"),
            text_dim: hex_to_color32("#94a3b8"),

            primary: hex_to_color32("#a78bfa"),
            positive: hex_to_color32("#22c55e"),
            negative: hex_to_color32("#ef4444"),
            warning: hex_to_color32("#f59e0b"),

            series: [
                hex_to_color32("#FF5D51"),
                hex_to_color32("#FFB74D"),
                hex_to_color32("#4CAF50"),
                hex_to_color32("#2196F3"),
            ],
        }
    }

    /// Palette for the given effective dark mode.
    pub fn for_class(class: ThemeClass) -> Self {
        match class {
            ThemeClass::Light => Self::light(),
            ThemeClass::Dark => Self::dark(),
        }
    }

    /// Builds egui visuals for this palette on top of egui's defaults.
    pub fn visuals(&self, class: ThemeClass) -> egui::Visuals {
        let mut visuals = match class {
            ThemeClass::Light => egui::Visuals::light(),
            ThemeClass::Dark => egui::Visuals::dark(),
        };
        self.apply_to(&mut visuals);
        visuals
    }

    /// Overrides the palette-driven parts of egui visuals.
    pub fn apply_to(&self, visuals: &mut egui::Visuals) {
        visuals.panel_fill = self.background;
        visuals.window_fill = self.card;
        visuals.extreme_bg_color = self.muted;
        visuals.faint_bg_color = self.card;

        visuals.override_text_color = Some(self.text);

        visuals.selection.bg_fill = with_alpha(self.primary, 96);
        visuals.selection.stroke.color = self.primary;

        visuals.widgets.noninteractive.bg_fill = self.card;
        visuals.widgets.noninteractive.bg_stroke.color = self.border;
        visuals.widgets.inactive.bg_fill = self.muted;
        visuals.widgets.hovered.bg_fill = self.muted;
        visuals.widgets.active.bg_fill = self.primary;

        visuals.hyperlink_color = self.primary;
        visuals.error_fg_color = self.negative;
        visuals.warn_fg_color = self.warning;
    }
}

/// Converts a hex colour string (like "#282a36") to Color32.
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::BLACK
    }
}

/// Returns the colour with a new alpha, keeping it unmultiplied.
pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_modes_override_system_signal() {
        assert!(!resolve(ThemeMode::Light, true));
        assert!(!resolve(ThemeMode::Light, false));
        assert!(resolve(ThemeMode::Dark, false));
        assert!(resolve(ThemeMode::Dark, true));
    }

    #[test]
    fn test_system_mode_follows_signal() {
        assert!(resolve(ThemeMode::System, true));
        assert!(!resolve(ThemeMode::System, false));
    }

    #[test]
    fn test_invalid_strings_resolve_as_system() {
        for raw in [Some("blue"), Some(""), Some("DARK"), None] {
            assert!(resolve_raw(raw, true), "{:?} should follow a dark system", raw);
            assert!(!resolve_raw(raw, false), "{:?} should follow a light system", raw);
        }
    }

    #[test]
    fn test_normalize() {
        assert_eq!(ThemeMode::normalize(Some("light")), ThemeMode::Light);
        assert_eq!(ThemeMode::normalize(Some("dark")), ThemeMode::Dark);
        assert_eq!(ThemeMode::normalize(Some("system")), ThemeMode::System);
        assert_eq!(ThemeMode::normalize(Some(" dark")), ThemeMode::System);
        assert_eq!(ThemeMode::normalize(None), ThemeMode::System);
    }

    #[test]
    fn test_serde_uses_storage_strings() {
        assert_eq!(serde_json::to_string(&ThemeMode::Dark).unwrap(), "\"dark\"");
        let mode: ThemeMode = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(mode, ThemeMode::Light);
        let mode: ThemeMode = serde_json::from_str("\"sepia\"").unwrap();
        assert_eq!(mode, ThemeMode::System);
    }

    #[test]
    fn test_theme_class() {
        assert_eq!(ThemeClass::from_dark(true).as_str(), "dark");
        assert_eq!(ThemeClass::from_dark(false).as_str(), "light");
    }

    #[test]
    fn test_hex_to_color32() {
        assert_eq!(hex_to_color32("#FF5D51"), Color32::from_rgb(0xff, 0x5d, 0x51));
        assert_eq!(hex_to_color32("bad"), Color32::BLACK);
    }

    #[test]
    fn test_palette_visuals_follow_class() {
        let dark = ThemeColors::dark().visuals(ThemeClass::Dark);
        assert!(dark.dark_mode);
        assert_eq!(dark.panel_fill, ThemeColors::dark().background);

        let light = ThemeColors::light().visuals(ThemeClass::Light);
        assert!(!light.dark_mode);
        assert_eq!(light.override_text_color, Some(ThemeColors::light().text));
    }
}
