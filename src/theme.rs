//! Colour palette for the calendar card
//! Defaults are a dim palette that reads on both dark and light notebook themes

use serde::{Deserialize, Serialize};

/// Theme colors for the header card, as CSS hex strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub accent: String,      // Title, month band, link icon
    pub rule: String,        // Left border of the wrapper
    pub card_bg: String,     // Calendar body
    pub card_border: String,
    pub band_bg: String,     // Label and time bands
    pub band_text: String,
    pub month_text: String,
    pub day_bg: String,
    pub day_text: String,
    pub time_text: String,
    pub label: String,       // Text in the top band of the card
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: "#EF8C00".to_string(),
            rule: "#666".to_string(),
            card_bg: "#2d2d2d".to_string(),
            card_border: "#444".to_string(),
            band_bg: "#333".to_string(),
            band_text: "#ddd".to_string(),
            month_text: "#fff".to_string(),
            day_bg: "#3a3a3a".to_string(),
            day_text: "#eee".to_string(),
            time_text: "#bbb".to_string(),
            label: "Last modified".to_string(),
        }
    }
}

/// Optional per-field colour overrides, as read from the config file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_bg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_border: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub band_bg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub band_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_bg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_text: Option<String>,
}

impl Theme {
    /// Apply config overrides on top of this theme.
    /// Values that are not valid hex colours are skipped with a warning.
    pub fn with_overrides(mut self, overrides: &ThemeOverrides) -> Self {
        let slots: [(&str, &mut String, &Option<String>); 10] = [
            ("accent", &mut self.accent, &overrides.accent),
            ("rule", &mut self.rule, &overrides.rule),
            ("card_bg", &mut self.card_bg, &overrides.card_bg),
            ("card_border", &mut self.card_border, &overrides.card_border),
            ("band_bg", &mut self.band_bg, &overrides.band_bg),
            ("band_text", &mut self.band_text, &overrides.band_text),
            ("month_text", &mut self.month_text, &overrides.month_text),
            ("day_bg", &mut self.day_bg, &overrides.day_bg),
            ("day_text", &mut self.day_text, &overrides.day_text),
            ("time_text", &mut self.time_text, &overrides.time_text),
        ];

        for (name, slot, value) in slots {
            let Some(value) = value else { continue };
            match normalize_hex_color(value) {
                Some(color) => *slot = color,
                None => tracing::warn!(field = name, value = %value, "Ignoring invalid theme color"),
            }
        }

        self
    }

    /// Replace the card label. Blank labels keep the current one.
    pub fn with_label(mut self, label: &str) -> Self {
        if !label.trim().is_empty() {
            self.label = label.to_string();
        }
        self
    }
}

/// Validate a hex color string (#RRGGBB or #RGB, leading '#' optional)
/// and return it in `#...` form
fn normalize_hex_color(s: &str) -> Option<String> {
    let hex = s.trim().trim_start_matches('#');

    if (hex.len() == 6 || hex.len() == 3) && hex.chars().all(|c| c.is_ascii_hexdigit()) {
        Some(format!("#{}", hex))
    } else {
        None
    }
}
