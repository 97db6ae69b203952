//! Theme registry and loader
//!
//! Built-in palettes come in dark/light pairs so the runtime theme toggle
//! always has somewhere to go.

pub mod aurora;
pub mod graphite;

use starlit_core::config::{ThemeColorOverrides, ThemeConfig};
use ratatui::style::Color;

use crate::theme::Theme;

/// Parse a hex color string into a ratatui Color
/// Accepts formats: "#RRGGBB", "RRGGBB", "#RGB", "RGB"
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.trim().trim_start_matches('#');

    match hex.len() {
        // Short form: RGB -> RRGGBB
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
            Some(Color::Rgb(r, g, b))
        }
        // Full form: RRGGBB
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        _ => None,
    }
}

/// Load a theme by name from config
pub fn load_theme(config: &ThemeConfig) -> Theme {
    let base = theme_by_name(&config.name);
    apply_overrides(base, &config.colors)
}

/// Look up a built-in theme by name, falling back to the default
pub fn theme_by_name(name: &str) -> Theme {
    match name.to_lowercase().as_str() {
        "aurora-light" => aurora::light(),
        "aurora-dark" | "aurora" => aurora::dark(),
        "graphite-light" => graphite::light(),
        "graphite-dark" | "graphite" => graphite::dark(),
        // Default fallback
        _ => aurora::dark(),
    }
}

/// The other half of a theme's dark/light pair, for the runtime toggle.
pub fn counterpart(name: &str) -> &'static str {
    match name.to_lowercase().as_str() {
        "aurora-light" => "aurora-dark",
        "graphite-light" => "graphite-dark",
        "graphite-dark" | "graphite" => "graphite-light",
        _ => "aurora-light",
    }
}

/// Apply user color overrides to a base theme
fn apply_overrides(mut theme: Theme, overrides: &ThemeColorOverrides) -> Theme {
    if let Some(ref hex) = overrides.bg0 {
        if let Some(color) = parse_hex_color(hex) {
            theme.bg0 = color;
        }
    }
    if let Some(ref hex) = overrides.bg1 {
        if let Some(color) = parse_hex_color(hex) {
            theme.bg1 = color;
        }
    }
    if let Some(ref hex) = overrides.bg2 {
        if let Some(color) = parse_hex_color(hex) {
            theme.bg2 = color;
        }
    }
    if let Some(ref hex) = overrides.fg0 {
        if let Some(color) = parse_hex_color(hex) {
            theme.fg0 = color;
        }
    }
    if let Some(ref hex) = overrides.fg1 {
        if let Some(color) = parse_hex_color(hex) {
            theme.fg1 = color;
        }
    }
    if let Some(ref hex) = overrides.muted {
        if let Some(color) = parse_hex_color(hex) {
            theme.muted = color;
        }
    }
    if let Some(ref hex) = overrides.accent {
        if let Some(color) = parse_hex_color(hex) {
            theme.accent = color;
        }
    }
    if let Some(ref hex) = overrides.accent_alt {
        if let Some(color) = parse_hex_color(hex) {
            theme.accent_alt = color;
        }
    }
    if let Some(ref hex) = overrides.success {
        if let Some(color) = parse_hex_color(hex) {
            theme.success = color;
        }
    }
    if let Some(ref hex) = overrides.warning {
        if let Some(color) = parse_hex_color(hex) {
            theme.warning = color;
        }
    }
    if let Some(ref hex) = overrides.error {
        if let Some(color) = parse_hex_color(hex) {
            theme.error = color;
        }
    }
    if let Some(ref hex) = overrides.info {
        if let Some(color) = parse_hex_color(hex) {
            theme.info = color;
        }
    }

    theme
}

/// Get list of available theme names
pub fn available_themes() -> Vec<&'static str> {
    vec![
        "aurora-dark",
        "aurora-light",
        "graphite-dark",
        "graphite-light",
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color_6digit() {
        let color = parse_hex_color("#ff5500").unwrap();
        assert!(matches!(color, Color::Rgb(255, 85, 0)));
    }

    #[test]
    fn test_parse_hex_color_3digit() {
        let color = parse_hex_color("#f50").unwrap();
        assert!(matches!(color, Color::Rgb(255, 85, 0)));
    }

    #[test]
    fn test_parse_hex_color_no_hash() {
        let color = parse_hex_color("ff5500").unwrap();
        assert!(matches!(color, Color::Rgb(255, 85, 0)));
    }

    #[test]
    fn test_parse_hex_color_invalid() {
        assert!(parse_hex_color("invalid").is_none());
        assert!(parse_hex_color("#gg0000").is_none());
    }

    #[test]
    fn test_load_theme_default() {
        let config = ThemeConfig::default();
        let theme = load_theme(&config);
        // Should load aurora-dark
        assert!(theme.dark);
        assert!(matches!(theme.bg0, Color::Rgb(0x0b, 0x10, 0x21)));
    }

    #[test]
    fn test_load_theme_with_override() {
        let config = ThemeConfig {
            name: "aurora-dark".to_string(),
            colors: ThemeColorOverrides {
                accent: Some("#ff0000".to_string()),
                ..Default::default()
            },
        };
        let theme = load_theme(&config);
        assert!(matches!(theme.accent, Color::Rgb(255, 0, 0)));
    }

    #[test]
    fn test_counterparts_flip_brightness() {
        for name in available_themes() {
            let theme = theme_by_name(name);
            let other = theme_by_name(counterpart(name));
            assert_ne!(theme.dark, other.dark, "{} has no opposite pair", name);
        }
    }

    #[test]
    fn test_counterpart_round_trips() {
        assert_eq!(counterpart(counterpart("aurora-dark")), "aurora-dark");
        assert_eq!(counterpart(counterpart("graphite-light")), "graphite-light");
    }

    #[test]
    fn test_unknown_theme_falls_back() {
        let theme = theme_by_name("does-not-exist");
        assert!(matches!(theme.bg0, Color::Rgb(0x0b, 0x10, 0x21)));
    }
}
