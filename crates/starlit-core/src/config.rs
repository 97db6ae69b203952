use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::motion::Easing;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub motion: MotionConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            ui: UiConfig::default(),
            motion: MotionConfig::default(),
            keymap: KeymapConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log file lives here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Page content file; omitted means the embedded default page
    #[serde(default)]
    pub content_file: Option<PathBuf>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
            content_file: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Input poll timeout in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Show the splash screen on startup
    #[serde(default = "default_true")]
    pub splash: bool,
    /// Theme configuration
    #[serde(default)]
    pub theme: ThemeConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            splash: default_true(),
            theme: ThemeConfig::default(),
        }
    }
}

/// Animation timings and tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MotionConfig {
    /// Animate scrolling instead of jumping
    #[serde(default = "default_true")]
    pub smooth_scroll: bool,
    /// Smooth scroll duration in milliseconds
    #[serde(default = "default_scroll_duration")]
    pub scroll_duration_ms: u64,
    /// Easing curve for smooth scrolling and reveals
    #[serde(default)]
    pub easing: Easing,
    /// Section reveal fade duration in milliseconds
    #[serde(default = "default_reveal_duration")]
    pub reveal_duration_ms: u64,
    /// Stat counter run time in milliseconds
    #[serde(default = "default_counter_duration")]
    pub counter_duration_ms: u64,
    /// Carousel autoplay interval in milliseconds (0 = off)
    #[serde(default = "default_autoplay_interval")]
    pub autoplay_interval_ms: u64,
    /// Magnetic pull factor for hero buttons
    #[serde(default = "default_magnetic_strength")]
    pub magnetic_strength: f32,
    /// Rows scrolled before the navigation bar condenses
    #[serde(default = "default_scroll_threshold")]
    pub scroll_threshold_rows: u16,
    /// Quiet period before a resize rebuilds the particle field, in milliseconds
    #[serde(default = "default_resize_debounce")]
    pub resize_debounce_ms: u64,
    /// Splash screen duration in milliseconds
    #[serde(default = "default_splash_duration")]
    pub splash_ms: u64,
    /// Tagline typewriter speed, milliseconds per character
    #[serde(default = "default_typewriter_char")]
    pub typewriter_char_ms: u64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            smooth_scroll: default_true(),
            scroll_duration_ms: default_scroll_duration(),
            easing: Easing::default(),
            reveal_duration_ms: default_reveal_duration(),
            counter_duration_ms: default_counter_duration(),
            autoplay_interval_ms: default_autoplay_interval(),
            magnetic_strength: default_magnetic_strength(),
            scroll_threshold_rows: default_scroll_threshold(),
            resize_debounce_ms: default_resize_debounce(),
            splash_ms: default_splash_duration(),
            typewriter_char_ms: default_typewriter_char(),
        }
    }
}

/// Theme configuration
/// Can be specified as a simple string (theme name) or as a full struct with overrides
#[derive(Debug, Clone, Serialize)]
pub struct ThemeConfig {
    /// Theme name (e.g., "aurora-dark", "graphite-light")
    pub name: String,
    /// Optional color overrides for semantic colors
    pub colors: ThemeColorOverrides,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: default_theme_name(),
            colors: ThemeColorOverrides::default(),
        }
    }
}

// Custom deserializer to accept either a string or a struct
impl<'de> Deserialize<'de> for ThemeConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, MapAccess, Visitor};
        use std::fmt;

        struct ThemeConfigVisitor;

        impl<'de> Visitor<'de> for ThemeConfigVisitor {
            type Value = ThemeConfig;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string (theme name) or a map with 'name' and optional 'colors'")
            }

            // Accept a simple string as just the theme name
            fn visit_str<E>(self, value: &str) -> Result<ThemeConfig, E>
            where
                E: de::Error,
            {
                Ok(ThemeConfig {
                    name: value.to_string(),
                    colors: ThemeColorOverrides::default(),
                })
            }

            // Accept a map/struct with 'name' and optional 'colors'
            fn visit_map<M>(self, mut map: M) -> Result<ThemeConfig, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut name: Option<String> = None;
                let mut colors: Option<ThemeColorOverrides> = None;

                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "name" => {
                            name = Some(map.next_value()?);
                        }
                        "colors" => {
                            colors = Some(map.next_value()?);
                        }
                        _ => {
                            let _: serde::de::IgnoredAny = map.next_value()?;
                        }
                    }
                }

                Ok(ThemeConfig {
                    name: name.unwrap_or_else(default_theme_name),
                    colors: colors.unwrap_or_default(),
                })
            }
        }

        deserializer.deserialize_any(ThemeConfigVisitor)
    }
}

fn default_theme_name() -> String {
    "aurora-dark".to_string()
}

/// Optional color overrides for theme customization
/// Each color is a hex string (e.g., "#6366f1" or "6366f1")
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeColorOverrides {
    /// Page background
    pub bg0: Option<String>,
    /// Card background
    pub bg1: Option<String>,
    /// Hover / selection background
    pub bg2: Option<String>,
    /// Primary foreground
    pub fg0: Option<String>,
    /// Secondary foreground (slightly dimmer)
    pub fg1: Option<String>,
    /// Muted foreground (hints, separators)
    pub muted: Option<String>,
    /// Primary brand color (particles, buttons, active dots)
    pub accent: Option<String>,
    /// Secondary brand color (gradient partner)
    pub accent_alt: Option<String>,
    /// Success color
    pub success: Option<String>,
    /// Warning color
    pub warning: Option<String>,
    /// Error color
    pub error: Option<String>,
    /// Info color
    pub info: Option<String>,
}

/// Keymap configuration using Vim-style notation
/// Format: "j", "k", "<C-j>" (Ctrl+j), "<CR>" (Enter), "<Esc>", "<Tab>", "<Space>"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    /// Quit the application
    #[serde(default = "default_key_quit")]
    pub quit: String,

    // Scrolling
    /// Scroll down one row
    #[serde(default = "default_key_scroll_down")]
    pub scroll_down: String,
    /// Scroll up one row
    #[serde(default = "default_key_scroll_up")]
    pub scroll_up: String,
    /// Scroll half page down
    #[serde(default = "default_key_scroll_half_down")]
    pub scroll_half_down: String,
    /// Scroll half page up
    #[serde(default = "default_key_scroll_half_up")]
    pub scroll_half_up: String,

    // Section navigation
    /// Jump to the next section
    #[serde(default = "default_key_next_section")]
    pub next_section: String,
    /// Jump to the previous section
    #[serde(default = "default_key_prev_section")]
    pub prev_section: String,
    /// Jump to top of the page
    #[serde(default = "default_key_jump_to_top")]
    pub jump_to_top: String,
    /// Jump to bottom of the page
    #[serde(default = "default_key_jump_to_bottom")]
    pub jump_to_bottom: String,

    // Carousel
    /// Next testimonial slide
    #[serde(default = "default_key_next_slide")]
    pub next_slide: String,
    /// Previous testimonial slide
    #[serde(default = "default_key_prev_slide")]
    pub prev_slide: String,

    // Actions
    /// Toggle between the dark and light theme
    #[serde(default = "default_key_toggle_theme")]
    pub toggle_theme: String,
    /// Open the primary action link in the browser
    #[serde(default = "default_key_open_link")]
    pub open_link: String,
    /// Show the help overlay
    #[serde(default = "default_key_help")]
    pub help: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            quit: default_key_quit(),
            scroll_down: default_key_scroll_down(),
            scroll_up: default_key_scroll_up(),
            scroll_half_down: default_key_scroll_half_down(),
            scroll_half_up: default_key_scroll_half_up(),
            next_section: default_key_next_section(),
            prev_section: default_key_prev_section(),
            jump_to_top: default_key_jump_to_top(),
            jump_to_bottom: default_key_jump_to_bottom(),
            next_slide: default_key_next_slide(),
            prev_slide: default_key_prev_slide(),
            toggle_theme: default_key_toggle_theme(),
            open_link: default_key_open_link(),
            help: default_key_help(),
        }
    }
}

// Default keymap values (Vim-style notation)
fn default_key_quit() -> String { "q".to_string() }
fn default_key_scroll_down() -> String { "j".to_string() }
fn default_key_scroll_up() -> String { "k".to_string() }
fn default_key_scroll_half_down() -> String { "<C-d>".to_string() }
fn default_key_scroll_half_up() -> String { "<C-u>".to_string() }
fn default_key_next_section() -> String { "n".to_string() }
fn default_key_prev_section() -> String { "p".to_string() }
fn default_key_jump_to_top() -> String { "gg".to_string() }
fn default_key_jump_to_bottom() -> String { "G".to_string() }
fn default_key_next_slide() -> String { "l".to_string() }
fn default_key_prev_slide() -> String { "h".to_string() }
fn default_key_toggle_theme() -> String { "t".to_string() }
fn default_key_open_link() -> String { "o".to_string() }
fn default_key_help() -> String { "?".to_string() }

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("starlit")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_tick_rate() -> u64 {
    33
}

fn default_scroll_duration() -> u64 {
    250
}

fn default_reveal_duration() -> u64 {
    300
}

fn default_counter_duration() -> u64 {
    2000
}

fn default_autoplay_interval() -> u64 {
    5000
}

fn default_magnetic_strength() -> f32 {
    0.3
}

fn default_scroll_threshold() -> u16 {
    6
}

fn default_resize_debounce() -> u64 {
    250
}

fn default_splash_duration() -> u64 {
    1500
}

fn default_typewriter_char() -> u64 {
    30
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&config_path, self.to_toml_string()?)?;

        Ok(())
    }

    /// Serialize the configuration as pretty TOML
    pub fn to_toml_string(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Get the configuration file path
    /// Always uses ~/.config/starlit/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("starlit")
            .join("config.toml")
    }

    /// Get the log file path
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("starlit.log")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_page_timings() {
        let config = AppConfig::default();
        assert_eq!(config.motion.reveal_duration_ms, 300);
        assert_eq!(config.motion.counter_duration_ms, 2000);
        assert_eq!(config.motion.autoplay_interval_ms, 5000);
        assert_eq!(config.motion.resize_debounce_ms, 250);
        assert!((config.motion.magnetic_strength - 0.3).abs() < f32::EPSILON);
        assert!(config.motion.smooth_scroll);
    }

    #[test]
    fn test_theme_as_string() {
        let config: AppConfig = toml::from_str(
            r#"
            [ui]
            theme = "graphite-light"
            "#,
        )
        .unwrap();
        assert_eq!(config.ui.theme.name, "graphite-light");
        assert!(config.ui.theme.colors.accent.is_none());
    }

    #[test]
    fn test_theme_as_map_with_overrides() {
        let config: AppConfig = toml::from_str(
            r##"
            [ui.theme]
            name = "aurora-dark"
            colors = { accent = "#ff0000", bg0 = "000000" }
            "##,
        )
        .unwrap();
        assert_eq!(config.ui.theme.name, "aurora-dark");
        assert_eq!(config.ui.theme.colors.accent.as_deref(), Some("#ff0000"));
        assert_eq!(config.ui.theme.colors.bg0.as_deref(), Some("000000"));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [motion]
            autoplay_interval_ms = 8000
            "#,
        )
        .unwrap();
        assert_eq!(config.motion.autoplay_interval_ms, 8000);
        assert_eq!(config.motion.counter_duration_ms, 2000);
        assert_eq!(config.ui.tick_rate_ms, 33);
    }
}
