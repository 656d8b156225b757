use scrolly_core::ProgressAnchor;
use serde::Deserialize;

/// Flat runtime configuration. On disk it is split into tables, see
/// `tables.rs`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default = "crate::config::defaults::default_window_width")]
    pub window_width: f32,
    #[serde(default = "crate::config::defaults::default_window_height")]
    pub window_height: f32,
    #[serde(default)]
    pub theme: ThemeMode,
    #[serde(default = "crate::config::defaults::default_progress_anchor")]
    pub progress_anchor: ProgressAnchor,
    #[serde(default = "crate::config::defaults::default_reveal_amount")]
    pub reveal_amount: f32,
    #[serde(default)]
    pub reveal_once: bool,
    #[serde(default = "crate::config::defaults::default_min_section_height")]
    pub min_section_height: f32,
    #[serde(default = "crate::config::defaults::default_show_nav_dots")]
    pub show_nav_dots: bool,
    #[serde(default = "crate::config::defaults::default_animation_tick_ms")]
    pub animation_tick_ms: u64,
    #[serde(default = "crate::config::defaults::default_intro_delay_ms")]
    pub intro_delay_ms: u64,
    #[serde(default = "crate::config::defaults::default_intro_fade_ms")]
    pub intro_fade_ms: u64,
    #[serde(default = "crate::config::defaults::default_key_next_section")]
    pub key_next_section: String,
    #[serde(default = "crate::config::defaults::default_key_prev_section")]
    pub key_prev_section: String,
    #[serde(default = "crate::config::defaults::default_key_toggle_theme")]
    pub key_toggle_theme: String,
    #[serde(default = "crate::config::defaults::default_key_quit")]
    pub key_quit: String,
    #[serde(default = "crate::config::defaults::default_log_level")]
    pub log_level: LogLevel,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            window_width: crate::config::defaults::default_window_width(),
            window_height: crate::config::defaults::default_window_height(),
            theme: ThemeMode::Day,
            progress_anchor: crate::config::defaults::default_progress_anchor(),
            reveal_amount: crate::config::defaults::default_reveal_amount(),
            reveal_once: false,
            min_section_height: crate::config::defaults::default_min_section_height(),
            show_nav_dots: crate::config::defaults::default_show_nav_dots(),
            animation_tick_ms: crate::config::defaults::default_animation_tick_ms(),
            intro_delay_ms: crate::config::defaults::default_intro_delay_ms(),
            intro_fade_ms: crate::config::defaults::default_intro_fade_ms(),
            key_next_section: crate::config::defaults::default_key_next_section(),
            key_prev_section: crate::config::defaults::default_key_prev_section(),
            key_toggle_theme: crate::config::defaults::default_key_toggle_theme(),
            key_quit: crate::config::defaults::default_key_quit(),
            log_level: crate::config::defaults::default_log_level(),
        }
    }
}

impl AppConfig {
    /// Pull out-of-range values back into something the page can render.
    pub(crate) fn normalized(mut self) -> Self {
        let defaults = AppConfig::default();
        if !self.window_width.is_finite() || self.window_width < 320.0 {
            self.window_width = defaults.window_width;
        }
        if !self.window_height.is_finite() || self.window_height < 240.0 {
            self.window_height = defaults.window_height;
        }
        self.reveal_amount = if self.reveal_amount.is_finite() {
            self.reveal_amount.clamp(0.0, 1.0)
        } else {
            defaults.reveal_amount
        };
        self.min_section_height = if self.min_section_height.is_finite() {
            self.min_section_height.max(200.0)
        } else {
            defaults.min_section_height
        };
        self.animation_tick_ms = self.animation_tick_ms.clamp(8, 250);
        self
    }
}

/// Day/night color scheme.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Day,
    Night,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Day => ThemeMode::Night,
            ThemeMode::Night => ThemeMode::Day,
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ThemeMode::Day => "Day",
            ThemeMode::Night => "Night",
        };
        write!(f, "{}", label)
    }
}

/// Supported logging verbosity levels.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Info
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_filter_str())
    }
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
