use super::defaults;
use super::models::{AppConfig, LogLevel, ThemeMode};
use scrolly_core::ProgressAnchor;
use serde::Deserialize;

/// On-disk layout of `conf/config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub(super) struct ConfigTables {
    #[serde(default)]
    window: WindowConfig,
    #[serde(default)]
    appearance: AppearanceConfig,
    #[serde(default)]
    scroll: ScrollConfig,
    #[serde(default)]
    intro: IntroConfig,
    #[serde(default)]
    keys: KeysConfig,
    #[serde(default)]
    logging: LoggingConfig,
}

impl From<ConfigTables> for AppConfig {
    fn from(tables: ConfigTables) -> Self {
        AppConfig {
            window_width: tables.window.width,
            window_height: tables.window.height,
            theme: tables.appearance.theme,
            show_nav_dots: tables.appearance.show_nav_dots,
            min_section_height: tables.appearance.min_section_height,
            progress_anchor: tables.scroll.progress_anchor,
            reveal_amount: tables.scroll.reveal_amount,
            reveal_once: tables.scroll.reveal_once,
            animation_tick_ms: tables.scroll.animation_tick_ms,
            intro_delay_ms: tables.intro.delay_ms,
            intro_fade_ms: tables.intro.fade_ms,
            key_next_section: tables.keys.next_section,
            key_prev_section: tables.keys.prev_section,
            key_toggle_theme: tables.keys.toggle_theme,
            key_quit: tables.keys.quit,
            log_level: tables.logging.log_level,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct WindowConfig {
    #[serde(default = "defaults::default_window_width")]
    width: f32,
    #[serde(default = "defaults::default_window_height")]
    height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            width: defaults::default_window_width(),
            height: defaults::default_window_height(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct AppearanceConfig {
    #[serde(default)]
    theme: ThemeMode,
    #[serde(default = "defaults::default_show_nav_dots")]
    show_nav_dots: bool,
    #[serde(default = "defaults::default_min_section_height")]
    min_section_height: f32,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        AppearanceConfig {
            theme: ThemeMode::default(),
            show_nav_dots: defaults::default_show_nav_dots(),
            min_section_height: defaults::default_min_section_height(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct ScrollConfig {
    #[serde(default = "defaults::default_progress_anchor")]
    progress_anchor: ProgressAnchor,
    #[serde(default = "defaults::default_reveal_amount")]
    reveal_amount: f32,
    #[serde(default)]
    reveal_once: bool,
    #[serde(default = "defaults::default_animation_tick_ms")]
    animation_tick_ms: u64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        ScrollConfig {
            progress_anchor: defaults::default_progress_anchor(),
            reveal_amount: defaults::default_reveal_amount(),
            reveal_once: false,
            animation_tick_ms: defaults::default_animation_tick_ms(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct IntroConfig {
    #[serde(default = "defaults::default_intro_delay_ms")]
    delay_ms: u64,
    #[serde(default = "defaults::default_intro_fade_ms")]
    fade_ms: u64,
}

impl Default for IntroConfig {
    fn default() -> Self {
        IntroConfig {
            delay_ms: defaults::default_intro_delay_ms(),
            fade_ms: defaults::default_intro_fade_ms(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct KeysConfig {
    #[serde(default = "defaults::default_key_next_section")]
    next_section: String,
    #[serde(default = "defaults::default_key_prev_section")]
    prev_section: String,
    #[serde(default = "defaults::default_key_toggle_theme")]
    toggle_theme: String,
    #[serde(default = "defaults::default_key_quit")]
    quit: String,
}

impl Default for KeysConfig {
    fn default() -> Self {
        KeysConfig {
            next_section: defaults::default_key_next_section(),
            prev_section: defaults::default_key_prev_section(),
            toggle_theme: defaults::default_key_toggle_theme(),
            quit: defaults::default_key_quit(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct LoggingConfig {
    #[serde(default = "defaults::default_log_level")]
    log_level: LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            log_level: defaults::default_log_level(),
        }
    }
}
