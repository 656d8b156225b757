pub(crate) fn default_window_width() -> f32 {
    1280.0
}

pub(crate) fn default_window_height() -> f32 {
    860.0
}

/// The story ends just above the footer, so the container's bottom edge never
/// reaches the top of the viewport. Progress is measured over the scroll range.
pub(crate) fn default_progress_anchor() -> scrolly_core::ProgressAnchor {
    scrolly_core::ProgressAnchor::ScrollRange
}

pub(crate) fn default_reveal_amount() -> f32 {
    scrolly_core::DEFAULT_REVEAL_AMOUNT
}

pub(crate) fn default_min_section_height() -> f32 {
    720.0
}

pub(crate) fn default_show_nav_dots() -> bool {
    true
}

pub(crate) fn default_animation_tick_ms() -> u64 {
    16
}

pub(crate) fn default_intro_delay_ms() -> u64 {
    500
}

pub(crate) fn default_intro_fade_ms() -> u64 {
    800
}

pub(crate) fn default_key_next_section() -> String {
    "j".to_string()
}

pub(crate) fn default_key_prev_section() -> String {
    "k".to_string()
}

pub(crate) fn default_key_toggle_theme() -> String {
    "t".to_string()
}

pub(crate) fn default_key_quit() -> String {
    "q".to_string()
}

pub(crate) fn default_log_level() -> crate::config::LogLevel {
    crate::config::LogLevel::Info
}
