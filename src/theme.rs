//! Warm amber/stone palette for the story page, in day and night variants.

use crate::config::ThemeMode;
use iced::{Color, Theme as IcedTheme};
use scrolly_core::story::Rgb;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl From<ThemeMode> for Theme {
    fn from(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Night => Theme::Dark,
            ThemeMode::Day => Theme::Light,
        }
    }
}

impl From<Theme> for IcedTheme {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Light => IcedTheme::Light,
            Theme::Dark => IcedTheme::Dark,
        }
    }
}

/// Colors the view draws with directly, so they can be faded per element.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub accent_soft: Color,
    pub decline: Color,
    pub rise: Color,
    pub track: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Palette {
                background: Color::from_rgb8(0xFF, 0xFB, 0xEB),
                surface: Color::from_rgb8(0xFF, 0xFF, 0xFF),
                text: Color::from_rgb8(0x29, 0x25, 0x24),
                muted: Color::from_rgb8(0x78, 0x71, 0x6C),
                accent: Color::from_rgb8(0xD9, 0x77, 0x06),
                accent_soft: Color::from_rgb8(0xFE, 0xF3, 0xC7),
                decline: Color::from_rgb8(0xDC, 0x26, 0x26),
                rise: Color::from_rgb8(0x16, 0xA3, 0x4A),
                track: Color::from_rgb8(0xE7, 0xE5, 0xE4),
            },
            Theme::Dark => Palette {
                background: Color::from_rgb8(0x1C, 0x19, 0x17),
                surface: Color::from_rgb8(0x29, 0x25, 0x24),
                text: Color::from_rgb8(0xF5, 0xF5, 0xF4),
                muted: Color::from_rgb8(0xA8, 0xA2, 0x9E),
                accent: Color::from_rgb8(0xF5, 0x9E, 0x0B),
                accent_soft: Color::from_rgb8(0x45, 0x1A, 0x03),
                decline: Color::from_rgb8(0xF8, 0x71, 0x71),
                rise: Color::from_rgb8(0x4A, 0xDE, 0x80),
                track: Color::from_rgb8(0x44, 0x40, 0x3C),
            },
        }
    }
}

pub fn story_color(rgb: Rgb) -> Color {
    Color::from_rgb8(rgb.r, rgb.g, rgb.b)
}

/// Scale a color's alpha by `opacity`.
pub fn faded(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity.clamp(0.0, 1.0),
        ..color
    }
}
