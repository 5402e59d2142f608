//! Colors for the terminal UI and the preview card.

use ratatui::style::Color;

use crate::export::Theme;

pub const COLOR_BORDER: Color = Color::DarkGray;
pub const COLOR_FOCUS: Color = Color::White;
pub const COLOR_DIM: Color = Color::DarkGray;
pub const COLOR_OK: Color = Color::Rgb(4, 181, 117);
pub const COLOR_WARN: Color = Color::Rgb(245, 158, 11);
pub const COLOR_OVER: Color = Color::Red;
pub const COLOR_GLOW: Color = Color::LightYellow;

/// Colors of the simulated search result card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardPalette {
    pub background: Color,
    pub title: Color,
    pub url: Color,
    pub description: Color,
}

impl CardPalette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                background: Color::Rgb(255, 255, 255),
                title: Color::Rgb(26, 13, 171),
                url: Color::Rgb(44, 156, 122),
                description: Color::Rgb(60, 64, 67),
            },
            Theme::Dark => Self {
                background: Color::Rgb(17, 24, 39),
                title: Color::Rgb(138, 180, 248),
                url: Color::Rgb(44, 156, 122),
                description: Color::Rgb(229, 231, 235),
            },
        }
    }
}

/// Meter color: red once over budget, amber when close.
pub fn meter_color(ratio: f32, over_budget: bool) -> Color {
    if over_budget {
        COLOR_OVER
    } else if ratio > 0.9 {
        COLOR_WARN
    } else {
        COLOR_OK
    }
}
