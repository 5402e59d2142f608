//! Table-driven text measurement approximating Arial.
//!
//! Advance widths are Arial's, in thousandths of an em, for printable ASCII.
//! Other characters fall back on their `unicode-width` cell count. No
//! kerning or shaping; close enough to predict SERP truncation.

use unicode_width::UnicodeWidthChar;

use crate::traits::{FontSpec, MeasurementContext, MeasurementError};

/// Arial advance widths for U+0020..=U+007E, in 1/1000 em.
const ARIAL_ASCII_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // '0'..'9'
    278, 278, 584, 584, 584, 556, 1015, // ':'..'@'
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, // 'A'..'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // 'N'..'Z'
    278, 278, 278, 469, 556, 333, // '['..'`'
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, // 'a'..'m'
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // 'n'..'z'
    334, 260, 334, 584, // '{'..'~'
];

/// Width used for narrow non-ASCII characters (Arial's average glyph).
const NARROW_FALLBACK: u16 = 556;

/// Width used for wide (CJK, emoji) characters.
const WIDE_FALLBACK: u16 = 1000;

/// Bold faces run roughly this much wider than regular.
const BOLD_FACTOR: f32 = 1.08;

/// Production [`MeasurementContext`] backed by a fixed width table.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArialMetrics;

impl ArialMetrics {
    pub fn new() -> Self {
        Self
    }

    fn advance(c: char) -> u16 {
        match c {
            ' '..='~' => ARIAL_ASCII_WIDTHS[c as usize - 0x20],
            '\t' => ARIAL_ASCII_WIDTHS[0],
            _ => match c.width() {
                Some(0) | None => 0,
                Some(1) => NARROW_FALLBACK,
                Some(_) => WIDE_FALLBACK,
            },
        }
    }
}

impl MeasurementContext for ArialMetrics {
    fn measure_text(&self, text: &str, font: &FontSpec) -> Result<f32, MeasurementError> {
        let units: u32 = text.chars().map(|c| u32::from(Self::advance(c))).sum();
        let mut width = units as f32 / 1000.0 * font.size_px;
        if font.bold {
            width *= BOLD_FACTOR;
        }
        Ok(width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measure(text: &str, size: f32) -> f32 {
        ArialMetrics::new()
            .measure_text(text, &FontSpec::arial(size))
            .unwrap()
    }

    #[test]
    fn test_table_covers_printable_ascii() {
        assert_eq!(ArialMetrics::advance(' '), 278);
        assert_eq!(ArialMetrics::advance('@'), 1015);
        assert_eq!(ArialMetrics::advance('W'), 944);
        assert_eq!(ArialMetrics::advance('i'), 222);
        assert_eq!(ArialMetrics::advance('~'), 584);
    }

    #[test]
    fn test_known_title_width() {
        // 8004 units at 16px.
        let width = measure("Buy Shoes Online", 16.0);
        assert!((width - 128.064).abs() < 0.01, "width was {}", width);
        assert!(width < 580.0);
    }

    #[test]
    fn test_narrow_letters_are_narrower() {
        assert!(measure("iiiiiiiiii", 16.0) < measure("WWWWWWWWWW", 16.0));
    }

    #[test]
    fn test_non_ascii_fallbacks() {
        assert_eq!(ArialMetrics::advance('é'), NARROW_FALLBACK);
        assert_eq!(ArialMetrics::advance('界'), WIDE_FALLBACK);
        assert_eq!(ArialMetrics::advance('\u{0301}'), 0);
    }

    #[test]
    fn test_bold_is_wider() {
        let metrics = ArialMetrics::new();
        let regular = metrics.measure_text("Snippet", &FontSpec::arial(20.0)).unwrap();
        let bold = metrics
            .measure_text("Snippet", &FontSpec::arial(20.0).bold())
            .unwrap();
        assert!(bold > regular);
    }
}
