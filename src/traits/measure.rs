//! Text measurement trait abstraction.
//!
//! Stands in for a canvas-style rendering context: given a font, report how
//! many pixels a string occupies when drawn on one line.

use thiserror::Error;

/// Font parameters passed to a [`MeasurementContext`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSpec {
    /// Font family name, e.g. `"Arial"`
    pub family: &'static str,
    /// Font size in CSS pixels
    pub size_px: f32,
    /// Whether the bold face is used
    pub bold: bool,
}

impl FontSpec {
    /// Regular-weight Arial at the given pixel size.
    pub const fn arial(size_px: f32) -> Self {
        Self {
            family: "Arial",
            size_px,
            bold: false,
        }
    }

    /// Same font, bold face.
    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// CSS shorthand, e.g. `"16px Arial"`.
    pub fn css(&self) -> String {
        if self.bold {
            format!("bold {}px {}", self.size_px, self.family)
        } else {
            format!("{}px {}", self.size_px, self.family)
        }
    }
}

/// Measurement errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeasurementError {
    /// No rendering context could be obtained.
    #[error("Text measurement unavailable: {0}")]
    Unavailable(String),
}

/// A rendering context able to measure text width.
pub trait MeasurementContext: Send + Sync {
    /// Rendered width of `text` in pixels when set in `font`.
    fn measure_text(&self, text: &str, font: &FontSpec) -> Result<f32, MeasurementError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_css() {
        assert_eq!(FontSpec::arial(16.0).css(), "16px Arial");
        assert_eq!(FontSpec::arial(14.0).css(), "14px Arial");
        assert_eq!(FontSpec::arial(20.0).bold().css(), "bold 20px Arial");
    }
}
