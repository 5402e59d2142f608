//! Rendered pixel width of snippet text.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::traits::{FontSpec, MeasurementContext, MeasurementError};

/// Pixel budget for a title before search engines truncate it.
pub const MAX_TITLE_PX: f32 = 580.0;

/// Pixel budget for a meta description.
pub const MAX_DESCRIPTION_PX: f32 = 920.0;

/// Which search result layout is being previewed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Desktop,
    Mobile,
}

impl DisplayMode {
    /// Font used to measure text in this mode.
    pub fn font(&self) -> FontSpec {
        match self {
            DisplayMode::Desktop => FontSpec::arial(16.0),
            DisplayMode::Mobile => FontSpec::arial(14.0),
        }
    }

    /// The other mode.
    pub fn toggled(&self) -> Self {
        match self {
            DisplayMode::Desktop => DisplayMode::Mobile,
            DisplayMode::Mobile => DisplayMode::Desktop,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayMode::Desktop => "desktop",
            DisplayMode::Mobile => "mobile",
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DisplayMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "desktop" => Ok(DisplayMode::Desktop),
            "mobile" => Ok(DisplayMode::Mobile),
            other => Err(format!("unknown display mode '{}'", other)),
        }
    }
}

/// Measures text against the injected [`MeasurementContext`].
///
/// Results are advisory: when the context is unavailable the caller gets a
/// [`MeasurementError`] and should keep editing unaffected.
#[derive(Clone)]
pub struct TextMetrics {
    context: Arc<dyn MeasurementContext>,
}

impl TextMetrics {
    pub fn new(context: Arc<dyn MeasurementContext>) -> Self {
        Self { context }
    }

    /// Width of `text` in pixels for `mode`. Empty text is always 0.
    pub fn measure(&self, text: &str, mode: DisplayMode) -> Result<f32, MeasurementError> {
        self.measure_with(text, &mode.font())
    }

    /// Width of `text` in pixels for an explicit font.
    pub fn measure_with(&self, text: &str, font: &FontSpec) -> Result<f32, MeasurementError> {
        if text.is_empty() {
            return Ok(0.0);
        }
        let width = self.context.measure_text(text, font)?;
        if !width.is_finite() {
            return Err(MeasurementError::Unavailable(format!(
                "context returned non-finite width for {}",
                font.css()
            )));
        }
        Ok(width.max(0.0))
    }
}

impl fmt::Debug for TextMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextMetrics").finish_non_exhaustive()
    }
}
