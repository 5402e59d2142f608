//! Deterministic measurement context for testing.

use std::sync::{Arc, Mutex};

use crate::traits::{FontSpec, MeasurementContext, MeasurementError};

/// Every character is `em_per_char` ems wide.
///
/// Widths are `chars * em_per_char * font.size_px`, which keeps test
/// expectations exact. Can be switched to report itself unavailable.
#[derive(Debug, Clone)]
pub struct FixedWidthMetrics {
    em_per_char: f32,
    available: Arc<Mutex<bool>>,
}

impl FixedWidthMetrics {
    pub fn new(em_per_char: f32) -> Self {
        Self {
            em_per_char,
            available: Arc::new(Mutex::new(true)),
        }
    }

    /// A context that always fails with [`MeasurementError::Unavailable`].
    pub fn unavailable() -> Self {
        let metrics = Self::new(0.5);
        metrics.set_available(false);
        metrics
    }

    pub fn set_available(&self, available: bool) {
        *self.available.lock().unwrap() = available;
    }
}

impl Default for FixedWidthMetrics {
    fn default() -> Self {
        Self::new(0.5)
    }
}

impl MeasurementContext for FixedWidthMetrics {
    fn measure_text(&self, text: &str, font: &FontSpec) -> Result<f32, MeasurementError> {
        if !*self.available.lock().unwrap() {
            return Err(MeasurementError::Unavailable(
                "mock context disabled".to_string(),
            ));
        }
        Ok(text.chars().count() as f32 * self.em_per_char * font.size_px)
    }
}
