//! Values the presentation layer renders for the current snippet.

use serde::Serialize;

use super::draft::{RewriteResult, SnippetDraft};
use crate::metrics::{estimate_tokens, DisplayMode, TextMetrics, MAX_DESCRIPTION_PX, MAX_TITLE_PX};

/// Derived, never stored. Rebuilt from scratch on every read.
///
/// Pixel widths are `None` when the measurement context is unavailable; the
/// budget flags then read as not over budget.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnippetView {
    pub display_title: String,
    pub display_description: String,
    pub url: String,
    pub mode: DisplayMode,
    pub title_width: Option<f32>,
    pub description_width: Option<f32>,
    pub title_tokens: usize,
    pub description_tokens: usize,
}

impl SnippetView {
    pub fn title_over_budget(&self) -> bool {
        self.title_width.is_some_and(|w| w > MAX_TITLE_PX)
    }

    pub fn description_over_budget(&self) -> bool {
        self.description_width.is_some_and(|w| w > MAX_DESCRIPTION_PX)
    }

    /// Title width as a fraction of its budget (may exceed 1.0).
    pub fn title_ratio(&self) -> Option<f32> {
        self.title_width.map(|w| w / MAX_TITLE_PX)
    }

    /// Description width as a fraction of its budget (may exceed 1.0).
    pub fn description_ratio(&self) -> Option<f32> {
        self.description_width.map(|w| w / MAX_DESCRIPTION_PX)
    }

    /// True when either width could not be measured.
    pub fn measurement_degraded(&self) -> bool {
        self.title_width.is_none() || self.description_width.is_none()
    }
}

/// Composes the draft, the rewrite overlay and the metrics into a [`SnippetView`].
pub struct SnippetViewModel;

impl SnippetViewModel {
    pub fn derive(
        draft: &SnippetDraft,
        result: Option<&RewriteResult>,
        metrics: &TextMetrics,
    ) -> SnippetView {
        let display_title = overlay(result.and_then(|r| r.title.as_deref()), &draft.title);
        let display_description =
            overlay(result.and_then(|r| r.description.as_deref()), &draft.description);

        let title_width = match metrics.measure(&display_title, draft.mode) {
            Ok(width) => Some(width),
            Err(e) => {
                tracing::debug!("Title width unavailable: {}", e);
                None
            }
        };
        let description_width = match metrics.measure(&display_description, draft.mode) {
            Ok(width) => Some(width),
            Err(e) => {
                tracing::debug!("Description width unavailable: {}", e);
                None
            }
        };

        SnippetView {
            title_tokens: estimate_tokens(&display_title),
            description_tokens: estimate_tokens(&display_description),
            display_title,
            display_description,
            url: draft.url.clone(),
            mode: draft.mode,
            title_width,
            description_width,
        }
    }
}

fn overlay(rewritten: Option<&str>, original: &str) -> String {
    match rewritten {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => original.to_string(),
    }
}
