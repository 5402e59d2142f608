//! Results of spawned tasks, delivered back to the event loop.

use std::time::Instant;

use super::{App, StatusKind};
use crate::export::ExportOutcome;
use crate::rewrite::RewriteCompletion;

#[derive(Debug, Clone)]
pub enum AppMessage {
    /// A rewrite request came back (or failed to)
    RewriteFinished(RewriteCompletion),
    /// An export attempt finished
    ExportFinished(ExportOutcome),
}

impl App {
    pub fn handle_message(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::RewriteFinished(completion) => {
                match self.studio.complete_rewrite(completion) {
                    Ok(_) => self.set_status("AI rewrite applied", StatusKind::Success),
                    Err(e) => {
                        tracing::warn!(
                            code = e.error_code(),
                            hint = e.recovery_hint(),
                            "Rewrite failed: {}",
                            e
                        );
                        self.set_status(e.user_message(), StatusKind::Error);
                    }
                }
            }
            AppMessage::ExportFinished(outcome) => {
                self.export_in_flight = false;
                match self.studio.record_export(outcome, Instant::now()) {
                    Ok(path) => self.set_status(
                        format!("Export Successful! Saved to {}", path.display()),
                        StatusKind::Success,
                    ),
                    Err(e) => self.set_status(e.user_message(), StatusKind::Error),
                }
            }
        }
        self.mark_dirty();
    }
}
