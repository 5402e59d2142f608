//! Lifecycle of AI rewrite attempts.
//!
//! ```text
//! Idle ──begin──▶ InFlight ──settle──▶ Succeeded | Failed ──begin──▶ InFlight ...
//! ```
//!
//! `begin` is refused while an attempt is in flight or when the free quota is
//! used up; a refusal changes nothing. `settle` charges the quota exactly once
//! for every attempt that got an HTTP response.

use std::fmt;

use uuid::Uuid;

use super::client::{BackendOutcome, RewriteCompletion, RewriteTicket};
use super::models::RewriteRequest;
use super::parse::{extract_content, parse_rewrite};
use crate::error::StudioError;
use crate::quota::{QuotaState, QuotaStore, FREE_REWRITE_LIMIT};
use crate::snippet::{RewriteResult, SnippetDraft};

/// Why an attempt failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RewriteFailure {
    /// Non-2xx status with the raw body text.
    Backend { status: u16, detail: String },
    /// No response at all.
    Unreachable(String),
}

impl fmt::Display for RewriteFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RewriteFailure::Backend { status, detail } => {
                write!(f, "backend returned {}: {}", status, detail)
            }
            RewriteFailure::Unreachable(reason) => write!(f, "backend unreachable: {}", reason),
        }
    }
}

/// State of the current (or most recent) attempt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RewriteRequestState {
    #[default]
    Idle,
    InFlight { attempt_id: Uuid },
    Succeeded(RewriteResult),
    Failed(RewriteFailure),
}

impl RewriteRequestState {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, RewriteRequestState::InFlight { .. })
    }

    /// Short label for status lines.
    pub fn label(&self) -> &'static str {
        match self {
            RewriteRequestState::Idle => "idle",
            RewriteRequestState::InFlight { .. } => "rewriting",
            RewriteRequestState::Succeeded(_) => "rewritten",
            RewriteRequestState::Failed(_) => "failed",
        }
    }
}

/// Owns the attempt state and the last successful overlay.
#[derive(Debug, Default)]
pub struct RewriteSession {
    state: RewriteRequestState,
    last_result: Option<RewriteResult>,
}

impl RewriteSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &RewriteRequestState {
        &self.state
    }

    /// Most recent successful result; survives later failures.
    pub fn last_result(&self) -> Option<&RewriteResult> {
        self.last_result.as_ref()
    }

    /// Admit a new attempt, snapshotting `draft` as its payload.
    pub fn begin(
        &mut self,
        quota: QuotaState,
        draft: &SnippetDraft,
    ) -> Result<RewriteTicket, StudioError> {
        if self.state.is_in_flight() {
            tracing::debug!("Rewrite refused: another attempt is in flight");
            return Err(StudioError::RewriteInFlight);
        }
        if quota.is_exhausted() {
            tracing::info!(
                rewrite_count = quota.rewrite_count,
                "Rewrite refused: free quota exhausted"
            );
            return Err(StudioError::QuotaExceeded {
                used: quota.rewrite_count,
                limit: FREE_REWRITE_LIMIT,
            });
        }

        let attempt_id = Uuid::new_v4();
        self.state = RewriteRequestState::InFlight { attempt_id };
        tracing::info!(%attempt_id, "Rewrite started");

        Ok(RewriteTicket {
            attempt_id,
            request: RewriteRequest::new(draft.title.clone(), draft.description.clone()),
        })
    }

    /// Apply a finished backend call.
    pub fn settle(
        &mut self,
        completion: RewriteCompletion,
        quota: &mut QuotaStore,
    ) -> Result<RewriteResult, StudioError> {
        let RewriteCompletion { ticket, outcome } = completion;
        let attempt_id = ticket.attempt_id;
        match &self.state {
            RewriteRequestState::InFlight { attempt_id: current } if *current == attempt_id => {}
            other => tracing::warn!(
                %attempt_id,
                state = other.label(),
                "Settling a rewrite that is not the in-flight attempt"
            ),
        }

        let response = match outcome {
            BackendOutcome::Responded(response) => response,
            BackendOutcome::Unreachable(err) => {
                tracing::warn!(%attempt_id, "Rewrite backend unreachable: {}", err);
                self.state = RewriteRequestState::Failed(RewriteFailure::Unreachable(err.to_string()));
                return Err(StudioError::BackendUnreachable(err));
            }
        };

        quota.increment_count();

        if !response.is_success() {
            let detail = response.text_lossy();
            tracing::warn!(%attempt_id, status = response.status, "Rewrite backend error: {}", detail);
            self.state = RewriteRequestState::Failed(RewriteFailure::Backend {
                status: response.status,
                detail: detail.clone(),
            });
            return Err(StudioError::Backend {
                status: response.status,
                detail,
            });
        }

        let content = extract_content(&response.body);
        if content.is_none() {
            tracing::warn!(%attempt_id, "Rewrite reply had no content, keeping original text");
        }
        let result = parse_rewrite(content.as_deref(), &ticket.request);
        tracing::info!(%attempt_id, "Rewrite succeeded");

        self.state = RewriteRequestState::Succeeded(result.clone());
        self.last_result = Some(result.clone());
        Ok(result)
    }
}
