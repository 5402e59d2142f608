//! Request/response boundary to the rewrite backend.

use std::fmt;
use std::sync::Arc;

use uuid::Uuid;

use super::models::RewriteRequest;
use crate::traits::{json_headers, HttpClient, HttpError, Response};

/// What came back from one backend call.
#[derive(Debug, Clone)]
pub enum BackendOutcome {
    /// The backend answered with some HTTP status.
    Responded(Response),
    /// No HTTP response was obtained.
    Unreachable(HttpError),
}

/// Sends [`RewriteRequest`]s to the configured endpoint.
#[derive(Clone)]
pub struct RewriteClient {
    http: Arc<dyn HttpClient>,
    endpoint: String,
}

impl RewriteClient {
    pub fn new(http: Arc<dyn HttpClient>, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST `request` as JSON. Waits as long as the HTTP client does.
    pub async fn send(&self, request: &RewriteRequest) -> BackendOutcome {
        let body = match serde_json::to_string(request) {
            Ok(body) => body,
            Err(e) => return BackendOutcome::Unreachable(HttpError::Other(e.to_string())),
        };

        match self.http.post(&self.endpoint, &body, &json_headers()).await {
            Ok(response) => BackendOutcome::Responded(response),
            Err(HttpError::ServerError { status, message }) => {
                BackendOutcome::Responded(Response::new(status, message))
            }
            Err(e) => BackendOutcome::Unreachable(e),
        }
    }
}

impl fmt::Debug for RewriteClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RewriteClient")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

/// An admitted rewrite attempt: its id and the payload snapshot taken when it
/// was admitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteTicket {
    pub attempt_id: Uuid,
    pub request: RewriteRequest,
}

/// Everything needed to perform an admitted attempt off the event loop.
#[derive(Debug, Clone)]
pub struct RewriteJob {
    pub ticket: RewriteTicket,
    client: RewriteClient,
}

impl RewriteJob {
    pub fn new(ticket: RewriteTicket, client: RewriteClient) -> Self {
        Self { ticket, client }
    }

    /// Call the backend once. Never retries.
    pub async fn run(self) -> RewriteCompletion {
        tracing::debug!(
            attempt_id = %self.ticket.attempt_id,
            endpoint = self.client.endpoint(),
            "Sending rewrite request"
        );
        let outcome = self.client.send(&self.ticket.request).await;
        RewriteCompletion {
            ticket: self.ticket,
            outcome,
        }
    }

    /// Like [`run`](Self::run), but on its own task. If that task panics or
    /// is cancelled the attempt still completes, as unreachable, so the
    /// session never stays in flight.
    pub async fn run_detached(self) -> RewriteCompletion {
        let ticket = self.ticket.clone();
        match tokio::spawn(self.run()).await {
            Ok(completion) => completion,
            Err(e) => {
                tracing::error!(attempt_id = %ticket.attempt_id, "Rewrite task failed: {}", e);
                RewriteCompletion {
                    ticket,
                    outcome: BackendOutcome::Unreachable(HttpError::Other(format!(
                        "rewrite task failed: {}",
                        e
                    ))),
                }
            }
        }
    }
}

/// The finished backend call for a ticket, ready to be settled.
#[derive(Debug, Clone)]
pub struct RewriteCompletion {
    pub ticket: RewriteTicket,
    pub outcome: BackendOutcome,
}
