//! Common test utilities for integration tests.
//!
//! # Example
//!
//! ```ignore
//! let fixture = StudioFixture::new();
//! fixture.http.set_default_response(MockResponse::completion("A\nB"));
//! let mut studio = fixture.studio();
//! ```

#![allow(dead_code)]

use std::sync::Arc;

use serp_studio::adapters::mock::{
    FixedWidthMetrics, InMemoryStore, MemoryClipboard, MockCapture, MockHttpClient,
    RecordingDownloads,
};
use serp_studio::snippet::SnippetDraft;
use serp_studio::studio::{Collaborators, Studio};
use serp_studio::traits::HttpClient;

pub const TEST_ENDPOINT: &str = "http://studio.test/api/rewrite";

/// Mock collaborators kept around so tests can inspect them after the studio
/// has taken its `Arc`s.
pub struct StudioFixture {
    pub http: MockHttpClient,
    pub store: Arc<InMemoryStore>,
    pub capture: Arc<MockCapture>,
    pub downloads: Arc<RecordingDownloads>,
    pub clipboard: Arc<MemoryClipboard>,
}

impl StudioFixture {
    pub fn new() -> Self {
        Self {
            http: MockHttpClient::new(),
            store: Arc::new(InMemoryStore::new()),
            capture: Arc::new(MockCapture::new()),
            downloads: Arc::new(RecordingDownloads::new()),
            clipboard: Arc::new(MemoryClipboard::new()),
        }
    }

    /// Start from a stored rewrite count.
    pub fn with_count(count: u32) -> Self {
        let fixture = Self::new();
        fixture.store.insert("rewriteCount", &count.to_string());
        fixture
    }

    pub fn collaborators(&self) -> Collaborators {
        self.collaborators_with_http(Arc::new(self.http.clone()))
    }

    pub fn collaborators_with_http(&self, http: Arc<dyn HttpClient>) -> Collaborators {
        Collaborators {
            http,
            store: self.store.clone(),
            measure: Arc::new(FixedWidthMetrics::new(0.5)),
            capture: self.capture.clone(),
            downloads: self.downloads.clone(),
            clipboard: self.clipboard.clone(),
        }
    }

    pub fn studio(&self) -> Studio {
        Studio::new(self.collaborators(), TEST_ENDPOINT)
            .with_draft(SnippetDraft::new("Old title", "Old description"))
    }
}
