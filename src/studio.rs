//! The studio facade the front-ends drive.
//!
//! [`Studio`] owns the draft, the rewrite session, the quota ledger and the
//! export state. Front-ends read [`Studio::view`] and friends, and forward
//! edits and actions through the `set_*` / action methods.
//!
//! Rewrites and exports are split into an admission step that returns a job
//! and a completion step that applies its result, so the interactive
//! front-end can run the job in a spawned task while the event loop keeps
//! running. [`Studio::rewrite`] and [`Studio::export`] chain the steps for
//! callers that can simply await.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use crate::adapters::{
    ArialMetrics, DirectoryDownloads, FileKeyValueStore, RasterCapture, ReqwestHttpClient,
    SystemClipboard,
};
use crate::config::StudioConfig;
use crate::error::{StudioError, StudioResult};
use crate::export::{ExportCoordinator, ExportFeedback, ExportOutcome, SnippetRegion, Theme};
use crate::metrics::{DisplayMode, TextMetrics};
use crate::quota::{QuotaState, QuotaStore};
use crate::rewrite::{RewriteClient, RewriteCompletion, RewriteJob, RewriteRequestState, RewriteSession};
use crate::snippet::{RewriteResult, SnippetDraft, SnippetField, SnippetView, SnippetViewModel};
use crate::traits::{
    DownloadSink, HttpClient, KeyValueStore, MeasurementContext, RegionCapture, TextClipboard,
};

/// The external collaborators a [`Studio`] is built from.
#[derive(Clone)]
pub struct Collaborators {
    pub http: Arc<dyn HttpClient>,
    pub store: Arc<dyn KeyValueStore>,
    pub measure: Arc<dyn MeasurementContext>,
    pub capture: Arc<dyn RegionCapture>,
    pub downloads: Arc<dyn DownloadSink>,
    pub clipboard: Arc<dyn TextClipboard>,
}

impl Collaborators {
    /// Real adapters for `config`.
    pub fn production(config: &StudioConfig) -> Self {
        let measure: Arc<dyn MeasurementContext> = Arc::new(ArialMetrics::new());
        Self {
            http: Arc::new(ReqwestHttpClient::new()),
            store: Arc::new(FileKeyValueStore::in_dir(&config.state_dir)),
            capture: Arc::new(RasterCapture::new(TextMetrics::new(measure.clone()))),
            measure,
            downloads: Arc::new(DirectoryDownloads::new(config.downloads_dir.clone())),
            clipboard: Arc::new(SystemClipboard::new()),
        }
    }
}

impl fmt::Debug for Collaborators {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collaborators").finish_non_exhaustive()
    }
}

/// An export ready to run off the event loop.
#[derive(Debug, Clone)]
pub struct ExportJob {
    pub region: SnippetRegion,
    coordinator: ExportCoordinator,
}

impl ExportJob {
    pub async fn run(self) -> ExportOutcome {
        self.coordinator.export(&self.region).await
    }
}

/// Single-user editing session over the snippet core.
pub struct Studio {
    draft: SnippetDraft,
    session: RewriteSession,
    quota: QuotaStore,
    metrics: TextMetrics,
    rewriter: RewriteClient,
    exporter: ExportCoordinator,
    clipboard: Arc<dyn TextClipboard>,
    feedback: ExportFeedback,
    theme: Theme,
    last_export: Option<ExportOutcome>,
}

impl fmt::Debug for Studio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Studio")
            .field("draft", &self.draft)
            .field("session", &self.session)
            .field("quota", &self.quota)
            .field("theme", &self.theme)
            .finish_non_exhaustive()
    }
}

impl Studio {
    /// Build a studio sending rewrites to `endpoint`. Reads the quota ledger
    /// from the collaborators' store.
    pub fn new(collaborators: Collaborators, endpoint: impl Into<String>) -> Self {
        let Collaborators {
            http,
            store,
            measure,
            capture,
            downloads,
            clipboard,
        } = collaborators;

        Self {
            draft: SnippetDraft::default(),
            session: RewriteSession::new(),
            quota: QuotaStore::open(store),
            metrics: TextMetrics::new(measure),
            rewriter: RewriteClient::new(http, endpoint),
            exporter: ExportCoordinator::new(capture, downloads),
            clipboard,
            feedback: ExportFeedback::default(),
            theme: Theme::default(),
            last_export: None,
        }
    }

    /// Production studio for `config`.
    pub fn from_config(config: &StudioConfig) -> Self {
        let mut studio = Self::new(Collaborators::production(config), config.endpoint.clone());
        studio.set_mode(config.mode);
        studio
    }

    /// Replace the whole draft.
    pub fn with_draft(mut self, draft: SnippetDraft) -> Self {
        self.draft = draft;
        self
    }

    // ---- read surface ----

    pub fn draft(&self) -> &SnippetDraft {
        &self.draft
    }

    /// Display text, widths and token counts for the current state.
    pub fn view(&self) -> SnippetView {
        SnippetViewModel::derive(&self.draft, self.session.last_result(), &self.metrics)
    }

    pub fn quota(&self) -> QuotaState {
        self.quota.state()
    }

    pub fn session_state(&self) -> &RewriteRequestState {
        self.session.state()
    }

    /// Overlay currently shown on top of the draft.
    pub fn rewrite_result(&self) -> Option<&RewriteResult> {
        self.session.last_result()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn feedback(&self) -> &ExportFeedback {
        &self.feedback
    }

    pub fn last_export(&self) -> Option<&ExportOutcome> {
        self.last_export.as_ref()
    }

    pub fn metrics(&self) -> &TextMetrics {
        &self.metrics
    }

    // ---- edits ----

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.set_title(title);
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.draft.set_description(description);
    }

    pub fn set_url(&mut self, url: impl Into<String>) {
        self.draft.set_url(url);
    }

    pub fn set_mode(&mut self, mode: DisplayMode) {
        self.draft.set_mode(mode);
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    // ---- rewrite ----

    /// Admit a rewrite of the current draft.
    ///
    /// Fails with [`StudioError::QuotaExceeded`] or
    /// [`StudioError::RewriteInFlight`] without contacting the backend.
    pub fn begin_rewrite(&mut self) -> StudioResult<RewriteJob> {
        let ticket = self.session.begin(self.quota.state(), &self.draft)?;
        Ok(RewriteJob::new(ticket, self.rewriter.clone()))
    }

    /// Apply a finished rewrite job.
    pub fn complete_rewrite(&mut self, completion: RewriteCompletion) -> StudioResult<RewriteResult> {
        self.session.settle(completion, &mut self.quota)
    }

    /// Admit, perform and settle one rewrite.
    pub async fn rewrite(&mut self) -> StudioResult<RewriteResult> {
        let job = self.begin_rewrite()?;
        let completion = job.run().await;
        self.complete_rewrite(completion)
    }

    pub fn grant_membership(&mut self) -> QuotaState {
        self.quota.grant_membership()
    }

    // ---- export ----

    /// What the preview card currently shows.
    pub fn region(&self) -> SnippetRegion {
        let view = self.view();
        SnippetRegion {
            title: view.display_title,
            url: view.url,
            description: view.display_description,
            mode: view.mode,
            theme: self.theme,
        }
    }

    pub fn export_job(&self) -> ExportJob {
        ExportJob {
            region: self.region(),
            coordinator: self.exporter.clone(),
        }
    }

    /// Record an export outcome; success starts the feedback effects at `now`.
    pub fn record_export(&mut self, outcome: ExportOutcome, now: Instant) -> StudioResult<PathBuf> {
        let result = match &outcome {
            ExportOutcome::Exported { path, .. } => {
                self.feedback.trigger(now);
                Ok(path.clone())
            }
            ExportOutcome::Failed(e) => Err(StudioError::ExportFailure(e.clone())),
        };
        self.last_export = Some(outcome);
        result
    }

    /// Capture and save the preview card once.
    pub async fn export(&mut self) -> StudioResult<PathBuf> {
        let outcome = self.export_job().run().await;
        self.record_export(outcome, Instant::now())
    }

    /// Drop expired feedback timers. Returns true if anything changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.feedback.expire(now)
    }

    // ---- clipboard ----

    /// Copy the displayed text of `field`.
    pub fn copy_field(&self, field: SnippetField) -> StudioResult<()> {
        let view = self.view();
        let text = match field {
            SnippetField::Title => view.display_title,
            SnippetField::Description => view.display_description,
            SnippetField::Url => view.url,
        };
        self.clipboard.copy_text(&text).map_err(|e| {
            tracing::warn!("Copy failed: {}", e);
            StudioError::from(e)
        })
    }
}
