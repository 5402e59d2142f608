//! Interactive front-end state.
//!
//! [`App`] wraps a [`Studio`] with the bits only the terminal UI needs:
//! which field has focus, the status line, and the channel spawned rewrite
//! and export tasks report back on.

mod actions;
mod handlers;
mod messages;

pub use actions::Action;
pub use handlers::map_key;
pub use messages::AppMessage;

use std::time::{Duration, Instant};

use tokio::sync::mpsc;

use crate::snippet::SnippetField;
use crate::studio::Studio;

/// How long a status message stays on screen.
pub const STATUS_TTL: Duration = Duration::from_secs(4);

/// Which input field receives typed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Title,
    Description,
    Url,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Title => Focus::Description,
            Focus::Description => Focus::Url,
            Focus::Url => Focus::Title,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Title => Focus::Url,
            Focus::Description => Focus::Title,
            Focus::Url => Focus::Description,
        }
    }

    pub fn field(self) -> SnippetField {
        match self {
            Focus::Title => SnippetField::Title,
            Focus::Description => SnippetField::Description,
            Focus::Url => SnippetField::Url,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Focus::Title => "Title",
            Focus::Description => "Description",
            Focus::Url => "URL",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
    pub shown_at: Instant,
}

/// Terminal front-end state.
pub struct App {
    pub studio: Studio,
    pub focus: Focus,
    pub status: Option<StatusMessage>,
    pub should_quit: bool,
    /// Set whenever something visible changed
    pub needs_redraw: bool,
    pub export_in_flight: bool,
    pub tick_count: u64,
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Taken by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
}

impl App {
    pub fn new(studio: Studio) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            studio,
            focus: Focus::default(),
            status: None,
            should_quit: false,
            needs_redraw: true,
            export_in_flight: false,
            tick_count: 0,
            message_tx,
            message_rx: Some(message_rx),
        }
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_status(&mut self, text: impl Into<String>, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
            shown_at: Instant::now(),
        });
        self.mark_dirty();
    }

    /// Text of the focused field in the draft.
    pub fn focused_text(&self) -> &str {
        let draft = self.studio.draft();
        match self.focus {
            Focus::Title => &draft.title,
            Focus::Description => &draft.description,
            Focus::Url => &draft.url,
        }
    }

    /// True when the membership offer should be shown.
    pub fn membership_offered(&self) -> bool {
        self.studio.quota().is_exhausted()
    }

    /// Periodic housekeeping: expire feedback effects and stale status.
    pub fn tick(&mut self, now: Instant) {
        self.tick_count = self.tick_count.wrapping_add(1);

        if self.studio.tick(now) {
            self.mark_dirty();
        }
        if self.studio.feedback().any_active(now) {
            self.mark_dirty();
        }
        let expired = self
            .status
            .as_ref()
            .is_some_and(|s| now.saturating_duration_since(s.shown_at) >= STATUS_TTL);
        if expired {
            self.status = None;
            self.mark_dirty();
        }
    }
}
