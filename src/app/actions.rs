//! User actions and their effect on the app.

use super::{App, AppMessage, StatusKind};
use crate::snippet::SnippetField;

/// Something the user asked for, independent of the key that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    FocusNext,
    FocusPrev,
    Insert(char),
    Backspace,
    ClearField,
    ToggleMode,
    ToggleTheme,
    Rewrite,
    Export,
    GrantMembership,
    Copy(SnippetField),
    Quit,
}

impl App {
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::FocusNext => self.focus = self.focus.next(),
            Action::FocusPrev => self.focus = self.focus.prev(),
            Action::Insert(c) => {
                let mut text = self.focused_text().to_string();
                text.push(c);
                self.replace_focused(text);
            }
            Action::Backspace => {
                let mut text = self.focused_text().to_string();
                text.pop();
                self.replace_focused(text);
            }
            Action::ClearField => self.replace_focused(String::new()),
            Action::ToggleMode => {
                let mode = self.studio.draft().mode.toggled();
                self.studio.set_mode(mode);
            }
            Action::ToggleTheme => {
                self.studio.toggle_theme();
            }
            Action::Rewrite => self.request_rewrite(),
            Action::Export => self.request_export(),
            Action::GrantMembership => self.grant_membership(),
            Action::Copy(field) => self.copy(field),
            Action::Quit => self.quit(),
        }
        self.mark_dirty();
    }

    /// Insert pasted text into the focused field. Line breaks become spaces.
    pub fn handle_paste(&mut self, pasted: &str) {
        let mut text = self.focused_text().to_string();
        text.extend(pasted.chars().map(|c| if c == '\n' || c == '\r' { ' ' } else { c }));
        self.replace_focused(text);
        self.mark_dirty();
    }

    fn replace_focused(&mut self, text: String) {
        match self.focus.field() {
            SnippetField::Title => self.studio.set_title(text),
            SnippetField::Description => self.studio.set_description(text),
            SnippetField::Url => self.studio.set_url(text),
        }
    }

    /// Start a rewrite in a spawned task.
    pub fn request_rewrite(&mut self) {
        match self.studio.begin_rewrite() {
            Ok(job) => {
                self.set_status("Rewriting with AI...", StatusKind::Info);
                let tx = self.message_tx.clone();
                tokio::spawn(async move {
                    let completion = job.run_detached().await;
                    let _ = tx.send(AppMessage::RewriteFinished(completion));
                });
            }
            Err(e) => self.set_status(e.user_message(), StatusKind::Error),
        }
    }

    /// Start an export in a spawned task. One at a time.
    pub fn request_export(&mut self) {
        if self.export_in_flight {
            return;
        }
        self.export_in_flight = true;
        let job = self.studio.export_job();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let outcome = job.run().await;
            let _ = tx.send(AppMessage::ExportFinished(outcome));
        });
    }

    /// Only available once the free rewrites are used up.
    fn grant_membership(&mut self) {
        if !self.membership_offered() {
            return;
        }
        self.studio.grant_membership();
        self.set_status("Welcome, member! Rewrites are unlimited.", StatusKind::Success);
    }

    fn copy(&mut self, field: SnippetField) {
        match self.studio.copy_field(field) {
            Ok(()) => self.set_status("Copied!", StatusKind::Success),
            Err(e) => self.set_status(e.user_message(), StatusKind::Error),
        }
    }
}
