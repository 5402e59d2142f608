//! Terminal rendering of the studio.
//!
//! Layout, top to bottom: header with mode, theme and quota; the three input
//! fields; the preview card; pixel meters; status line and key hints.

mod editor;
mod preview;
mod theme;

pub use theme::{meter_color, CardPalette};

use std::time::Instant;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, StatusKind};
use crate::rewrite::RewriteRequestState;
use crate::snippet::SnippetView;
use editor::{render_editor, EDITOR_HEIGHT};
use preview::{render_card, render_meters, METERS_HEIGHT};
use theme::{COLOR_DIM, COLOR_FOCUS, COLOR_OK, COLOR_OVER, COLOR_WARN};

/// Render the whole screen.
pub fn render(frame: &mut Frame, app: &App) {
    let now = Instant::now();
    let view = app.studio.view();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(EDITOR_HEIGHT),
            Constraint::Min(6),
            Constraint::Length(METERS_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_header(frame, chunks[0], app, &view);
    render_editor(frame, chunks[1], app);
    render_card(frame, chunks[2], app, &view, now);
    render_meters(frame, chunks[3], &view);
    render_status(frame, chunks[4], app);
    render_hints(frame, chunks[5], app);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App, view: &SnippetView) {
    let quota = app.studio.quota();
    let quota_text = if quota.is_member {
        format!("Member \u{2022} {} rewrites", quota.rewrite_count)
    } else {
        format!("AI rewrites {}/{}", quota.rewrite_count, quota.limit())
    };
    let quota_color = if quota.is_exhausted() { COLOR_OVER } else { COLOR_DIM };

    let session = match app.studio.session_state() {
        RewriteRequestState::InFlight { .. } => {
            const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];
            format!(" {} rewriting", SPINNER[(app.tick_count / 8 % 4) as usize])
        }
        other => format!(" {}", other.label()),
    };

    let mut spans = vec![
        Span::styled(
            "SERP Studio",
            Style::default().fg(COLOR_FOCUS).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {} \u{2022} {:?} \u{2022} ", app.studio.draft().mode, app.studio.theme()),
            Style::default().fg(COLOR_DIM),
        ),
        Span::styled(quota_text, Style::default().fg(quota_color)),
        Span::styled(session, Style::default().fg(COLOR_DIM)),
    ];
    if view.measurement_degraded() {
        spans.push(Span::styled(
            " \u{2022} widths unavailable",
            Style::default().fg(COLOR_WARN),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    let Some(status) = &app.status else {
        return;
    };
    let color = match status.kind {
        StatusKind::Info => COLOR_WARN,
        StatusKind::Success => COLOR_OK,
        StatusKind::Error => COLOR_OVER,
    };
    frame.render_widget(
        Paragraph::new(Span::styled(status.text.clone(), Style::default().fg(color))),
        area,
    );
}

fn render_hints(frame: &mut Frame, area: Rect, app: &App) {
    let mut hints = String::from(
        "Tab field  ^R rewrite  ^E export  ^T/^D copy  F2 mode  F3 theme  Esc quit",
    );
    if app.membership_offered() {
        hints.push_str("  ^G become a member");
    }
    frame.render_widget(
        Paragraph::new(Span::styled(hints, Style::default().fg(COLOR_DIM))),
        area,
    );
}
