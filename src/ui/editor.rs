//! The three input fields.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::theme::{COLOR_BORDER, COLOR_DIM, COLOR_FOCUS};
use crate::app::{App, Focus};

pub const EDITOR_HEIGHT: u16 = 9;

pub fn render_editor(frame: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3); 3])
        .split(area);

    let draft = app.studio.draft();
    let fields = [
        (Focus::Title, draft.title.as_str()),
        (Focus::Description, draft.description.as_str()),
        (Focus::Url, draft.url.as_str()),
    ];
    for ((focus, value), row) in fields.into_iter().zip(rows.iter()) {
        render_field(frame, *row, focus.label(), value, app.focus == focus);
    }
}

fn render_field(frame: &mut Frame, area: Rect, label: &str, value: &str, focused: bool) {
    let border_color = if focused { COLOR_FOCUS } else { COLOR_BORDER };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .title(Span::styled(
            format!(" {} ", label),
            Style::default().fg(border_color),
        ));

    let text_style = if focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(COLOR_DIM)
    };

    // Keep the tail visible while typing past the edge.
    let inner_width = area.width.saturating_sub(3) as usize;
    let chars: Vec<char> = value.chars().collect();
    let visible: String = chars[chars.len().saturating_sub(inner_width)..].iter().collect();

    let mut spans = vec![Span::styled(visible, text_style)];
    if focused {
        spans.push(Span::styled("\u{2588}", Style::default().fg(COLOR_FOCUS)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
