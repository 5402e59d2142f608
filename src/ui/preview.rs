//! Simulated search result, pixel meters and export feedback.

use std::time::Instant;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Gauge, Paragraph, Wrap},
    Frame,
};

use super::theme::{meter_color, CardPalette, COLOR_BORDER, COLOR_DIM, COLOR_GLOW, COLOR_OK};
use crate::app::App;
use crate::export::Effect;
use crate::metrics::{DisplayMode, MAX_DESCRIPTION_PX, MAX_TITLE_PX};
use crate::snippet::SnippetView;

/// Card width in columns for the mobile layout.
const MOBILE_CARD_COLS: u16 = 48;

const CONFETTI: &str = "\u{2726} \u{2727} \u{2605} \u{2726} \u{2727} \u{2605}";
const EMOJI_BURST: &str = "\u{1F389} \u{1F680} \u{2728}";

pub const METERS_HEIGHT: u16 = 6;

pub fn render_card(frame: &mut Frame, area: Rect, app: &App, view: &SnippetView, now: Instant) {
    let area = match view.mode {
        DisplayMode::Desktop => area,
        DisplayMode::Mobile => centered_width(area, MOBILE_CARD_COLS),
    };
    let palette = CardPalette::for_theme(app.studio.theme());
    let feedback = app.studio.feedback();

    let (border_color, border_type) = if feedback.is_active(Effect::Glow, now) {
        (COLOR_GLOW, BorderType::Thick)
    } else {
        (COLOR_BORDER, BorderType::Rounded)
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(palette.background))
        .title(format!(" Preview ({}) ", view.mode));
    if feedback.is_active(Effect::Confetti, now) {
        block = block.title_top(Line::from(CONFETTI).alignment(Alignment::Right));
    }
    if feedback.is_active(Effect::EmojiBurst, now) {
        block = block.title_bottom(Line::from(EMOJI_BURST).alignment(Alignment::Center));
    }

    let lines = vec![
        Line::from(Span::styled(
            view.display_title.clone(),
            Style::default()
                .fg(palette.title)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(view.url.clone(), Style::default().fg(palette.url))),
        Line::from(""),
        Line::from(Span::styled(
            view.display_description.clone(),
            Style::default().fg(palette.description),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );

    if feedback.is_active(Effect::Toast, now) {
        render_toast(frame, area);
    }
}

fn render_toast(frame: &mut Frame, area: Rect) {
    let text = " \u{2713} Export Successful! ";
    let width = (text.chars().count() as u16 + 2).min(area.width);
    let toast = Rect {
        x: area.right().saturating_sub(width + 1),
        y: area.bottom().saturating_sub(4),
        width,
        height: 3,
    }
    .intersection(area);
    frame.render_widget(Clear, toast);
    frame.render_widget(
        Paragraph::new(text)
            .style(Style::default().fg(COLOR_OK))
            .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded)),
        toast,
    );
}

/// One pixel meter, read straight off the view.
struct Meter {
    label: &'static str,
    width: Option<f32>,
    ratio: Option<f32>,
    over_budget: bool,
    budget: f32,
    tokens: usize,
}

pub fn render_meters(frame: &mut Frame, area: Rect, view: &SnippetView) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3)])
        .split(area);

    let title = Meter {
        label: "Title",
        width: view.title_width,
        ratio: view.title_ratio(),
        over_budget: view.title_over_budget(),
        budget: MAX_TITLE_PX,
        tokens: view.title_tokens,
    };
    let description = Meter {
        label: "Description",
        width: view.description_width,
        ratio: view.description_ratio(),
        over_budget: view.description_over_budget(),
        budget: MAX_DESCRIPTION_PX,
        tokens: view.description_tokens,
    };
    render_meter(frame, rows[0], &title);
    render_meter(frame, rows[1], &description);
}

fn render_meter(frame: &mut Frame, area: Rect, meter: &Meter) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(format!(" {} \u{2022} ~{} tokens ", meter.label, meter.tokens));

    match (meter.width, meter.ratio) {
        (Some(width), Some(ratio)) => {
            let warning = if meter.over_budget { "  will be truncated" } else { "" };
            let gauge = Gauge::default()
                .block(block)
                .gauge_style(Style::default().fg(meter_color(ratio, meter.over_budget)))
                .ratio(f64::from(ratio.clamp(0.0, 1.0)))
                .label(format!("{:.0}px / {:.0}px{}", width, meter.budget, warning));
            frame.render_widget(gauge, area);
        }
        _ => {
            let text = Paragraph::new("width unavailable")
                .style(Style::default().fg(COLOR_DIM))
                .block(block);
            frame.render_widget(text, area);
        }
    }
}

fn centered_width(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}
