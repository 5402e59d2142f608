//! `serp-studio check`: measure a snippet without the interactive UI.

use std::sync::Arc;

use super::args::CheckArgs;
use crate::adapters::ArialMetrics;
use crate::metrics::{TextMetrics, MAX_DESCRIPTION_PX, MAX_TITLE_PX};
use crate::snippet::{SnippetDraft, SnippetView, SnippetViewModel};

/// Measure `args` with the built-in Arial metrics.
pub fn check_snippet(args: &CheckArgs) -> SnippetView {
    let metrics = TextMetrics::new(Arc::new(ArialMetrics::new()));
    let draft = SnippetDraft::new(args.title.clone(), args.description.clone()).with_mode(args.mode);
    SnippetViewModel::derive(&draft, None, &metrics)
}

/// Human-readable report for a measured snippet.
pub fn render_report(view: &SnippetView) -> String {
    let rows = [
        ("Title", view.title_width, MAX_TITLE_PX, view.title_over_budget(), view.title_tokens),
        (
            "Description",
            view.description_width,
            MAX_DESCRIPTION_PX,
            view.description_over_budget(),
            view.description_tokens,
        ),
    ];

    let mut out = format!("Mode: {}\n", view.mode);
    for (label, width, budget, over, tokens) in rows {
        let width = match width {
            Some(w) => format!("{:.1}px", w),
            None => "n/a".to_string(),
        };
        let status = if over { "TRUNCATED" } else { "ok" };
        out.push_str(&format!(
            "{:<12} {:>9} / {:.0}px  {:<9}  ~{} tokens\n",
            label, width, budget, status, tokens
        ));
    }
    out
}

/// Handle the `check` command. Exits non-zero when anything is over budget.
pub fn handle_check_command(args: &CheckArgs) -> color_eyre::Result<bool> {
    let view = check_snippet(args);
    print!("{}", render_report(&view));
    Ok(!view.title_over_budget() && !view.description_over_budget())
}
