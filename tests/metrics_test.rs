//! Integration tests for pixel widths and token estimates with the bundled
//! Arial metrics.

use std::sync::Arc;

use serp_studio::adapters::ArialMetrics;
use serp_studio::metrics::{estimate_tokens, DisplayMode, TextMetrics, MAX_TITLE_PX};
use serp_studio::snippet::{SnippetDraft, SnippetViewModel};

fn arial() -> TextMetrics {
    TextMetrics::new(Arc::new(ArialMetrics::new()))
}

#[test]
fn test_short_title_fits_budget() {
    let metrics = arial();
    let width = metrics
        .measure("Buy Shoes Online", DisplayMode::Desktop)
        .unwrap();

    assert!(width > 0.0);
    assert!(width < MAX_TITLE_PX);
    assert_eq!(estimate_tokens("Buy Shoes Online"), 1);
}

#[test]
fn test_empty_text_measures_zero() {
    let metrics = arial();
    assert_eq!(metrics.measure("", DisplayMode::Desktop).unwrap(), 0.0);
    assert_eq!(metrics.measure("", DisplayMode::Mobile).unwrap(), 0.0);
    assert_eq!(estimate_tokens(""), 0);
}

#[test]
fn test_mobile_is_narrower_than_desktop() {
    let metrics = arial();
    let text = "Running shoes for every distance";
    let desktop = metrics.measure(text, DisplayMode::Desktop).unwrap();
    let mobile = metrics.measure(text, DisplayMode::Mobile).unwrap();
    assert!(mobile < desktop);
}

#[test]
fn test_width_grows_with_text() {
    let metrics = arial();
    let mut previous = 0.0;
    let mut text = String::new();
    for word in ["Buy", " running", " shoes", " online", " today"] {
        text.push_str(word);
        let width = metrics.measure(&text, DisplayMode::Desktop).unwrap();
        assert!(width > previous);
        previous = width;
    }
}

#[test]
fn test_token_estimate_is_monotonic() {
    let mut text = String::new();
    let mut previous = 0;
    for _ in 0..40 {
        text.push_str("word ");
        let tokens = estimate_tokens(&text);
        assert!(tokens >= previous);
        previous = tokens;
    }
    assert_eq!(previous, 10);
}

#[test]
fn test_long_title_flagged_over_budget() {
    let title = "The Complete Guide to Choosing Running Shoes for Marathon Training and Everyday Comfort";
    let draft = SnippetDraft::new(title, "Short description");

    let view = SnippetViewModel::derive(&draft, None, &arial());

    assert!(view.title_over_budget());
    assert!(!view.description_over_budget());
}
