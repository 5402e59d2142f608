//! SERP Studio - pixel-accurate search snippet previews in the terminal
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod metrics;
pub mod proxy;
pub mod quota;
pub mod rewrite;
pub mod snippet;
pub mod studio;
pub mod terminal;
pub mod traits;
pub mod ui;
