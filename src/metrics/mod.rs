//! Text measurement: pixel widths and token estimates.

pub mod text;
pub mod tokens;

pub use text::{DisplayMode, TextMetrics, MAX_DESCRIPTION_PX, MAX_TITLE_PX};
pub use tokens::estimate_tokens;
