//! Rewrite proxy (`serp-studio serve`).
//!
//! Accepts `{title, description}` on `POST /api/rewrite`, turns it into a
//! chat-completions prompt and relays the upstream reply, keeping the API key
//! out of the client.

mod server;

pub use server::*;
