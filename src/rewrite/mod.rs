//! AI rewrite: wire types, backend client, reply parsing and the attempt
//! state machine.

mod client;
mod models;
mod parse;
mod session;

pub use client::{BackendOutcome, RewriteClient, RewriteCompletion, RewriteJob, RewriteTicket};
pub use models::{ChatCompletionRequest, ChatMessage, RewriteRequest};
pub use parse::{extract_content, parse_rewrite};
pub use session::{RewriteFailure, RewriteRequestState, RewriteSession};
