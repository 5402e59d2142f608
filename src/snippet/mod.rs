//! Snippet editing state and its derived view.

mod draft;
mod view;

pub use draft::{
    RewriteResult, SnippetDraft, SnippetField, DEFAULT_DESCRIPTION, DEFAULT_TITLE, DEFAULT_URL,
};
pub use view::{SnippetView, SnippetViewModel};
