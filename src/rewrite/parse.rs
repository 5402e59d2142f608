//! Turning a backend reply into a [`RewriteResult`].

use serde_json::Value;

use super::models::RewriteRequest;
use crate::snippet::RewriteResult;

/// Pull `choices[0].message.content` out of a 2xx body.
///
/// Nothing else in the body is looked at. A body that is not JSON, or has no
/// string at that path, yields `None`.
pub fn extract_content(body: &[u8]) -> Option<String> {
    let value: Value = match serde_json::from_slice(body) {
        Ok(value) => value,
        Err(e) => {
            tracing::debug!("Rewrite body is not JSON: {}", e);
            return None;
        }
    };
    let content = value
        .get("choices")?
        .get(0)?
        .get("message")?
        .get("content")?
        .as_str()?;
    Some(content.to_string())
}

/// Split generated text into title and description.
///
/// The first non-empty trimmed line is the title, the second the description;
/// further lines are dropped. A missing line falls back to the original text
/// of that field alone.
pub fn parse_rewrite(content: Option<&str>, original: &RewriteRequest) -> RewriteResult {
    let mut lines = content
        .unwrap_or_default()
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty());

    let title = lines.next().unwrap_or(original.title.as_str()).to_string();
    let description = lines.next().unwrap_or(original.description.as_str()).to_string();

    RewriteResult {
        title: Some(title),
        description: Some(description),
    }
}
