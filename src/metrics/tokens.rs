//! Approximate language-model token counts.

/// Whitespace-delimited words per estimated token.
const WORDS_PER_TOKEN: usize = 4;

/// Estimate the token cost of `text`: words divided by four, rounded up.
///
/// Empty or whitespace-only text is 0 tokens.
pub fn estimate_tokens(text: &str) -> usize {
    text.split_whitespace().count().div_ceil(WORDS_PER_TOKEN)
}
