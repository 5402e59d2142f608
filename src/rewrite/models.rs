//! Wire types for the rewrite backend and the chat-completions upstream.

use serde::{Deserialize, Serialize};

/// Body POSTed to the rewrite backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewriteRequest {
    pub title: String,
    pub description: String,
}

impl RewriteRequest {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// Prompt sent upstream for this request.
    pub fn prompt(&self) -> String {
        format!(
            "Rewrite as SERP snippet. Title: \"{}\". Desc: \"{}\".",
            self.title, self.description
        )
    }
}

/// One message of a chat-completions conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: Some(content.into()),
        }
    }
}

/// Request body for an OpenAI-compatible chat-completions API.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_format() {
        let request = RewriteRequest::new("Buy Shoes Online", "Great deals on shoes.");
        assert_eq!(
            request.prompt(),
            "Rewrite as SERP snippet. Title: \"Buy Shoes Online\". Desc: \"Great deals on shoes.\"."
        );
    }

    #[test]
    fn test_chat_request_serializes() {
        let body = ChatCompletionRequest {
            model: "gpt-3.5-turbo".to_string(),
            messages: vec![ChatMessage::user("hi")],
            max_tokens: 150,
            temperature: 0.7,
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["messages"][0]["role"], "user");
        assert_eq!(value["max_tokens"], 150);
    }
}
