use serde::{Deserialize, Serialize};

/// A single prior turn in a chat conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Speaker role such as `user`, `assistant` or `system`.
    pub role: String,
    /// Text of the turn.
    pub content: String,
}

impl Message {
    /// Builds a `user` turn.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".into(),
            content: content.into(),
        }
    }

    /// Builds a `system` turn.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".into(),
            content: content.into(),
        }
    }

    /// Builds an `assistant` turn.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".into(),
            content: content.into(),
        }
    }
}

/// Raw output portion of a model response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelOutput {
    /// Text content of the completion.
    pub content: String,
    /// Unparsed backend payload, when the provider keeps one around.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_response: Option<serde_json::Value>,
}

/// Structured result returned by every chat entry point.
///
/// ```
/// use graphling::llm::ModelResponse;
/// let resp = ModelResponse::from_content("hello");
/// assert_eq!(resp.content(), "hello");
/// assert!(resp.history.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelResponse {
    /// The completion itself.
    pub output: ModelOutput,
    /// Conversation history as the provider saw it, including this turn
    /// when the backend echoes it back.
    #[serde(default)]
    pub history: Vec<Message>,
    /// Whether the response was served from a cache, if the provider knows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_hit: Option<bool>,
}

impl ModelResponse {
    /// Wraps plain text as a response with no backend payload.
    pub fn from_content(content: impl Into<String>) -> Self {
        Self {
            output: ModelOutput {
                content: content.into(),
                full_response: None,
            },
            history: Vec::new(),
            cache_hit: None,
        }
    }

    /// Text content of the completion.
    pub fn content(&self) -> &str {
        &self.output.content
    }
}
