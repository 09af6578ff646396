//! Caller-facing request surface: roles, message constructors and per-call
//! options. The wire structs themselves live in [`crate::proto`].

use std::fmt;

use crate::proto::{ChatRequest, Message};

/// Model used when the caller does not specify one.
pub const DEFAULT_MODEL: &str = "GigaChat";

/// Conversation role. Serialized as the lowercase wire string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role: role.as_str().to_string(),
            content: content.into(),
            unprocessed_content: None,
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

/// Per-call options. Everything is optional; unset sampling parameters are
/// left out of the request and the service applies its own defaults.
#[derive(Debug, Clone, Default)]
pub struct ChatOptions {
    pub model: Option<String>,
    pub temperature: Option<f32>,
    pub top_p: Option<f32>,
    pub max_tokens: Option<i64>,
    pub repetition_penalty: Option<f32>,
    pub stream: Option<bool>,
}

impl ChatOptions {
    /// Materialize the wire request. `stream` is decided by the calling
    /// operation: the unary path passes the caller's flag (default false),
    /// the streaming path always passes true.
    pub(crate) fn to_request(&self, messages: Vec<Message>, stream: bool) -> ChatRequest {
        ChatRequest {
            model: self
                .model
                .clone()
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            messages,
            temperature: self.temperature,
            top_p: self.top_p,
            max_tokens: self.max_tokens,
            repetition_penalty: self.repetition_penalty,
            stream: Some(stream),
        }
    }

    /// The stream flag the unary path should send.
    pub(crate) fn unary_stream_flag(&self) -> bool {
        self.stream.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_options_default_the_model() {
        let opts = ChatOptions::default();
        let req = opts.to_request(vec![Message::user("hi")], opts.unary_stream_flag());
        assert_eq!(req.model, "GigaChat");
        assert_eq!(req.stream, Some(false));
        assert_eq!(req.messages.len(), 1);
        assert_eq!(req.messages[0].role, "user");
        assert_eq!(req.messages[0].content, "hi");
        assert!(req.temperature.is_none());
        assert!(req.max_tokens.is_none());
    }

    #[test]
    fn streaming_path_forces_stream_true() {
        let opts = ChatOptions {
            stream: Some(false),
            ..Default::default()
        };
        let req = opts.to_request(vec![Message::user("hi")], true);
        assert_eq!(req.stream, Some(true));
    }

    #[test]
    fn sampling_parameters_pass_through() {
        let opts = ChatOptions {
            model: Some("GigaChat-Pro".to_string()),
            temperature: Some(0.5),
            top_p: Some(0.9),
            max_tokens: Some(10),
            repetition_penalty: Some(1.1),
            stream: None,
        };
        let req = opts.to_request(vec![Message::user("hi")], opts.unary_stream_flag());
        assert_eq!(req.model, "GigaChat-Pro");
        assert_eq!(req.temperature, Some(0.5));
        assert_eq!(req.top_p, Some(0.9));
        assert_eq!(req.max_tokens, Some(10));
        assert_eq!(req.repetition_penalty, Some(1.1));
        assert_eq!(req.stream, Some(false));
    }

    #[test]
    fn role_strings_match_wire_format() {
        assert_eq!(Role::System.to_string(), "system");
        assert_eq!(Message::assistant("ok").role, "assistant");
    }
}
