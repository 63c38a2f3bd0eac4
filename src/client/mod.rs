//! Backend communication client
//!
//! The panel never talks to the network directly. It holds an
//! `Arc<dyn BackendClient>` handed to it at construction and forwards
//! the two operations it knows about:
//!
//! - `post_text`: store a piece of text, backend assigns the identifier
//! - `get_text`: fetch previously stored text by identifier
//!
//! Both return an [`OperationResult`] when the call completes (even if
//! the backend refused the request) and a [`ClientError`] when the call
//! itself failed.

mod demo;
mod http;

pub use demo::DemoBackend;
pub use http::HttpBackendClient;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A stored piece of text as returned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRecord {
    pub id: String,
    /// Submit responses may only echo the id
    #[serde(default)]
    pub text: String,
}

/// Outcome of a completed backend call
///
/// `success = false` is a logical failure: the call went through but the
/// backend refused it. `message` is meant to be shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationResult {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<TextRecord>,
}

impl OperationResult {
    pub fn ok(message: impl Into<String>, record: TextRecord) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(record),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }

    /// Identifier carried by a successful result, if it is usable
    pub fn id(&self) -> Option<&str> {
        self.data
            .as_ref()
            .map(|record| record.id.as_str())
            .filter(|id| !id.is_empty())
    }
}

/// The call itself failed; `Display` is what the user gets to see
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("{}", with_sources(.0))]
    Transport(#[from] reqwest::Error),

    #[error("backend returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("could not decode backend response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// `err` followed by each cause, joined with ": "
///
/// reqwest's own message stops at "error sending request"; the reason
/// (refused, DNS, timeout) lives further down the chain. Causes already
/// spelled out by the message above them are skipped.
fn with_sources(err: &dyn std::error::Error) -> String {
    let mut description = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let message = cause.to_string();
        if !description.contains(&message) {
            description.push_str(": ");
            description.push_str(&message);
        }
        source = cause.source();
    }
    description
}

/// Contract the panel consumes
#[async_trait]
pub trait BackendClient: Send + Sync {
    /// Submit text for storage
    async fn post_text(&self, text: &str) -> Result<OperationResult, ClientError>;

    /// Fetch stored text by identifier
    async fn get_text(&self, id: &str) -> Result<OperationResult, ClientError>;

    /// Short human-readable description for the status bar
    fn describe(&self) -> String;
}

/// Shared handle to whichever backend the app was started with
pub type SharedClient = Arc<dyn BackendClient>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_response_without_text_decodes() {
        let json = r#"{"success":true,"message":"Text added","data":{"id":"abc123"}}"#;
        let result: OperationResult = serde_json::from_str(json).unwrap();

        assert!(result.success);
        assert_eq!(result.id(), Some("abc123"));
        assert_eq!(result.data.unwrap().text, "");
    }

    #[test]
    fn failure_without_data_decodes() {
        let json = r#"{"success":false,"message":"quota exceeded"}"#;
        let result: OperationResult = serde_json::from_str(json).unwrap();

        assert!(!result.success);
        assert_eq!(result.message, "quota exceeded");
        assert!(result.id().is_none());
    }

    #[test]
    fn empty_id_is_not_usable() {
        let result = OperationResult::ok(
            "done",
            TextRecord {
                id: String::new(),
                text: "hello".into(),
            },
        );
        assert!(result.id().is_none());
    }

    #[derive(Debug)]
    struct Wrapped(&'static str, Option<Box<Wrapped>>);

    impl std::fmt::Display for Wrapped {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.0)
        }
    }

    impl std::error::Error for Wrapped {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            self.1.as_deref().map(|e| e as &(dyn std::error::Error + 'static))
        }
    }

    #[test]
    fn description_includes_cause_chain() {
        let refused = Wrapped("Connection refused (os error 111)", None);
        let connect = Wrapped("tcp connect error", Some(Box::new(refused)));
        let top = Wrapped("error sending request", Some(Box::new(connect)));

        assert_eq!(
            with_sources(&top),
            "error sending request: tcp connect error: Connection refused (os error 111)"
        );
    }

    #[test]
    fn causes_already_in_the_message_are_not_repeated() {
        let inner = Wrapped("timed out", None);
        let top = Wrapped("request failed: timed out", Some(Box::new(inner)));

        assert_eq!(with_sources(&top), "request failed: timed out");
    }

    #[test]
    fn status_error_displays_code_and_body() {
        let err = ClientError::Status {
            status: 503,
            body: "maintenance".into(),
        };
        assert_eq!(err.to_string(), "backend returned 503: maintenance");
    }
}
