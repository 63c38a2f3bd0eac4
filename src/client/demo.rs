// Demo backend: an in-memory text store
//
// Lets the panel run without a real server (TEXTOPS_DEMO=1 or --demo).
// Identifiers are generated here the same way a remote store would hand
// them out, and an optional delay makes loading toasts visible.

use super::{BackendClient, ClientError, OperationResult, TextRecord};
use async_trait::async_trait;
use std::collections::hash_map::RandomState;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hasher};
use std::time::Duration;
use tokio::sync::Mutex;

pub struct DemoBackend {
    texts: Mutex<HashMap<String, String>>,
    latency: Duration,
}

impl DemoBackend {
    pub fn new() -> Self {
        Self::with_latency(Duration::ZERO)
    }

    /// Every call sleeps for `latency` before answering
    pub fn with_latency(latency: Duration) -> Self {
        Self {
            texts: Mutex::new(HashMap::new()),
            latency,
        }
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

impl Default for DemoBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// `txt-` followed by 8 random hex chars
fn generate_id() -> String {
    let random = RandomState::new().build_hasher().finish();
    format!("txt-{:08x}", random & 0xFFFF_FFFF)
}

#[async_trait]
impl BackendClient for DemoBackend {
    async fn post_text(&self, text: &str) -> Result<OperationResult, ClientError> {
        self.simulate_latency().await;

        if text.trim().is_empty() {
            return Ok(OperationResult::failed("Text must not be blank"));
        }

        let mut texts = self.texts.lock().await;
        let mut id = generate_id();
        while texts.contains_key(&id) {
            id = generate_id();
        }
        texts.insert(id.clone(), text.to_string());

        Ok(OperationResult::ok(
            "Text added successfully",
            TextRecord {
                id,
                text: text.to_string(),
            },
        ))
    }

    async fn get_text(&self, id: &str) -> Result<OperationResult, ClientError> {
        self.simulate_latency().await;

        let texts = self.texts.lock().await;
        match texts.get(id) {
            Some(text) => Ok(OperationResult::ok(
                "Text retrieved successfully",
                TextRecord {
                    id: id.to_string(),
                    text: text.clone(),
                },
            )),
            None => Ok(OperationResult::failed(format!("No text found for ID {}", id))),
        }
    }

    fn describe(&self) -> String {
        "demo (in-memory)".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn stored_text_can_be_fetched_back() {
        let backend = DemoBackend::new();

        let posted = backend.post_text("hello").await.unwrap();
        let id = posted.id().unwrap().to_string();
        assert!(id.starts_with("txt-"));

        let fetched = backend.get_text(&id).await.unwrap();
        assert!(fetched.success);
        assert_eq!(fetched.data.unwrap().text, "hello");
    }

    #[tokio::test]
    async fn same_text_twice_gets_two_ids() {
        let backend = DemoBackend::new();

        let first = backend.post_text("same").await.unwrap();
        let second = backend.post_text("same").await.unwrap();

        assert_ne!(first.id(), second.id());
    }

    #[tokio::test]
    async fn blank_text_is_refused() {
        let backend = DemoBackend::new();

        let result = backend.post_text("   ").await.unwrap();

        assert!(!result.success);
        assert!(result.data.is_none());
    }

    #[tokio::test]
    async fn unknown_id_is_a_logical_failure() {
        let backend = DemoBackend::new();

        let result = backend.get_text("nope").await.unwrap();

        assert!(!result.success);
        assert_eq!(result.message, "No text found for ID nope");
    }
}
