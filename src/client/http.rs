//! HTTP implementation of the backend client
//!
//! Wire format:
//! - `POST {base}/texts` with `{"text": "..."}`
//! - `GET  {base}/texts/{id}`
//!
//! Both answer with an `OperationResult` JSON body. A non-2xx response whose
//! body still decodes as an `OperationResult` is handed back as a logical
//! result so the backend's own message reaches the user.

use super::{BackendClient, ClientError, OperationResult};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Url;
use serde::Serialize;
use std::time::Duration;

/// Longest error body kept in a `ClientError::Status`
const MAX_ERROR_BODY: usize = 200;

#[derive(Serialize)]
struct PostTextBody<'a> {
    text: &'a str,
}

/// Backend client speaking JSON over HTTP
pub struct HttpBackendClient {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpBackendClient {
    /// Build a client for `base_url`
    ///
    /// `timeout` bounds each request at the transport level. `None` leaves
    /// requests unbounded.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("Invalid backend URL: {}", base_url))?;
        if base_url.cannot_be_a_base() {
            anyhow::bail!("Backend URL cannot carry a path: {}", base_url);
        }

        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("textops/", env!("CARGO_PKG_VERSION")))
            .pool_max_idle_per_host(4);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to create HTTP client")?;

        Ok(Self { client, base_url })
    }

    /// `{base}/texts[/{id}]` with the id encoded as a single path segment
    fn texts_url(&self, id: Option<&str>) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("texts");
            if let Some(id) = id {
                segments.push(id);
            }
        }
        url
    }
}

#[async_trait]
impl BackendClient for HttpBackendClient {
    async fn post_text(&self, text: &str) -> Result<OperationResult, ClientError> {
        let url = self.texts_url(None);
        tracing::debug!(%url, len = text.len(), "POST text");

        let response = self
            .client
            .post(url)
            .json(&PostTextBody { text })
            .send()
            .await?;

        read_result(response).await
    }

    async fn get_text(&self, id: &str) -> Result<OperationResult, ClientError> {
        let url = self.texts_url(Some(id));
        tracing::debug!(%url, "GET text");

        let response = self.client.get(url).send().await?;

        read_result(response).await
    }

    fn describe(&self) -> String {
        self.base_url.to_string()
    }
}

async fn read_result(response: reqwest::Response) -> Result<OperationResult, ClientError> {
    let status = response.status();
    let body = response.text().await?;

    match serde_json::from_str::<OperationResult>(&body) {
        Ok(result) => {
            if !status.is_success() {
                tracing::warn!(status = status.as_u16(), "Backend answered with error status");
            }
            Ok(result)
        }
        Err(_) if !status.is_success() => Err(ClientError::Status {
            status: status.as_u16(),
            body: truncate_body(body),
        }),
        Err(e) => Err(ClientError::Decode(e)),
    }
}

fn truncate_body(body: String) -> String {
    let trimmed = body.trim();
    if trimmed.chars().count() <= MAX_ERROR_BODY {
        return trimmed.to_string();
    }
    let mut short: String = trimmed.chars().take(MAX_ERROR_BODY).collect();
    short.push('…');
    short
}
