//! JSON-over-HTTP transport backed by reqwest.

use std::time::Duration;

use async_trait::async_trait;
use notedesk_config::ServerConfig;
use notedesk_protocol::{MutationRequest, MutationResult};
use tracing::debug;

use super::Transport;
use crate::mutation::MutationError;

/// Posts mutation requests as JSON to `<base_url><endpoint>`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    /// Build a transport with the given per-request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, MutationError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| MutationError::Transport {
                message: format!("failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(server: &ServerConfig) -> Result<Self, MutationError> {
        Self::new(server.base_url(), server.request_timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &MutationRequest) -> Result<MutationResult, MutationError> {
        let url = self.endpoint_url(request.endpoint());
        debug!(
            event = "core.transport.request_started",
            url = %url,
            kind = %request.kind(),
            id = %request.id()
        );

        // `.json()` sets `Content-Type: application/json`
        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| MutationError::Transport {
                message: e.to_string(),
            })?;

        let status = response.status();
        debug!(
            event = "core.transport.response_received",
            url = %url,
            status = status.as_u16()
        );

        if !status.is_success() {
            return Err(MutationError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| MutationError::Transport {
            message: e.to_string(),
        })?;
        debug!(event = "core.transport.body_received", body = %body);

        parse_result(&body)
    }
}

/// Parse a response body into a result.
///
/// Only a JSON object is accepted. serde would otherwise read an array such
/// as `[true]` positionally into the result's fields.
fn parse_result(body: &str) -> Result<MutationResult, MutationError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| MutationError::MalformedResponse {
            message: e.to_string(),
        })?;

    if !value.is_object() {
        return Err(MutationError::MalformedResponse {
            message: format!("expected a JSON object, got: {}", body),
        });
    }

    serde_json::from_value(value).map_err(|e| MutationError::MalformedResponse {
        message: e.to_string(),
    })
}
