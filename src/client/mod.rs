//! HTTP client for posting contact messages to relay services.
//!
//! This module provides a synchronous HTTP client that can be used from async contexts
//! via `tokio::task::spawn_blocking` (see [`AsyncRelayClient`]). The client owns the
//! connection agent and timeout, maps transport and status failures onto
//! [`DeliveryError`], and records request metrics.

mod async_wrapper;
pub use async_wrapper::AsyncRelayClient;

use crate::error::{DeliveryError, DeliveryResult};
use crate::metrics::{HttpTimer, Metrics};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

/// Status and body of a 2xx response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayResponse {
    pub status: u16,
    pub body: String,
}

impl RelayResponse {
    /// Parse the body as a JSON value.
    pub fn json(&self) -> DeliveryResult<Value> {
        serde_json::from_str(&self.body).map_err(DeliveryError::JsonError)
    }
}

/// Synchronous HTTP client shared by every delivery provider.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct RelayClient {
    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl RelayClient {
    /// Create a new RelayClient with a per-request timeout.
    pub fn new(timeout: Duration, metrics: Metrics) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();

        Self {
            agent: Arc::new(agent),
            metrics,
        }
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// POST a JSON body.
    pub fn post_json(&self, url: &str, body: &Value) -> DeliveryResult<RelayResponse> {
        tracing::debug!("POST {}", url);
        tracing::debug!(
            "Request body: {}",
            serde_json::to_string_pretty(body).unwrap_or_else(|_| "<invalid json>".to_string())
        );

        let timer = HttpTimer::new(self.metrics.clone());
        let result = self
            .agent
            .post(url)
            .set("Content-Type", "application/json")
            .set("Accept", "application/json")
            .send_json(body);

        Self::finish(url, timer, result)
    }

    /// POST a form-encoded body.
    pub fn post_form(&self, url: &str, fields: &[(&str, &str)]) -> DeliveryResult<RelayResponse> {
        tracing::debug!("POST {} (form, {} fields)", url, fields.len());

        let timer = HttpTimer::new(self.metrics.clone());
        let result = self
            .agent
            .post(url)
            .set("Accept", "application/json")
            .send_form(fields);

        Self::finish(url, timer, result)
    }

    /// Read the body, map failures, and stop the timer.
    fn finish(
        url: &str,
        timer: HttpTimer,
        result: Result<ureq::Response, ureq::Error>,
    ) -> DeliveryResult<RelayResponse> {
        let response = match result {
            Ok(response) => response,
            Err(e) => {
                let err = Self::map_error(e);
                tracing::error!("POST {} - Error: {:?}", url, err);
                timer.complete_with_error();
                return Err(err);
            }
        };

        let status = response.status();
        let body = match response.into_string() {
            Ok(body) => body,
            Err(e) => {
                timer.complete_with_error();
                return Err(DeliveryError::HttpError(e.to_string()));
            }
        };

        tracing::debug!("POST {} - Success (status: {})", url, status);
        timer.complete();
        Ok(RelayResponse { status, body })
    }

    /// Map a ureq error to a DeliveryError.
    fn map_error(error: ureq::Error) -> DeliveryError {
        match error {
            ureq::Error::Status(code, response) => {
                let body = response.into_string().unwrap_or_default();
                DeliveryError::ApiError {
                    status: code,
                    message: Self::provider_message(&body).unwrap_or_default(),
                }
            }
            ureq::Error::Transport(transport) => match transport.kind() {
                ureq::ErrorKind::ConnectionFailed | ureq::ErrorKind::Dns => {
                    DeliveryError::HttpError("Connection failed".to_string())
                }
                ureq::ErrorKind::Io => DeliveryError::Timeout,
                _ => DeliveryError::HttpError(transport.to_string()),
            },
        }
    }

    /// Pull a human-readable `message` out of a JSON error envelope.
    pub fn provider_message(body: &str) -> Option<String> {
        let value: Value = serde_json::from_str(body).ok()?;
        value
            .get("message")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(str::to_string)
    }
}
