//! Async wrapper around the synchronous RelayClient.
//!
//! This module provides an async interface to the synchronous RelayClient by using
//! `tokio::task::spawn_blocking` to run HTTP operations on a dedicated thread pool,
//! preventing blocking of the async runtime.

use crate::client::{RelayClient, RelayResponse};
use crate::error::{DeliveryError, DeliveryResult};
use serde_json::Value;
use std::sync::Arc;

/// Async handle on a shared [`RelayClient`].
///
/// Cheap to clone; every provider in a chain holds one over the same client so
/// they share the agent, timeout, and metrics.
#[derive(Clone)]
pub struct AsyncRelayClient {
    client: Arc<RelayClient>,
}

impl AsyncRelayClient {
    pub fn new(client: RelayClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    pub async fn post_json(&self, url: &str, body: Value) -> DeliveryResult<RelayResponse> {
        let client = self.client.clone();
        let url = url.to_string();

        tokio::task::spawn_blocking(move || client.post_json(&url, &body))
            .await
            .map_err(|e| DeliveryError::HttpError(format!("Task join error: {}", e)))?
    }

    pub async fn post_form(
        &self,
        url: &str,
        fields: Vec<(String, String)>,
    ) -> DeliveryResult<RelayResponse> {
        let client = self.client.clone();
        let url = url.to_string();

        tokio::task::spawn_blocking(move || {
            let pairs: Vec<(&str, &str)> = fields
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str()))
                .collect();
            client.post_form(&url, &pairs)
        })
        .await
        .map_err(|e| DeliveryError::HttpError(format!("Task join error: {}", e)))?
    }
}
