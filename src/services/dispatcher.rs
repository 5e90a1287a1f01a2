//! Delivery dispatcher.
//!
//! Tries each provider of a fixed chain in order until one delivers the
//! message, and reports a normalized outcome.

use crate::domain::ContactSubmission;
use crate::metrics::Metrics;
use crate::providers::DeliveryProvider;
use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;

/// Message reported when the chain has no providers at all.
pub const NO_PROVIDERS_MESSAGE: &str = "No delivery providers are configured";

/// Normalized result of one dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_used: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DeliveryOutcome {
    pub fn delivered(provider: impl Into<String>) -> Self {
        Self {
            success: true,
            provider_used: Some(provider.into()),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            provider_used: None,
            error: Some(error.into()),
        }
    }
}

/// Delivers validated submissions.
#[async_trait]
pub trait DeliveryDispatcher: Send + Sync {
    /// Attempt delivery. Never fails outright; failures are reported in the outcome.
    async fn dispatch(&self, submission: &ContactSubmission) -> DeliveryOutcome;
}

/// Sequential fallback over an ordered provider chain.
///
/// Providers are awaited one at a time in priority order. The first success
/// ends the dispatch; when every provider fails the last provider's message
/// is reported.
pub struct FallbackDispatcher {
    providers: Vec<Arc<dyn DeliveryProvider>>,
    metrics: Metrics,
}

impl FallbackDispatcher {
    /// Create a dispatcher over `providers`, tried in the given order.
    pub fn new(providers: Vec<Arc<dyn DeliveryProvider>>, metrics: Metrics) -> Self {
        Self { providers, metrics }
    }

    /// Provider ids in priority order.
    pub fn provider_ids(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.id()).collect()
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }
}

#[async_trait]
impl DeliveryDispatcher for FallbackDispatcher {
    async fn dispatch(&self, submission: &ContactSubmission) -> DeliveryOutcome {
        let mut last_error: Option<String> = None;

        for (attempt, provider) in self.providers.iter().enumerate() {
            tracing::debug!(
                provider = provider.id(),
                attempt = attempt + 1,
                of = self.providers.len(),
                "Attempting delivery"
            );

            match provider.send(submission).await {
                Ok(()) => {
                    tracing::info!(provider = provider.id(), "Contact message delivered");
                    self.metrics.record_delivery_succeeded();
                    return DeliveryOutcome::delivered(provider.id());
                }
                Err(e) => {
                    tracing::warn!(
                        provider = provider.id(),
                        transport = e.is_transport(),
                        "Delivery attempt failed: {}",
                        e
                    );
                    self.metrics.record_provider_failure();
                    last_error = Some(e.user_message());
                }
            }
        }

        self.metrics.record_chain_exhausted();
        let error = last_error.unwrap_or_else(|| NO_PROVIDERS_MESSAGE.to_string());
        tracing::error!("All delivery providers failed: {}", error);
        DeliveryOutcome::failed(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_serialization() {
        let json = serde_json::to_string(&DeliveryOutcome::delivered("formkeep")).unwrap();
        assert_eq!(json, r#"{"success":true,"providerUsed":"formkeep"}"#);

        let json = serde_json::to_string(&DeliveryOutcome::failed("errB")).unwrap();
        assert_eq!(json, r#"{"success":false,"error":"errB"}"#);
    }

    #[test]
    fn test_empty_chain_fails() {
        let dispatcher = FallbackDispatcher::new(Vec::new(), Metrics::new());
        let submission =
            ContactSubmission::new("Jo", "jo@x.com", "Hello there, testing").unwrap();

        let outcome = tokio_test::block_on(dispatcher.dispatch(&submission));
        assert_eq!(outcome, DeliveryOutcome::failed(NO_PROVIDERS_MESSAGE));
        assert_eq!(dispatcher.metrics().chains_exhausted_total(), 1);
    }
}
