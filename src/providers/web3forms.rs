use crate::client::AsyncRelayClient;
use crate::config::Web3FormsConfig;
use crate::domain::ContactSubmission;
use crate::error::{DeliveryError, DeliveryResult, GENERIC_FAILURE_MESSAGE};
use crate::providers::traits::DeliveryProvider;
use async_trait::async_trait;
use serde_json::{json, Value};

/// Web3Forms relay (`POST /submit`, JSON in, JSON envelope out).
///
/// The endpoint answers `{"success": bool, "message": "..."}`; a 2xx status
/// alone is not enough, the envelope must also report success.
pub struct Web3FormsProvider {
    client: AsyncRelayClient,
    config: Web3FormsConfig,
}

impl Web3FormsProvider {
    pub const ID: &'static str = "web3forms";

    pub fn new(client: AsyncRelayClient, config: Web3FormsConfig) -> Self {
        Self { client, config }
    }

    fn endpoint(&self) -> String {
        format!("{}/submit", self.config.base_url.trim_end_matches('/'))
    }

    /// Request body in the shape Web3Forms expects.
    pub fn payload(&self, submission: &ContactSubmission) -> Value {
        json!({
            "access_key": self.config.access_key,
            "name": submission.name(),
            "email": submission.email(),
            "message": submission.message(),
            "subject": submission.subject(),
            "from_name": self.config.from_name,
            // honeypot; bots fill it in, Web3Forms drops those
            "botcheck": "",
        })
    }
}

#[async_trait]
impl DeliveryProvider for Web3FormsProvider {
    fn id(&self) -> &str {
        Self::ID
    }

    async fn send(&self, submission: &ContactSubmission) -> DeliveryResult<()> {
        let response = self
            .client
            .post_json(&self.endpoint(), self.payload(submission))
            .await?;
        let envelope = response.json()?;

        if envelope.get("success").and_then(Value::as_bool) == Some(true) {
            return Ok(());
        }

        let message = envelope
            .get("message")
            .and_then(Value::as_str)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(GENERIC_FAILURE_MESSAGE);
        Err(DeliveryError::Rejected(message.to_string()))
    }
}
