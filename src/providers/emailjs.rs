use crate::client::AsyncRelayClient;
use crate::config::EmailJsConfig;
use crate::domain::ContactSubmission;
use crate::error::DeliveryResult;
use crate::providers::traits::DeliveryProvider;
use async_trait::async_trait;
use serde_json::{json, Value};

/// EmailJS transactional email API.
///
/// Sends through a pre-configured service and template; the visitor's fields
/// travel as `template_params`. Success is a 2xx with a plain `OK` body, which
/// is not inspected.
pub struct EmailJsProvider {
    client: AsyncRelayClient,
    config: EmailJsConfig,
}

impl EmailJsProvider {
    pub const ID: &'static str = "emailjs";

    pub fn new(client: AsyncRelayClient, config: EmailJsConfig) -> Self {
        Self { client, config }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/api/v1.0/email/send",
            self.config.base_url.trim_end_matches('/')
        )
    }

    pub fn payload(&self, submission: &ContactSubmission) -> Value {
        json!({
            "service_id": self.config.service_id,
            "template_id": self.config.template_id,
            "user_id": self.config.public_key,
            "template_params": {
                "from_name": submission.name(),
                "from_email": submission.email(),
                "reply_to": submission.email(),
                "message": submission.message(),
                "subject": submission.subject(),
            },
        })
    }
}

#[async_trait]
impl DeliveryProvider for EmailJsProvider {
    fn id(&self) -> &str {
        Self::ID
    }

    async fn send(&self, submission: &ContactSubmission) -> DeliveryResult<()> {
        self.client
            .post_json(&self.endpoint(), self.payload(submission))
            .await?;
        Ok(())
    }
}
