use crate::client::AsyncRelayClient;
use crate::config::FormKeepConfig;
use crate::domain::ContactSubmission;
use crate::error::DeliveryResult;
use crate::providers::traits::DeliveryProvider;
use async_trait::async_trait;

/// FormKeep relay. The form id in the path routes the message; any 2xx is success.
pub struct FormKeepProvider {
    client: AsyncRelayClient,
    config: FormKeepConfig,
}

impl FormKeepProvider {
    pub const ID: &'static str = "formkeep";

    pub fn new(client: AsyncRelayClient, config: FormKeepConfig) -> Self {
        Self { client, config }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/p/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.form_id
        )
    }

    /// Form-encoded fields in submission order.
    pub fn fields(submission: &ContactSubmission) -> Vec<(String, String)> {
        vec![
            ("name".to_string(), submission.name().to_string()),
            ("email".to_string(), submission.email().to_string()),
            ("message".to_string(), submission.message().to_string()),
            ("subject".to_string(), submission.subject()),
        ]
    }
}

#[async_trait]
impl DeliveryProvider for FormKeepProvider {
    fn id(&self) -> &str {
        Self::ID
    }

    async fn send(&self, submission: &ContactSubmission) -> DeliveryResult<()> {
        self.client
            .post_form(&self.endpoint(), Self::fields(submission))
            .await?;
        Ok(())
    }
}
