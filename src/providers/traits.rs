use crate::domain::ContactSubmission;
use crate::error::DeliveryResult;
use async_trait::async_trait;

/// An external service able to relay a contact message.
///
/// Provides abstraction over the concrete relay endpoints, enabling
/// different implementations (HTTP relays, transactional email, test stubs).
#[async_trait]
pub trait DeliveryProvider: Send + Sync {
    /// Stable identifier reported when this provider delivers a message.
    fn id(&self) -> &str;

    /// Deliver one submission.
    ///
    /// Transport failures and provider-reported failures are both errors;
    /// `DeliveryError::user_message` gives the text to show the visitor.
    async fn send(&self, submission: &ContactSubmission) -> DeliveryResult<()>;
}
