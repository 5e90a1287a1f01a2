use async_trait::async_trait;
use portfolio_contact::domain::ContactSubmission;
use portfolio_contact::error::{DeliveryError, DeliveryResult};
use portfolio_contact::providers::DeliveryProvider;
use std::sync::{Arc, Mutex};

/// Scripted delivery provider for testing.
///
/// Either always succeeds or always fails with a fixed error, and records
/// every submission it was asked to send (plus a shared attempt log so tests
/// can check ordering across providers).
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockProvider {
    id: String,
    failure: Option<FailureKind>,
    sent: Arc<Mutex<Vec<ContactSubmission>>>,
    attempt_log: Arc<Mutex<Vec<String>>>,
}

#[derive(Clone)]
enum FailureKind {
    Rejected(String),
    Transport,
}

#[allow(dead_code)]
impl MockProvider {
    /// A provider that delivers every message.
    pub fn succeeding(id: &str) -> Self {
        Self::build(id, None)
    }

    /// A provider that reports a logical failure with `message`.
    pub fn rejecting(id: &str, message: &str) -> Self {
        Self::build(id, Some(FailureKind::Rejected(message.to_string())))
    }

    /// A provider whose endpoint cannot be reached.
    pub fn unreachable(id: &str) -> Self {
        Self::build(id, Some(FailureKind::Transport))
    }

    fn build(id: &str, failure: Option<FailureKind>) -> Self {
        Self {
            id: id.to_string(),
            failure,
            sent: Arc::new(Mutex::new(Vec::new())),
            attempt_log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Share an attempt log with other providers.
    pub fn with_log(mut self, log: Arc<Mutex<Vec<String>>>) -> Self {
        self.attempt_log = log;
        self
    }

    /// Number of times `send` was called.
    pub fn call_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    /// Submissions received, in order.
    pub fn sent(&self) -> Vec<ContactSubmission> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl DeliveryProvider for MockProvider {
    fn id(&self) -> &str {
        &self.id
    }

    async fn send(&self, submission: &ContactSubmission) -> DeliveryResult<()> {
        self.sent.lock().unwrap().push(submission.clone());
        self.attempt_log.lock().unwrap().push(self.id.clone());

        match &self.failure {
            None => Ok(()),
            Some(FailureKind::Rejected(message)) => Err(DeliveryError::Rejected(message.clone())),
            Some(FailureKind::Transport) => {
                Err(DeliveryError::HttpError("Connection failed".to_string()))
            }
        }
    }
}
