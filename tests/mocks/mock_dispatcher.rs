use async_trait::async_trait;
use portfolio_contact::domain::ContactSubmission;
use portfolio_contact::services::{DeliveryDispatcher, DeliveryOutcome};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// Dispatcher stub returning a fixed outcome.
///
/// Counts invocations so tests can assert the network was never touched, and
/// can optionally hold each dispatch until released.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockDispatcher {
    outcome: DeliveryOutcome,
    calls: Arc<Mutex<Vec<ContactSubmission>>>,
    gate: Option<Arc<Notify>>,
}

#[allow(dead_code)]
impl MockDispatcher {
    pub fn delivering(provider: &str) -> Self {
        Self::returning(DeliveryOutcome::delivered(provider))
    }

    pub fn failing(error: &str) -> Self {
        Self::returning(DeliveryOutcome::failed(error))
    }

    pub fn returning(outcome: DeliveryOutcome) -> Self {
        Self {
            outcome,
            calls: Arc::new(Mutex::new(Vec::new())),
            gate: None,
        }
    }

    /// Block every dispatch until `gate` is notified.
    pub fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn last_submission(&self) -> Option<ContactSubmission> {
        self.calls.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl DeliveryDispatcher for MockDispatcher {
    async fn dispatch(&self, submission: &ContactSubmission) -> DeliveryOutcome {
        self.calls.lock().unwrap().push(submission.clone());

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        self.outcome.clone()
    }
}
