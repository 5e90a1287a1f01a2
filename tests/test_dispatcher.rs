//! Tests for the sequential provider fallback.

mod mocks;

use mocks::MockProvider;
use portfolio_contact::error::NETWORK_ERROR_MESSAGE;
use portfolio_contact::providers::DeliveryProvider;
use portfolio_contact::services::{DeliveryDispatcher, DeliveryOutcome, FallbackDispatcher};
use portfolio_contact::{ContactSubmission, Metrics};
use std::sync::{Arc, Mutex};

fn submission() -> ContactSubmission {
    ContactSubmission::new("Jo", "jo@x.com", "Hello there, testing").unwrap()
}

fn dispatcher(providers: &[&MockProvider]) -> FallbackDispatcher {
    let chain = providers
        .iter()
        .map(|p| Arc::new((*p).clone()) as Arc<dyn DeliveryProvider>)
        .collect();
    FallbackDispatcher::new(chain, Metrics::new())
}

#[tokio::test]
async fn test_first_success_wins() {
    let a = MockProvider::succeeding("A");
    let b = MockProvider::succeeding("B");

    let outcome = dispatcher(&[&a, &b]).dispatch(&submission()).await;

    assert_eq!(outcome, DeliveryOutcome::delivered("A"));
    assert_eq!(a.call_count(), 1);
    assert_eq!(b.call_count(), 0, "no provider is tried after a success");
}

#[tokio::test]
async fn test_falls_back_in_order() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let a = MockProvider::rejecting("A", "errA").with_log(log.clone());
    let b = MockProvider::succeeding("B").with_log(log.clone());

    let outcome = dispatcher(&[&a, &b]).dispatch(&submission()).await;

    assert!(outcome.success);
    assert_eq!(outcome.provider_used.as_deref(), Some("B"));
    assert!(outcome.error.is_none());
    assert_eq!(a.call_count(), 1);
    assert_eq!(*log.lock().unwrap(), vec!["A", "B"]);
}

#[tokio::test]
async fn test_exhaustion_reports_last_error() {
    let a = MockProvider::rejecting("A", "errA");
    let b = MockProvider::rejecting("B", "errB");

    let outcome = dispatcher(&[&a, &b]).dispatch(&submission()).await;

    assert_eq!(outcome, DeliveryOutcome::failed("errB"));
    assert_eq!(a.call_count(), 1);
    assert_eq!(b.call_count(), 1);
}

#[tokio::test]
async fn test_transport_failure_is_treated_like_rejection() {
    let a = MockProvider::unreachable("A");
    let b = MockProvider::succeeding("B");

    let outcome = dispatcher(&[&a, &b]).dispatch(&submission()).await;
    assert_eq!(outcome, DeliveryOutcome::delivered("B"));

    let a = MockProvider::rejecting("A", "errA");
    let b = MockProvider::unreachable("B");

    let outcome = dispatcher(&[&a, &b]).dispatch(&submission()).await;
    assert_eq!(outcome, DeliveryOutcome::failed(NETWORK_ERROR_MESSAGE));
}

#[tokio::test]
async fn test_every_provider_sees_the_same_submission() {
    let a = MockProvider::rejecting("A", "errA");
    let b = MockProvider::rejecting("B", "errB");
    let c = MockProvider::succeeding("C");

    dispatcher(&[&a, &b, &c]).dispatch(&submission()).await;

    assert_eq!(a.sent(), vec![submission()]);
    assert_eq!(b.sent(), vec![submission()]);
    assert_eq!(c.sent(), vec![submission()]);
}

#[tokio::test]
async fn test_metrics_track_attempts() {
    let a = MockProvider::rejecting("A", "errA");
    let b = MockProvider::succeeding("B");
    let dispatcher = dispatcher(&[&a, &b]);

    dispatcher.dispatch(&submission()).await;

    let summary = dispatcher.metrics().summary();
    assert_eq!(summary.provider_failures_total, 1);
    assert_eq!(summary.deliveries_succeeded_total, 1);
    assert_eq!(summary.chains_exhausted_total, 0);
}

#[test]
fn test_provider_ids_in_priority_order() {
    let a = MockProvider::succeeding("web3forms");
    let b = MockProvider::succeeding("formkeep");
    assert_eq!(dispatcher(&[&a, &b]).provider_ids(), vec!["web3forms", "formkeep"]);
}
