//! Basic metrics instrumentation for the delivery pipeline.
//!
//! Provides counters and duration tracking for outbound HTTP requests and for
//! the outcome of each fallback chain.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Metrics collector shared by the relay client and the dispatcher.
#[derive(Debug, Clone)]
pub struct Metrics {
    /// Total number of HTTP requests made
    http_requests_total: Arc<AtomicU64>,

    /// Total number of HTTP errors
    http_errors_total: Arc<AtomicU64>,

    /// Total duration of all HTTP requests in milliseconds
    http_duration_total_ms: Arc<AtomicU64>,

    /// Messages delivered by some provider
    deliveries_succeeded_total: Arc<AtomicU64>,

    /// Individual provider attempts that failed
    provider_failures_total: Arc<AtomicU64>,

    /// Dispatches where every provider failed
    chains_exhausted_total: Arc<AtomicU64>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self {
            http_requests_total: Arc::new(AtomicU64::new(0)),
            http_errors_total: Arc::new(AtomicU64::new(0)),
            http_duration_total_ms: Arc::new(AtomicU64::new(0)),
            deliveries_succeeded_total: Arc::new(AtomicU64::new(0)),
            provider_failures_total: Arc::new(AtomicU64::new(0)),
            chains_exhausted_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Record an HTTP request with duration.
    pub fn record_http_request(&self, duration: Duration) {
        self.http_requests_total.fetch_add(1, Ordering::Relaxed);
        self.http_duration_total_ms
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
    }

    /// Record an HTTP error.
    pub fn record_http_error(&self) {
        self.http_errors_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a message delivered by a provider.
    pub fn record_delivery_succeeded(&self) {
        self.deliveries_succeeded_total
            .fetch_add(1, Ordering::Relaxed);
    }

    /// Record a single failed provider attempt.
    pub fn record_provider_failure(&self) {
        self.provider_failures_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a dispatch in which no provider succeeded.
    pub fn record_chain_exhausted(&self) {
        self.chains_exhausted_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Get total HTTP requests.
    pub fn http_requests_total(&self) -> u64 {
        self.http_requests_total.load(Ordering::Relaxed)
    }

    /// Get total HTTP errors.
    pub fn http_errors_total(&self) -> u64 {
        self.http_errors_total.load(Ordering::Relaxed)
    }

    /// Get total HTTP duration in milliseconds.
    pub fn http_duration_total_ms(&self) -> u64 {
        self.http_duration_total_ms.load(Ordering::Relaxed)
    }

    /// Get average HTTP request duration in milliseconds.
    pub fn http_duration_avg_ms(&self) -> f64 {
        let total = self.http_duration_total_ms.load(Ordering::Relaxed);
        let count = self.http_requests_total.load(Ordering::Relaxed);
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    }

    /// Get total successful deliveries.
    pub fn deliveries_succeeded_total(&self) -> u64 {
        self.deliveries_succeeded_total.load(Ordering::Relaxed)
    }

    /// Get total failed provider attempts.
    pub fn provider_failures_total(&self) -> u64 {
        self.provider_failures_total.load(Ordering::Relaxed)
    }

    /// Get total exhausted fallback chains.
    pub fn chains_exhausted_total(&self) -> u64 {
        self.chains_exhausted_total.load(Ordering::Relaxed)
    }

    /// Reset all metrics to zero.
    pub fn reset(&self) {
        self.http_requests_total.store(0, Ordering::Relaxed);
        self.http_errors_total.store(0, Ordering::Relaxed);
        self.http_duration_total_ms.store(0, Ordering::Relaxed);
        self.deliveries_succeeded_total.store(0, Ordering::Relaxed);
        self.provider_failures_total.store(0, Ordering::Relaxed);
        self.chains_exhausted_total.store(0, Ordering::Relaxed);
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            http_requests_total: self.http_requests_total(),
            http_errors_total: self.http_errors_total(),
            http_duration_total_ms: self.http_duration_total_ms(),
            http_duration_avg_ms: self.http_duration_avg_ms(),
            deliveries_succeeded_total: self.deliveries_succeeded_total(),
            provider_failures_total: self.provider_failures_total(),
            chains_exhausted_total: self.chains_exhausted_total(),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone)]
pub struct MetricsSummary {
    pub http_requests_total: u64,
    pub http_errors_total: u64,
    pub http_duration_total_ms: u64,
    pub http_duration_avg_ms: f64,
    pub deliveries_succeeded_total: u64,
    pub provider_failures_total: u64,
    pub chains_exhausted_total: u64,
}

/// Helper for timing HTTP requests.
pub struct HttpTimer {
    start: Instant,
    metrics: Metrics,
}

impl HttpTimer {
    /// Start timing an HTTP request.
    pub fn new(metrics: Metrics) -> Self {
        Self {
            start: Instant::now(),
            metrics,
        }
    }

    /// Complete the timing and record the duration.
    pub fn complete(self) {
        let duration = self.start.elapsed();
        self.metrics.record_http_request(duration);
    }

    /// Complete the timing and record as an error.
    pub fn complete_with_error(self) {
        let duration = self.start.elapsed();
        self.metrics.record_http_request(duration);
        self.metrics.record_http_error();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_metrics_creation() {
        let metrics = Metrics::new();
        assert_eq!(metrics.http_requests_total(), 0);
        assert_eq!(metrics.http_errors_total(), 0);
        assert_eq!(metrics.deliveries_succeeded_total(), 0);
    }

    #[test]
    fn test_average_duration() {
        let metrics = Metrics::new();
        metrics.record_http_request(Duration::from_millis(100));
        metrics.record_http_request(Duration::from_millis(200));
        assert_eq!(metrics.http_requests_total(), 2);
        assert_eq!(metrics.http_duration_total_ms(), 300);
        assert_eq!(metrics.http_duration_avg_ms(), 150.0);
    }

    #[test]
    fn test_delivery_counters_and_reset() {
        let metrics = Metrics::new();
        metrics.record_provider_failure();
        metrics.record_provider_failure();
        metrics.record_delivery_succeeded();
        metrics.record_chain_exhausted();

        let summary = metrics.summary();
        assert_eq!(summary.provider_failures_total, 2);
        assert_eq!(summary.deliveries_succeeded_total, 1);
        assert_eq!(summary.chains_exhausted_total, 1);

        metrics.reset();
        assert_eq!(metrics.provider_failures_total(), 0);
        assert_eq!(metrics.chains_exhausted_total(), 0);
    }

    #[test]
    fn test_http_timer_with_error() {
        let metrics = Metrics::new();
        let timer = HttpTimer::new(metrics.clone());
        timer.complete_with_error();

        assert_eq!(metrics.http_requests_total(), 1);
        assert_eq!(metrics.http_errors_total(), 1);
    }

    #[test]
    fn test_clones_share_counters() {
        let metrics = Metrics::new();
        let worker = metrics.clone();

        thread::spawn(move || {
            for _ in 0..50 {
                worker.record_http_request(Duration::from_millis(1));
            }
        })
        .join()
        .unwrap();

        assert_eq!(metrics.http_requests_total(), 50);
    }
}
