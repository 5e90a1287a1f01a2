//! Portfolio Contact - command-line entry point
//!
//! Sends one contact message through the configured provider chain, exactly
//! as the website's form would:
//!
//! ```text
//! portfolio-contact "<name>" "<email>" "<message>"
//! ```

use anyhow::{bail, Result};
use portfolio_contact::client::{AsyncRelayClient, RelayClient};
use portfolio_contact::providers::build_chain;
use portfolio_contact::services::DeliveryDispatcher;
use portfolio_contact::{
    Config, ContactFormController, FallbackDispatcher, FormField, Metrics, SubmissionStatus,
};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let [name, email, message] = args.as_slice() else {
        bail!("usage: portfolio-contact <name> <email> <message>");
    };

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only; stdout carries the result)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Configuration loaded successfully");

    let metrics = Metrics::new();
    let client = AsyncRelayClient::new(RelayClient::new(config.request_timeout(), metrics.clone()));
    let dispatcher = FallbackDispatcher::new(build_chain(&config, client), metrics.clone());

    info!("Provider chain: {}", dispatcher.provider_ids().join(" -> "));
    info!(
        "Request timeout: {} seconds, status display: {} seconds",
        config.request_timeout, config.status_reset_secs
    );

    let dispatcher = Arc::new(dispatcher) as Arc<dyn DeliveryDispatcher>;
    let form = ContactFormController::with_reset_delay(dispatcher, config.status_reset_delay());

    form.update_field(FormField::Name, name.as_str());
    form.update_field(FormField::Email, email.as_str());
    form.update_field(FormField::Message, message.as_str());

    let status = form.submit().await;
    let snapshot = form.snapshot();
    form.unmount();

    let summary = metrics.summary();
    info!(
        "HTTP requests: {} ({} errors, avg {:.1} ms)",
        summary.http_requests_total, summary.http_errors_total, summary.http_duration_avg_ms
    );

    let status_message = snapshot.status_message.unwrap_or_default();
    match status {
        SubmissionStatus::Success => {
            println!("{}", status_message);
            Ok(())
        }
        _ => {
            error!("Contact message not sent: {}", status_message);
            bail!("{}", status_message)
        }
    }
}
