//! Portfolio Contact - the contact form pipeline of a personal portfolio site.
//!
//! This library validates what a visitor typed into the contact form, drives
//! the form's submission status, and delivers the message through an ordered
//! chain of third-party relay services, falling back to the next one when a
//! provider fails.
//!
//! # Architecture
//!
//! - **domain**: Form fields, the validated submission, and the email value object
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **client**: Synchronous HTTP client with an async wrapper
//! - **providers**: Web3Forms, FormKeep, and EmailJS delivery providers
//! - **services**: Form state controller and fallback dispatcher
//! - **metrics**: Request and delivery counters

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod providers;
pub mod services;

pub use client::{AsyncRelayClient, RelayClient};
pub use config::Config;
pub use domain::{ContactSubmission, EmailAddress, FormField, FormFields, ValidationError};
pub use error::{ConfigError, DeliveryError};
pub use metrics::{HttpTimer, Metrics, MetricsSummary};
pub use providers::{DeliveryProvider, EmailJsProvider, FormKeepProvider, Web3FormsProvider};
pub use services::{
    ContactFormController, DeliveryDispatcher, DeliveryOutcome, FallbackDispatcher, FormSnapshot,
    SubmissionStatus,
};
