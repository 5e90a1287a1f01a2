//! Error types for the portfolio contact pipeline.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Domain validation errors live in [`crate::domain::ValidationError`].

use thiserror::Error;

/// Message shown to the visitor when a provider could not be reached.
pub const NETWORK_ERROR_MESSAGE: &str =
    "Network error. Please check your connection and try again.";

/// Message shown to the visitor when a provider rejected the message without explanation.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to send message. Please try again.";

/// Errors that can occur when delivering a message through a provider.
#[derive(Error, Debug)]
pub enum DeliveryError {
    /// HTTP request failed before a response was received
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Provider returned a non-success status code
    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Provider answered but reported a logical failure
    #[error("Delivery rejected: {0}")]
    Rejected(String),

    /// Failed to parse JSON response
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,

    /// Generic delivery error with context
    #[error("Delivery error: {0}")]
    Other(String),
}

impl DeliveryError {
    /// The human-readable message surfaced to the visitor for this failure.
    pub fn user_message(&self) -> String {
        match self {
            Self::HttpError(_) | Self::Timeout => NETWORK_ERROR_MESSAGE.to_string(),
            Self::Rejected(message) => message.clone(),
            Self::ApiError { message, .. } if !message.trim().is_empty() => message.clone(),
            Self::ApiError { .. } | Self::JsonError(_) => GENERIC_FAILURE_MESSAGE.to_string(),
            Self::Other(message) => message.clone(),
        }
    }

    /// Whether the provider was never reached.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::HttpError(_) | Self::Timeout)
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// No delivery provider has credentials
    #[error("No delivery provider configured (set WEB3FORMS_ACCESS_KEY, FORMKEEP_FORM_ID, or the EMAILJS_* variables)")]
    NoProviders,

    /// Some but not all EmailJS variables are set
    #[error("Incomplete EmailJS configuration: missing {0}")]
    IncompleteProvider(String),
}

/// Convenience type alias for Results with DeliveryError
pub type DeliveryResult<T> = Result<T, DeliveryError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
