//! Configuration management for the contact pipeline.
//!
//! Provider credentials and endpoints are read from environment variables
//! (optionally seeded from a `.env` file) and never hard-coded. A provider is
//! enabled by setting its credentials; the delivery order is fixed.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::time::Duration;

/// Default Web3Forms API base URL.
pub const DEFAULT_WEB3FORMS_BASE_URL: &str = "https://api.web3forms.com";

/// Default FormKeep base URL.
pub const DEFAULT_FORMKEEP_BASE_URL: &str = "https://formkeep.com";

/// Default EmailJS API base URL.
pub const DEFAULT_EMAILJS_BASE_URL: &str = "https://api.emailjs.com";

/// Web3Forms provider settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Web3FormsConfig {
    pub base_url: String,
    pub access_key: String,
    pub from_name: String,
}

/// FormKeep provider settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormKeepConfig {
    pub base_url: String,
    pub form_id: String,
}

/// EmailJS provider settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailJsConfig {
    pub base_url: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

/// Configuration for the contact pipeline.
#[derive(Debug, Clone)]
pub struct Config {
    /// Web3Forms relay, tried first when configured
    pub web3forms: Option<Web3FormsConfig>,

    /// FormKeep relay, tried second when configured
    pub formkeep: Option<FormKeepConfig>,

    /// EmailJS transactional email, tried last when configured
    pub emailjs: Option<EmailJsConfig>,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// How long a success/error status stays visible, in seconds (default: 5)
    pub status_reset_secs: u64,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Provider variables:
    /// - `WEB3FORMS_ACCESS_KEY` (+ optional `WEB3FORMS_BASE_URL`, `WEB3FORMS_FROM_NAME`)
    /// - `FORMKEEP_FORM_ID` (+ optional `FORMKEEP_BASE_URL`)
    /// - `EMAILJS_SERVICE_ID`, `EMAILJS_TEMPLATE_ID`, `EMAILJS_PUBLIC_KEY` (+ optional `EMAILJS_BASE_URL`)
    ///
    /// Optional environment variables:
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `STATUS_RESET_SECS`: status display time in seconds (default: 5)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy::dotenv() doesn't print to stdout
        let _ = dotenvy::dotenv();

        let web3forms = match Self::non_empty_var("WEB3FORMS_ACCESS_KEY")? {
            Some(access_key) => Some(Web3FormsConfig {
                base_url: Self::base_url_var("WEB3FORMS_BASE_URL", DEFAULT_WEB3FORMS_BASE_URL)?,
                access_key,
                from_name: Self::non_empty_var("WEB3FORMS_FROM_NAME")?
                    .unwrap_or_else(|| "Portfolio Contact Form".to_string()),
            }),
            None => None,
        };

        let formkeep = match Self::non_empty_var("FORMKEEP_FORM_ID")? {
            Some(form_id) => Some(FormKeepConfig {
                base_url: Self::base_url_var("FORMKEEP_BASE_URL", DEFAULT_FORMKEEP_BASE_URL)?,
                form_id,
            }),
            None => None,
        };

        let emailjs = Self::emailjs_from_env()?;

        if web3forms.is_none() && formkeep.is_none() && emailjs.is_none() {
            return Err(ConfigError::NoProviders);
        }

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;
        if request_timeout == 0 {
            return Err(ConfigError::InvalidValue {
                var: "REQUEST_TIMEOUT".to_string(),
                reason: "Must be at least 1 second".to_string(),
            });
        }

        let status_reset_secs = Self::parse_env_u64("STATUS_RESET_SECS", 5)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            web3forms,
            formkeep,
            emailjs,
            request_timeout,
            status_reset_secs,
            log_level,
        })
    }

    /// Per-request HTTP timeout.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }

    /// How long a terminal status is shown before returning to idle.
    pub fn status_reset_delay(&self) -> Duration {
        Duration::from_secs(self.status_reset_secs)
    }

    /// EmailJS needs all three identifiers; a partial set is a mistake worth reporting.
    fn emailjs_from_env() -> ConfigResult<Option<EmailJsConfig>> {
        let service_id = Self::non_empty_var("EMAILJS_SERVICE_ID")?;
        let template_id = Self::non_empty_var("EMAILJS_TEMPLATE_ID")?;
        let public_key = Self::non_empty_var("EMAILJS_PUBLIC_KEY")?;

        match (service_id, template_id, public_key) {
            (None, None, None) => Ok(None),
            (Some(service_id), Some(template_id), Some(public_key)) => Ok(Some(EmailJsConfig {
                base_url: Self::base_url_var("EMAILJS_BASE_URL", DEFAULT_EMAILJS_BASE_URL)?,
                service_id,
                template_id,
                public_key,
            })),
            (service_id, template_id, _) => {
                let missing = if service_id.is_none() {
                    "EMAILJS_SERVICE_ID"
                } else if template_id.is_none() {
                    "EMAILJS_TEMPLATE_ID"
                } else {
                    "EMAILJS_PUBLIC_KEY"
                };
                Err(ConfigError::IncompleteProvider(missing.to_string()))
            }
        }
    }

    /// Read a credential. Unset means "not configured"; set but blank is an error.
    fn non_empty_var(var_name: &str) -> ConfigResult<Option<String>> {
        match env::var(var_name) {
            Ok(val) if val.trim().is_empty() => Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: "Cannot be empty".to_string(),
            }),
            Ok(val) => Ok(Some(val.trim().to_string())),
            Err(_) => Ok(None),
        }
    }

    /// Read a base URL, validating the scheme.
    fn base_url_var(var_name: &str, default: &str) -> ConfigResult<String> {
        let url = env::var(var_name).unwrap_or_else(|_| default.to_string());

        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        Ok(url)
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            web3forms: None,
            formkeep: None,
            emailjs: None,
            request_timeout: 10,
            status_reset_secs: 5,
            log_level: "error".to_string(),
        }
    }
}
