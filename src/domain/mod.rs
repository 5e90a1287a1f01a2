//! Domain value objects and types.
//!
//! This module contains the contact form's raw fields, the validated
//! submission built from them, and the type-safe email address. Validation
//! happens at construction time so an invalid submission can never reach a
//! delivery provider.

pub mod email;
pub mod errors;
pub mod submission;

pub use email::EmailAddress;
pub use errors::ValidationError;
pub use submission::{ContactSubmission, FormField, FormFields, MIN_MESSAGE_LEN, MIN_NAME_LEN};
