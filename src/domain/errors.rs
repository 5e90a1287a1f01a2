//! Contact form validation errors.

use std::fmt;

/// The first rule a contact form failed.
///
/// Each variant maps to exactly one fixed message shown to the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Name missing or shorter than two characters after trimming.
    NameTooShort,

    /// Email missing or not of the form `local@domain.tld`.
    InvalidEmail,

    /// Message missing or shorter than ten characters after trimming.
    MessageTooShort,
}

impl ValidationError {
    /// The message shown to the visitor.
    pub fn message(&self) -> &'static str {
        match self {
            Self::NameTooShort => "Please enter your name",
            Self::InvalidEmail => "Please enter a valid email address",
            Self::MessageTooShort => "Please enter a message of at least 10 characters",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ValidationError {}
