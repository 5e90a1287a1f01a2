//! Contact form fields and the validated submission built from them.

use super::email::EmailAddress;
use super::errors::ValidationError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Minimum number of characters in a trimmed name.
pub const MIN_NAME_LEN: usize = 2;

/// Minimum number of characters in a trimmed message.
pub const MIN_MESSAGE_LEN: usize = 10;

/// One of the three editable inputs of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Message,
}

impl FormField {
    /// The input's `name` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "message" => Ok(Self::Message),
            other => Err(format!("Unknown form field: {}", other)),
        }
    }
}

/// Raw, unvalidated values as currently typed by the visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormFields {
    /// Create a set of fields from raw values.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Read one field.
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        }
    }

    /// Overwrite one field.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Message => self.message = value,
        }
    }

    /// Reset every field to the empty string.
    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }

    /// Validate the fields, building a submission on success.
    ///
    /// Rules are checked name, email, message; the first failure is returned.
    pub fn validate(&self) -> Result<ContactSubmission, ValidationError> {
        let name = self.name.trim();
        if name.chars().count() < MIN_NAME_LEN {
            return Err(ValidationError::NameTooShort);
        }

        let email = EmailAddress::new(self.email.as_str())?;

        let message = self.message.trim();
        if message.chars().count() < MIN_MESSAGE_LEN {
            return Err(ValidationError::MessageTooShort);
        }

        Ok(ContactSubmission {
            name: name.to_string(),
            email,
            message: message.to_string(),
        })
    }
}

/// A validated contact message, ready for delivery.
///
/// Only obtainable through [`FormFields::validate`], so every value upholds the
/// form rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    name: String,
    email: EmailAddress,
    message: String,
}

impl ContactSubmission {
    /// Validate raw values into a submission.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        FormFields::new(name, email, message).validate()
    }

    /// Sender name, trimmed.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sender email address.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Message body, trimmed.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Subject line used by every provider.
    pub fn subject(&self) -> String {
        format!("New Portfolio Message from {}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str, email: &str, message: &str) -> FormFields {
        FormFields::new(name, email, message)
    }

    #[test]
    fn test_validate_accepts_minimal_valid_input() {
        let submission = fields("Jo", "jo@x.com", "Hello there, testing")
            .validate()
            .unwrap();
        assert_eq!(submission.name(), "Jo");
        assert_eq!(submission.email().as_str(), "jo@x.com");
        assert_eq!(submission.message(), "Hello there, testing");
    }

    #[test]
    fn test_validate_trims_name_and_message() {
        let submission = fields("  Ayra  ", "a@b.io", "   0123456789   ")
            .validate()
            .unwrap();
        assert_eq!(submission.name(), "Ayra");
        assert_eq!(submission.message(), "0123456789");
    }

    #[test]
    fn test_name_rule_wins_over_everything() {
        for name in ["", " ", "J", "  J  "] {
            assert_eq!(
                fields(name, "", "").validate(),
                Err(ValidationError::NameTooShort)
            );
            assert_eq!(
                fields(name, "jo@x.com", "Hello there, testing").validate(),
                Err(ValidationError::NameTooShort)
            );
        }
    }

    #[test]
    fn test_email_rule_after_name() {
        for email in ["", "jo", "jo@x", "jo @x.com", "jo@x.com\t"] {
            assert_eq!(
                fields("Jo", email, "short").validate(),
                Err(ValidationError::InvalidEmail)
            );
        }
    }

    #[test]
    fn test_message_rule_last() {
        assert_eq!(
            fields("Jo", "jo@x.com", "  too short  ").validate(),
            Err(ValidationError::MessageTooShort)
        );
        assert_eq!(
            fields("Jo", "jo@x.com", "").validate(),
            Err(ValidationError::MessageTooShort)
        );
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        assert!(fields("Zoë", "z@x.com", "éééééééééé").validate().is_ok());
        assert_eq!(
            fields("é", "z@x.com", "Hello there, testing").validate(),
            Err(ValidationError::NameTooShort)
        );
    }

    #[test]
    fn test_validate_is_idempotent() {
        let form = fields("J", "bad", "");
        assert_eq!(form.validate(), form.validate());

        let form = fields("Jo", "jo@x.com", "Hello there, testing");
        assert_eq!(form.validate(), form.validate());
    }

    #[test]
    fn test_subject_uses_trimmed_name() {
        let submission = ContactSubmission::new(" Jo ", "jo@x.com", "Hello there, testing").unwrap();
        assert_eq!(submission.subject(), "New Portfolio Message from Jo");
    }

    #[test]
    fn test_set_get_and_clear() {
        let mut form = FormFields::default();
        form.set(FormField::Email, "jo@x.com");
        assert_eq!(form.get(FormField::Email), "jo@x.com");
        form.clear();
        assert_eq!(form, FormFields::default());
    }

    #[test]
    fn test_form_field_from_str() {
        assert_eq!("message".parse::<FormField>(), Ok(FormField::Message));
        assert!("subject".parse::<FormField>().is_err());
    }
}
