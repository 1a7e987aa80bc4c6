//! Contact message input and validation.

use super::email::EmailAddress;
use super::errors::{FieldErrors, FormField, ValidationError};
use serde::Serialize;

/// Minimum name length, in characters, after trimming.
pub const NAME_MIN_CHARS: usize = 2;

/// Minimum message length, in characters, after trimming.
pub const MESSAGE_MIN_CHARS: usize = 10;

/// Raw field values as typed by the visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactInput {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactInput {
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

    /// Current value of a field.
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        }
    }

    /// Replace the value of a field.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Message => self.message = value,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }
}

/// A validated message, ready to be relayed.
///
/// Only [`validate`] builds one, so every field is trimmed and within its rules.
/// Serializes to the relay body `{ "name", "email", "message" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    name: String,
    email: EmailAddress,
    message: String,
}

impl ContactMessage {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Result of [`validate`]: the accepted message or the per-field errors.
pub type ValidationResult = Result<ContactMessage, FieldErrors>;

/// Validate raw form input.
///
/// Every field is trimmed before its rules run. Per field the "required" rule is checked
/// first, so each field reports at most one error. Nothing is cached between calls.
pub fn validate(input: &ContactInput) -> ValidationResult {
    let mut errors = FieldErrors::new();

    let name = input.name.trim();
    if let Err(e) = check_length(FormField::Name, name, NAME_MIN_CHARS) {
        errors.push(e);
    }

    let email = input.email.trim();
    let email = if email.is_empty() {
        errors.push(ValidationError::Required(FormField::Email));
        None
    } else {
        match EmailAddress::new(email) {
            Ok(address) => Some(address),
            Err(e) => {
                errors.push(e);
                None
            }
        }
    };

    let message = input.message.trim();
    if let Err(e) = check_length(FormField::Message, message, MESSAGE_MIN_CHARS) {
        errors.push(e);
    }

    match email {
        Some(email) if errors.is_empty() => Ok(ContactMessage {
            name: name.to_string(),
            email,
            message: message.to_string(),
        }),
        _ => Err(errors),
    }
}

fn check_length(field: FormField, value: &str, min: usize) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Required(field));
    }
    if value.chars().count() < min {
        return Err(ValidationError::TooShort { field, min });
    }
    Ok(())
}
