//! Domain validation errors.

use std::fmt;

/// A field of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FormField {
    Name,
    Email,
    Message,
}

impl FormField {
    /// All fields, in display order.
    pub const ALL: [FormField; 3] = [FormField::Name, FormField::Email, FormField::Message];

    /// Label shown next to the input.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Your Name",
            Self::Email => "Your Email",
            Self::Message => "Your Message",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::Email => write!(f, "email"),
            Self::Message => write!(f, "message"),
        }
    }
}

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was empty after trimming.
    Required(FormField),

    /// A field is shorter than its minimum length.
    TooShort { field: FormField, min: usize },

    /// The provided email address is invalid.
    InvalidEmail(String),
}

impl ValidationError {
    /// The field this error belongs to.
    pub fn field(&self) -> FormField {
        match self {
            Self::Required(field) => *field,
            Self::TooShort { field, .. } => *field,
            Self::InvalidEmail(_) => FormField::Email,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required(FormField::Name) => write!(f, "Name is required"),
            Self::Required(FormField::Email) => write!(f, "Email is required"),
            Self::Required(FormField::Message) => write!(f, "Message is required"),
            Self::TooShort { field, min } => {
                let subject = match field {
                    FormField::Name => "Name",
                    FormField::Email => "Email",
                    FormField::Message => "Message",
                };
                write!(f, "{} must be at least {} characters", subject, min)
            }
            Self::InvalidEmail(_) => write!(f, "Invalid email"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// A human-readable error attached to one form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: FormField,
    pub message: String,
}

impl From<ValidationError> for FieldError {
    fn from(error: ValidationError) -> Self {
        Self {
            field: error.field(),
            message: error.to_string(),
        }
    }
}

/// Per-field errors from a rejected validation, at most one per field, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Record an error, keeping only the first one reported for a field.
    pub fn push(&mut self, error: impl Into<FieldError>) {
        let error = error.into();
        if self.get(error.field).is_none() {
            self.0.push(error);
            self.0.sort_by_key(|e| e.field);
        }
    }

    /// The error message for a field, if it failed.
    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_match_form_copy() {
        assert_eq!(
            ValidationError::Required(FormField::Name).to_string(),
            "Name is required"
        );
        assert_eq!(
            ValidationError::TooShort {
                field: FormField::Message,
                min: 10
            }
            .to_string(),
            "Message must be at least 10 characters"
        );
        assert_eq!(
            ValidationError::InvalidEmail("nope".to_string()).to_string(),
            "Invalid email"
        );
    }

    #[test]
    fn test_field_errors_keep_first_per_field_in_order() {
        let mut errors = FieldErrors::new();
        errors.push(ValidationError::TooShort {
            field: FormField::Message,
            min: 10,
        });
        errors.push(ValidationError::Required(FormField::Name));
        errors.push(ValidationError::TooShort {
            field: FormField::Name,
            min: 2,
        });

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get(FormField::Name), Some("Name is required"));
        assert_eq!(errors.get(FormField::Email), None);

        let fields: Vec<FormField> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec![FormField::Name, FormField::Message]);
    }

    #[test]
    fn test_field_errors_display() {
        let mut errors = FieldErrors::new();
        errors.push(ValidationError::InvalidEmail("x".to_string()));
        assert_eq!(errors.to_string(), "email: Invalid email");
    }
}
