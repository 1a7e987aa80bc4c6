//! Domain value objects and types.
//!
//! This module contains the contact message, its fields, and the validation rules
//! that run before anything is sent. Invalid input never becomes a [`ContactMessage`].

pub mod email;
pub mod errors;
pub mod message;

pub use email::EmailAddress;
pub use errors::{FieldError, FieldErrors, FormField, ValidationError};
pub use message::{validate, ContactInput, ContactMessage, ValidationResult};
