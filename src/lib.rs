//! Portfolio Contact - the contact-form workflow of a personal portfolio site.
//!
//! A visitor's name, email, and message are validated locally, then relayed as JSON
//! to an external mail service. The outcome is reported back as a notice, and the
//! form is cleared only when the relay accepted the message.
//!
//! # Architecture
//!
//! - **domain**: Contact message, field rules, and `validate`
//! - **relay**: HTTP client for the mail-relay service
//! - **submission**: `ContactSubmission` (validate + submit, logging, metrics)
//! - **form**: Form state machine with the in-flight submission guard
//! - **profile**: Contact channels shown beside the form
//! - **config**: Configuration from environment variables
//! - **error**: Custom error types
//! - **metrics**: Submission and HTTP counters

pub mod config;
pub mod domain;
pub mod error;
pub mod form;
pub mod metrics;
pub mod profile;
pub mod relay;
pub mod submission;

pub use config::Config;
pub use domain::{validate, ContactInput, ContactMessage, FieldErrors, FormField};
pub use error::{ConfigError, FormError, RelayError};
pub use form::{ContactForm, FormListener, FormState, Notice};
pub use metrics::{Metrics, MetricsSummary};
pub use profile::ContactChannel;
pub use relay::{AsyncRelay, AsyncRelayClient, Delivery, RelayClient};
pub use submission::{ContactSubmission, SubmissionOutcome};
