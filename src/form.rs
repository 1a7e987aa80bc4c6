//! Contact form state machine.
//!
//! The form owns the three field values and moves through
//! `Idle -> Validating -> (Invalid | Submitting) -> (Sent | Failed)`.
//! `Invalid`, `Failed` and `Sent` fall back to `Idle` on the next edit.
//! While `Submitting`, a second submission is refused.

use crate::domain::{ContactInput, ContactMessage, FieldErrors, FormField};
use crate::error::{FormError, FormResult};
use crate::submission::{ContactSubmission, SubmissionOutcome};
use std::fmt;
use std::sync::Arc;

/// Where the form is in its submission lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Validating,
    Invalid(FieldErrors),
    Submitting,
    Sent,
    Failed,
}

/// Alert shown to the visitor after a relay attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Sent,
    RetryLater,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sent => write!(f, "Message sent successfully!"),
            Self::RetryLater => write!(f, "Failed to send message, please try again later."),
        }
    }
}

/// Receives the form's user-facing side effects.
pub trait FormListener: Send + Sync {
    /// Validation failed; show each message next to its field.
    fn on_field_errors(&self, _errors: &FieldErrors) {}

    /// A relay attempt finished.
    fn on_notice(&self, _notice: Notice) {}

    /// The fields were cleared after a successful send.
    fn on_cleared(&self) {}
}

/// The contact form: field values, state, and listeners.
pub struct ContactForm {
    input: ContactInput,
    state: FormState,
    listeners: Vec<Arc<dyn FormListener>>,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            input: ContactInput::default(),
            state: FormState::Idle,
            listeners: Vec::new(),
        }
    }

    pub fn add_listener(&mut self, listener: Arc<dyn FormListener>) {
        self.listeners.push(listener);
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn input(&self) -> &ContactInput {
        &self.input
    }

    pub fn value(&self, field: FormField) -> &str {
        self.input.get(field)
    }

    /// Submission is disabled while a request is outstanding.
    pub fn can_submit(&self) -> bool {
        self.state != FormState::Submitting
    }

    /// Record a user edit.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.input.set(field, value);
        if matches!(
            self.state,
            FormState::Invalid(_) | FormState::Failed | FormState::Sent
        ) {
            self.state = FormState::Idle;
        }
    }

    /// Validate the current fields and, if they pass, enter `Submitting`.
    ///
    /// # Errors
    ///
    /// - `FormError::SubmissionInFlight` if a request is already outstanding
    /// - `FormError::Invalid` with the per-field errors; listeners are told as well
    pub fn begin_submit(&mut self, submission: &ContactSubmission) -> FormResult<ContactMessage> {
        if !self.can_submit() {
            return Err(FormError::SubmissionInFlight);
        }

        self.state = FormState::Validating;
        match submission.validate(&self.input) {
            Ok(message) => {
                self.state = FormState::Submitting;
                Ok(message)
            }
            Err(errors) => {
                for listener in &self.listeners {
                    listener.on_field_errors(&errors);
                }
                self.state = FormState::Invalid(errors.clone());
                Err(FormError::Invalid(errors))
            }
        }
    }

    /// Resolve the outstanding submission.
    ///
    /// On `Sent` the fields are cleared once; on `Failed` they are left for a retry.
    pub fn finish_submit(&mut self, outcome: &SubmissionOutcome) -> FormResult<()> {
        if self.state != FormState::Submitting {
            return Err(FormError::NotSubmitting);
        }

        let notice = match outcome {
            SubmissionOutcome::Sent(_) => {
                self.state = FormState::Sent;
                self.input = ContactInput::default();
                for listener in &self.listeners {
                    listener.on_cleared();
                }
                Notice::Sent
            }
            SubmissionOutcome::Failed(_) => {
                self.state = FormState::Failed;
                Notice::RetryLater
            }
        };

        for listener in &self.listeners {
            listener.on_notice(notice);
        }
        Ok(())
    }

    /// Validate, relay, and resolve in one step.
    pub async fn submit(
        &mut self,
        submission: &ContactSubmission,
    ) -> FormResult<SubmissionOutcome> {
        let message = self.begin_submit(submission)?;
        let outcome = submission.submit(&message).await;
        self.finish_submit(&outcome)?;
        Ok(outcome)
    }
}
