//! Contact submission service.
//!
//! Validates visitor input and hands accepted messages to the mail relay. Every
//! relay failure is logged here and turned into a [`SubmissionOutcome::Failed`], so no
//! error travels past this layer.

use crate::domain::{self, ContactInput, ContactMessage, ValidationResult};
use crate::error::RelayError;
use crate::metrics::Metrics;
use crate::relay::{AsyncRelay, Delivery};
use std::sync::Arc;
use tracing::{error, info};

/// How a relay attempt ended.
#[derive(Debug)]
pub enum SubmissionOutcome {
    /// The relay accepted the message
    Sent(Delivery),

    /// The relay could not be reached or refused the message
    Failed(RelayError),
}

impl SubmissionOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, Self::Sent(_))
    }
}

/// Validates and relays contact messages.
#[derive(Clone)]
pub struct ContactSubmission {
    relay: Arc<dyn AsyncRelay>,
    metrics: Metrics,
}

impl ContactSubmission {
    pub fn new(relay: Arc<dyn AsyncRelay>) -> Self {
        Self {
            relay,
            metrics: Metrics::new(),
        }
    }

    /// Share an existing metrics collector.
    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Run the field rules against raw input. Never cached.
    pub fn validate(&self, input: &ContactInput) -> ValidationResult {
        let result = domain::validate(input);
        if let Err(errors) = &result {
            self.metrics.record_validation_rejection();
            info!("Contact form rejected: {}", errors);
        }
        result
    }

    /// Send a validated message with a single relay request.
    ///
    /// No retry is attempted and no idempotency key is attached.
    pub async fn submit(&self, message: &ContactMessage) -> SubmissionOutcome {
        self.metrics.record_submission();

        match self.relay.send(message).await {
            Ok(delivery) => {
                self.metrics.record_sent();
                info!(
                    "Message from @{} relayed (status {}) at {}",
                    message.email().domain(),
                    delivery.status,
                    delivery.delivered_at.to_rfc3339()
                );
                SubmissionOutcome::Sent(delivery)
            }
            Err(e) => {
                self.metrics.record_failed();
                error!(
                    "Failed to relay message from @{}: {}",
                    message.email().domain(),
                    e
                );
                SubmissionOutcome::Failed(e)
            }
        }
    }
}
