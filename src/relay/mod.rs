//! HTTP client for the mail-relay service.
//!
//! The relay accepts a JSON body `{ "name", "email", "message" }` on a single POST
//! endpoint and answers with a status code. Any 2xx status means the message was
//! accepted; the response body is never read on success. Redirects are not followed,
//! so a 3xx answer counts as a rejection.

mod async_wrapper;
pub use async_wrapper::{AsyncRelay, AsyncRelayClient};

use crate::config::Config;
use crate::domain::ContactMessage;
use crate::error::{RelayError, RelayResult};
use crate::metrics::{HttpTimer, Metrics};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Duration;

/// Receipt for a message the relay accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    /// HTTP status returned by the relay
    pub status: u16,

    /// When the relay answered
    pub delivered_at: DateTime<Utc>,
}

/// HTTP client for the mail-relay service.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts through [`AsyncRelayClient`].
#[derive(Clone)]
pub struct RelayClient {
    /// Fixed relay endpoint
    endpoint: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl RelayClient {
    /// Create a new RelayClient from configuration.
    pub fn new(config: &Config) -> Self {
        Self::build(config.relay_endpoint.clone(), config.relay_timeout_secs)
    }

    /// Create a RelayClient for an arbitrary endpoint (useful for testing).
    #[doc(hidden)]
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self::build(endpoint.into(), None)
    }

    fn build(endpoint: String, timeout_secs: Option<u64>) -> Self {
        let mut builder = ureq::AgentBuilder::new().redirects(0);
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Self {
            endpoint,
            agent: Arc::new(builder.build()),
            metrics: Metrics::new(),
        }
    }

    /// Share an existing metrics collector instead of the client's own.
    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// POST one message to the relay.
    ///
    /// # Errors
    ///
    /// - `RelayError::Rejected` for any non-2xx status
    /// - `RelayError::Transport` / `RelayError::Timeout` when no response arrives
    pub fn send(&self, message: &ContactMessage) -> RelayResult<Delivery> {
        let body = serde_json::to_value(message)?;
        let timer = HttpTimer::new(self.metrics.clone());

        tracing::debug!("POST {}", self.endpoint);

        let result = self
            .agent
            .post(&self.endpoint)
            .set("Content-Type", "application/json")
            .send_json(body);

        match result {
            Ok(response) if (200..300).contains(&response.status()) => {
                timer.complete();
                let status = response.status();
                tracing::debug!("POST {} - Success (status: {})", self.endpoint, status);
                Ok(Delivery {
                    status,
                    delivered_at: Utc::now(),
                })
            }
            Ok(response) => {
                timer.complete_with_error();
                let status = response.status();
                let body = response.into_string().unwrap_or_default();
                tracing::debug!("POST {} - Unexpected status {}", self.endpoint, status);
                Err(RelayError::Rejected { status, body })
            }
            Err(e) => {
                timer.complete_with_error();
                Err(Self::map_error(e))
            }
        }
    }

    /// Map a ureq error to a RelayError.
    fn map_error(error: ureq::Error) -> RelayError {
        match error {
            ureq::Error::Status(status, response) => RelayError::Rejected {
                status,
                body: response.into_string().unwrap_or_default(),
            },
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    RelayError::Transport("Connection failed".to_string())
                } else if transport.kind() == ureq::ErrorKind::Io && Self::is_timeout(&transport)
                {
                    RelayError::Timeout
                } else {
                    RelayError::Transport(transport.to_string())
                }
            }
        }
    }

    fn is_timeout(transport: &ureq::Transport) -> bool {
        std::error::Error::source(transport)
            .and_then(|source| source.downcast_ref::<std::io::Error>())
            .map(|io| {
                matches!(
                    io.kind(),
                    std::io::ErrorKind::TimedOut | std::io::ErrorKind::WouldBlock
                )
            })
            .unwrap_or(false)
    }
}
