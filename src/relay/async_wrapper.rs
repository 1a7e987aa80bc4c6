//! Async wrapper around the synchronous RelayClient.
//!
//! This module provides an async interface to the synchronous RelayClient by using
//! `tokio::task::spawn_blocking` to run the HTTP call on a dedicated thread pool,
//! preventing blocking of the async runtime.

use crate::domain::ContactMessage;
use crate::error::{RelayError, RelayResult};
use crate::relay::{Delivery, RelayClient};
use async_trait::async_trait;
use std::sync::Arc;

/// Async interface to a mail-relay service.
///
/// The submission service only depends on this trait, so tests can swap in
/// an in-memory relay.
#[async_trait]
pub trait AsyncRelay: Send + Sync {
    /// Deliver one message. A single request, never retried.
    async fn send(&self, message: &ContactMessage) -> RelayResult<Delivery>;
}

/// Async wrapper around synchronous RelayClient.
#[derive(Clone)]
pub struct AsyncRelayClient {
    client: Arc<RelayClient>,
}

impl AsyncRelayClient {
    pub fn new(client: RelayClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// The wrapped synchronous client.
    pub fn inner(&self) -> &RelayClient {
        &self.client
    }
}

#[async_trait]
impl AsyncRelay for AsyncRelayClient {
    async fn send(&self, message: &ContactMessage) -> RelayResult<Delivery> {
        let client = self.client.clone();
        let message = message.clone();

        tokio::task::spawn_blocking(move || client.send(&message))
            .await
            .map_err(|e| RelayError::Transport(format!("Task join error: {}", e)))?
    }
}
