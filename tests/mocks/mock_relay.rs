use async_trait::async_trait;
use chrono::Utc;
use portfolio_contact::error::{RelayError, RelayResult};
use portfolio_contact::relay::{AsyncRelay, Delivery};
use portfolio_contact::ContactMessage;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Scripted response for one relay call.
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub enum Scripted {
    Status(u16),
    NetworkError,
    Timeout,
}

/// Mock relay for testing.
///
/// Answers each call with the next scripted response (default: HTTP 200) and
/// records every message it was asked to deliver.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockRelay {
    script: Arc<Mutex<VecDeque<Scripted>>>,
    received: Arc<Mutex<Vec<ContactMessage>>>,
}

#[allow(dead_code)]
impl MockRelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the responses for the next calls, in order.
    pub fn script(&self, responses: impl IntoIterator<Item = Scripted>) {
        self.script.lock().unwrap().extend(responses);
    }

    /// Messages received so far.
    pub fn received(&self) -> Vec<ContactMessage> {
        self.received.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.received.lock().unwrap().len()
    }
}

#[async_trait]
impl AsyncRelay for MockRelay {
    async fn send(&self, message: &ContactMessage) -> RelayResult<Delivery> {
        self.received.lock().unwrap().push(message.clone());

        let next = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Scripted::Status(200));

        match next {
            Scripted::Status(status) if (200..300).contains(&status) => Ok(Delivery {
                status,
                delivered_at: Utc::now(),
            }),
            Scripted::Status(status) => Err(RelayError::Rejected {
                status,
                body: String::new(),
            }),
            Scripted::NetworkError => Err(RelayError::Transport("Connection failed".to_string())),
            Scripted::Timeout => Err(RelayError::Timeout),
        }
    }
}
