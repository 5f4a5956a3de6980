//! Publish/subscribe channel for formatted log lines
//!
//! Publishers may live on any thread. Every subscriber owns an `mpsc`
//! receiver and drains it on its own thread, which keeps delivery ordered and
//! moves the hand-off to the consumer (the GUI drains it once per frame).

use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
pub struct LogBroadcaster {
    subscribers: Arc<Mutex<Vec<Sender<String>>>>,
}

impl LogBroadcaster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new subscriber and return its receiving end
    pub fn subscribe(&self) -> Receiver<String> {
        let (tx, rx) = channel();
        if let Ok(mut subscribers) = self.subscribers.lock() {
            subscribers.push(tx);
        }
        rx
    }

    /// Send a line to every live subscriber. Subscribers whose receiver was
    /// dropped are removed.
    pub fn publish(&self, line: &str) {
        let Ok(mut subscribers) = self.subscribers.lock() else {
            return;
        };
        subscribers.retain(|tx| tx.send(line.to_string()).is_ok());
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().map(|s| s.len()).unwrap_or(0)
    }
}

impl std::fmt::Debug for LogBroadcaster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogBroadcaster")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
