use crate::shared::infrastructure::notifier::Notifier;
use std::sync::{Mutex, PoisonError};

/// Records every message so callers can inspect what the user would have seen.
#[derive(Default)]
pub struct InMemoryNotifier {
    messages: Mutex<Vec<String>>,
}

impl InMemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Notifier for InMemoryNotifier {
    fn notify_error(&self, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
    }
}
