//! Notification adapter backed by tracing
//!
//! Every notification becomes a structured log event. A bounded history is
//! kept so a front end can render recent toasts.

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use rostering_client_ports::outbound::{Notification, NotificationPort, Severity};

/// How many notifications are retained by default
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

pub struct TracingNotifier {
    history: Mutex<VecDeque<Notification>>,
    limit: usize,
}

impl TracingNotifier {
    pub fn new() -> Self {
        Self::with_history_limit(DEFAULT_HISTORY_LIMIT)
    }

    pub fn with_history_limit(limit: usize) -> Self {
        Self {
            history: Mutex::new(VecDeque::with_capacity(limit)),
            limit,
        }
    }

    /// Retained notifications, oldest first
    pub fn history(&self) -> Vec<Notification> {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .cloned()
            .collect()
    }
}

impl Default for TracingNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationPort for TracingNotifier {
    fn show(&self, notification: Notification) {
        match notification.severity {
            Severity::Success | Severity::Info => tracing::info!(
                severity = ?notification.severity,
                title = %notification.title,
                "{}",
                notification.body
            ),
            Severity::Error => tracing::warn!(
                title = %notification.title,
                "{}",
                notification.body
            ),
        }

        if self.limit == 0 {
            return;
        }
        let mut history = self.history.lock().unwrap_or_else(PoisonError::into_inner);
        if history.len() == self.limit {
            history.pop_front();
        }
        history.push_back(notification);
    }
}
