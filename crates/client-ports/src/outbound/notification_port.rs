//! Notification Port - user-facing toast messages
//!
//! Notifications are fire-and-forget: showing one never fails and never
//! blocks the caller.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Info,
    Error,
}

/// A titled message for the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub severity: Severity,
    pub title: String,
    pub body: String,
}

impl Notification {
    pub fn new(severity: Severity, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            severity,
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn success(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(Severity::Success, title, body)
    }

    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(Severity::Info, title, body)
    }

    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(Severity::Error, title, body)
    }
}

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait NotificationPort: Send + Sync {
    fn show(&self, notification: Notification);
}

/// Convenience helpers available on every notification port, trait objects included
pub trait NotifyExt {
    fn show_success_message(&self, title: &str, body: &str);
    fn show_info_message(&self, title: &str, body: &str);
    fn show_error_message(&self, title: &str, body: &str);
}

impl<N: NotificationPort + ?Sized> NotifyExt for N {
    fn show_success_message(&self, title: &str, body: &str) {
        self.show(Notification::success(title, body));
    }

    fn show_info_message(&self, title: &str, body: &str) {
        self.show(Notification::info(title, body));
    }

    fn show_error_message(&self, title: &str, body: &str) {
        self.show(Notification::error(title, body));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn helpers_forward_severity_through_trait_objects() {
        let mut mock = MockNotificationPort::new();
        mock.expect_show()
            .withf(|n| n.severity == Severity::Error && n.title == "Oops" && n.body == "Broken")
            .times(1)
            .return_const(());

        let port: Arc<dyn NotificationPort> = Arc::new(mock);
        port.show_error_message("Oops", "Broken");
    }
}
