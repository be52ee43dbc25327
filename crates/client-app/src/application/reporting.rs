//! Global failure reporting
//!
//! Services return transport failures untouched. Whoever drives them (a UI
//! event handler, the CLI) decides whether to surface the failure, and uses
//! this to do it consistently.

use rostering_client_ports::outbound::{NotificationPort, NotifyExt};

use crate::application::ServiceError;

/// Log `error` and show it to the user as "Error {context}".
pub fn report_service_error(notifier: &dyn NotificationPort, context: &str, error: &ServiceError) {
    tracing::error!(context, error = %error, "Operation failed");
    notifier.show_error_message(&format!("Error {context}"), &error.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;
    use rostering_client_ports::outbound::{ApiError, MockNotificationPort, Severity};

    #[test]
    fn shows_an_error_notification_with_context() {
        let mut notifier = MockNotificationPort::new();
        notifier
            .expect_show()
            .withf(|n| {
                n.severity == Severity::Error
                    && n.title == "Error refreshing Spots"
                    && n.body == "HTTP 503: Service Unavailable"
            })
            .times(1)
            .return_const(());

        let error = ServiceError::from(ApiError::HttpError {
            status: 503,
            message: "Service Unavailable".into(),
        });
        report_service_error(&notifier, "refreshing Spots", &error);
    }
}
