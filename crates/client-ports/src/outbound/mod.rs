//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! allowing application services to talk to the REST backend and the user
//! without depending on concrete implementations.

pub mod api_port;
pub mod notification_port;
pub mod raw_api_port;

pub use api_port::{ApiError, ApiPort};
pub use notification_port::{Notification, NotificationPort, NotifyExt, Severity};
pub use raw_api_port::RawApiPort;

#[cfg(any(test, feature = "testing"))]
pub use notification_port::MockNotificationPort;
#[cfg(any(test, feature = "testing"))]
pub use raw_api_port::MockRawApiPort;
