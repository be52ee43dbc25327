pub mod api;
pub mod error;
pub mod ports;
pub mod reporting;
pub mod services;
pub mod store;

pub use api::Api;
pub use error::ServiceError;
pub use reporting::report_service_error;
