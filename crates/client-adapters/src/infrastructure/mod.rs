//! Infrastructure layer - External adapters

pub mod http_client;
pub mod notifications;
pub mod store;

pub use http_client::HttpApiClient;
pub use notifications::TracingNotifier;
pub use store::InMemoryStore;
