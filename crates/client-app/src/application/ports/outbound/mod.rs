//! Ports owned by the application layer
//!
//! The store contract lives here rather than in the ports crate because it is
//! expressed in terms of the application's own state and action types.

pub mod store_port;

pub use store_port::StorePort;
