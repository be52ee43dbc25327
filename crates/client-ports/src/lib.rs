//! Client port definitions and shared configuration.

pub mod config;
pub mod outbound;

pub use config::ClientConfig;
