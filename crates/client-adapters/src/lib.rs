//! Rostering client adapters.

pub mod infrastructure;
