//! Rostering client application layer.
//!
//! Holds the client-side store (state, actions, reducer, selectors) and the
//! services that synchronize it with the REST backend.

pub mod application;
