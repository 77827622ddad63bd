//! Session management.
//!
//! `SessionStore` is the single source of truth for "who is logged in",
//! backed by durable storage so a restart survives. The token and user
//! profile are always set and cleared together.

pub mod store;

pub use store::SessionStore;
