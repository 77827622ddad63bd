//! Client library for the CodeCampass project-management API.
//!
//! The crate covers the non-visual half of the client: a configured
//! HTTP transport with typed endpoint methods, and the session store
//! that tracks who is logged in across restarts. UI layers (TUI, GUI,
//! tests) compose on top.
//!
//! Typical wiring:
//!
//! ```no_run
//! use std::sync::Arc;
//! use codecampass_client::{ApiClient, Config, SessionStore};
//! use codecampass_client::api::NoopNavigator;
//! use codecampass_client::storage::FileStorage;
//!
//! # fn main() -> anyhow::Result<()> {
//! let storage = Arc::new(FileStorage::open_default()?);
//! let session = Arc::new(SessionStore::new(storage));
//! session.init();
//!
//! let client = ApiClient::new(&Config::from_env(), session, Arc::new(NoopNavigator))?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod auth;
pub mod config;
pub mod models;
pub mod storage;

pub use api::{ApiClient, ApiError};
pub use auth::SessionStore;
pub use config::Config;
