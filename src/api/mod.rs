//! REST API client module for the CodeCampass server.
//!
//! This module provides the `ApiClient` with a typed method per
//! endpoint: authentication, project CRUD, repository import, project
//! question-answering, and OpenAI key management.
//!
//! The API uses bearer token authentication; the token is read from
//! durable storage and attached to every outgoing request. An HTTP 401
//! on any endpoint tears down the session and redirects to the login
//! screen.

pub mod client;
pub mod error;

pub use client::{ApiClient, Navigator, NoopNavigator, LOGIN_PATH};
pub use error::ApiError;
