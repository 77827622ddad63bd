//! Durable key-value storage for the session.
//!
//! The session store persists exactly two entries - the bearer token and
//! the serialized user profile - under fixed keys. Storage lives behind
//! the `Storage` trait so the session store can be tested without a real
//! backend.
//!
//! Backends:
//! - `FileStorage`: a JSON file in the per-user config directory
//! - `KeychainStorage`: entries in the OS keychain via keyring
//! - `MemoryStorage`: an in-memory map for tests and ephemeral sessions
//!
//! Backend failures are logged and otherwise swallowed: a failing write
//! behaves like a silent no-op rather than surfacing to callers.

pub mod file;
pub mod keychain;
pub mod memory;

pub use file::FileStorage;
pub use keychain::KeychainStorage;
pub use memory::MemoryStorage;

/// Key under which the bearer token is persisted.
pub const TOKEN_KEY: &str = "token";

/// Key under which the serialized user profile is persisted.
pub const USER_KEY: &str = "user";

/// Synchronous key-value storage. Implementations must not block on
/// network I/O; reads happen on the request path.
pub trait Storage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}
