use keyring::Entry;
use tracing::warn;

use super::Storage;

/// Service name used for keychain entries
const SERVICE_NAME: &str = "codecampass";

/// Storage backend that keeps entries in the OS keychain, one keyring
/// entry per key. Appropriate where the bearer token should not sit in a
/// plain file.
pub struct KeychainStorage {
    service: String,
}

impl KeychainStorage {
    pub fn new() -> Self {
        Self {
            service: SERVICE_NAME.to_string(),
        }
    }

    /// Use a custom service name (for side-by-side installs).
    pub fn with_service(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
        }
    }

    fn entry(&self, key: &str) -> Option<Entry> {
        match Entry::new(&self.service, key) {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!(key, error = %e, "Failed to create keyring entry");
                None
            }
        }
    }
}

impl Default for KeychainStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for KeychainStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entry(key)?.get_password().ok()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(entry) = self.entry(key) {
            if let Err(e) = entry.set_password(value) {
                warn!(key, error = %e, "Failed to store entry in keychain");
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(entry) = self.entry(key) {
            match entry.delete_credential() {
                Ok(()) | Err(keyring::Error::NoEntry) => {}
                Err(e) => warn!(key, error = %e, "Failed to delete entry from keychain"),
            }
        }
    }
}
