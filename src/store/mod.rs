//! Persistence capability: named JSON blobs.
//!
//! The ledger, the project list and the owner name each live in their own
//! blob. Absent or malformed blobs fall back to defaults.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::errors::AppResult;
use serde::Serialize;
use serde::de::DeserializeOwned;

pub const ENTRIES_KEY: &str = "entries";
pub const PROJECTS_KEY: &str = "projects";
pub const OWNER_KEY: &str = "owner";

/// Storage medium for named blobs.
pub trait Store {
    /// Raw content of `key`, `None` when it was never written.
    fn read(&self, key: &str) -> AppResult<Option<String>>;

    fn write(&self, key: &str, blob: &str) -> AppResult<()>;
}

/// Decode `key`, or `default()` when it is absent, unreadable or malformed.
pub fn load_or_else<T, F>(store: &dyn Store, key: &str, default: F) -> T
where
    T: DeserializeOwned,
    F: FnOnce() -> T,
{
    let raw = match store.read(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            tracing::debug!(key, "blob not found, using default");
            return default();
        }
        Err(e) => {
            tracing::warn!(key, error = %e, "failed to read blob, using default");
            return default();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(key, error = %e, "malformed blob, using default");
            default()
        }
    }
}

pub fn save<T: Serialize + ?Sized>(store: &dyn Store, key: &str, value: &T) -> AppResult<()> {
    let blob = serde_json::to_string_pretty(value)?;
    store.write(key, &blob)?;
    tracing::debug!(key, bytes = blob.len(), "blob saved");
    Ok(())
}
