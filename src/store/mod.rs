//! Snapshot persistence.
//!
//! The store is an opaque string key-value map. [`SectionRepository`] layers
//! the typed section/preset lifecycle on top of it.

mod dir;
mod memory;
mod repository;

pub use dir::DirStore;
pub use memory::MemoryStore;
pub use repository::{ACTIVE_PRESET_KEY, SectionRepository, preset_key, section_key};

use crate::error::Result;

/// Key-value persistence for serialized snapshots.
pub trait SnapshotStore {
    /// Read the value stored under `key`, `None` if nothing is stored.
    ///
    /// # Errors
    /// Returns an error if the backing storage cannot be read.
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    /// Returns an error if the backing storage cannot be written.
    fn save(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    /// Returns an error if the backing storage cannot be modified.
    fn remove(&self, key: &str) -> Result<()>;
}

impl<T: SnapshotStore + ?Sized> SnapshotStore for &T {
    fn load(&self, key: &str) -> Result<Option<String>> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        (**self).save(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}
