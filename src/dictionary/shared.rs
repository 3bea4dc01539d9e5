//! Dictionary shared between concurrent classification runs

use std::path::Path;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use super::store::DictionaryStore;
use crate::error::Result;

/// Single-writer/many-readers holder for the active [`DictionaryStore`].
///
/// Readers take a cheap `Arc` clone and classify without holding any lock.
/// Reloading decodes the new store first and takes the write guard only to
/// swap the pointer, so a slow disk never blocks classification. Load and
/// save operations are serialized against each other.
#[derive(Debug)]
pub struct SharedDictionary {
    current: RwLock<Arc<DictionaryStore>>,
    persistence: Mutex<()>,
}

impl SharedDictionary {
    pub fn new(store: DictionaryStore) -> Self {
        Self {
            current: RwLock::new(Arc::new(store)),
            persistence: Mutex::new(()),
        }
    }

    /// The store in effect right now. Later replacements do not affect the
    /// returned handle.
    pub fn current(&self) -> Arc<DictionaryStore> {
        Arc::clone(&self.current.read())
    }

    /// Installs `store` and returns the one it replaced
    pub fn replace(&self, store: DictionaryStore) -> Arc<DictionaryStore> {
        let _persistence = self.persistence.lock();
        self.swap(store)
    }

    /// Decodes the snapshot at `path` and installs it. On failure the active
    /// store is left untouched.
    pub fn reload_from<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let _persistence = self.persistence.lock();
        let store = DictionaryStore::load_from(path)?;
        self.swap(store);
        Ok(())
    }

    /// Writes the active store to `path`
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let _persistence = self.persistence.lock();
        let store = self.current();
        store.save_to(path)
    }

    fn swap(&self, store: DictionaryStore) -> Arc<DictionaryStore> {
        let mut current = self.current.write();
        std::mem::replace(&mut *current, Arc::new(store))
    }
}

impl Default for SharedDictionary {
    fn default() -> Self {
        Self::new(DictionaryStore::builtin())
    }
}
