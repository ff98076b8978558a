//! The persisted key-value store port and its native implementations.
//!
//! Browsers provide `localStorage`; the UI crate adapts it to
//! [`KeyValueStore`]. [`MemoryStore`] backs tests and hosts without durable
//! storage, and [`JsonFileStore`] keeps the same map in a file for desktop
//! and mobile builds.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::error::Result;

/// String-keyed, string-valued storage.
///
/// Methods take `&self`: hosts hand out a shared handle and every handler
/// runs to completion before the next one starts.
pub trait KeyValueStore {
    /// The stored value, or `None` when the key is absent.
    fn get(&self, key: &str) -> Option<String>;

    /// Overwrite the value at `key`.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    fn remove(&self, key: &str) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Rc<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

/// In-memory store. Contents are lost when it is dropped.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: RefCell<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently held.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(feature = "std")]
pub use file::JsonFileStore;

#[cfg(feature = "std")]
mod file {
    use std::cell::RefCell;
    use std::collections::BTreeMap;
    use std::path::{Path, PathBuf};

    use super::KeyValueStore;
    use crate::error::Result;

    /// A key-value store kept as one JSON object in a file.
    ///
    /// The whole map is rewritten on every `set`/`remove`.
    #[derive(Debug)]
    pub struct JsonFileStore {
        path: PathBuf,
        entries: RefCell<BTreeMap<String, String>>,
    }

    impl JsonFileStore {
        /// Default location: `<data dir>/atelier/storage.json`.
        pub fn default_path() -> PathBuf {
            let base = dirs::data_dir().unwrap_or_else(std::env::temp_dir);
            base.join("atelier").join("storage.json")
        }

        /// Open the store at `path`. A missing file starts empty; an
        /// unreadable JSON document also starts empty and is replaced on the
        /// next write.
        pub fn open(path: impl AsRef<Path>) -> Result<Self> {
            let path = path.as_ref().to_path_buf();
            let entries = match std::fs::read_to_string(&path) {
                Ok(data) => serde_json::from_str(&data).unwrap_or_else(|e| {
                    tracing::warn!("Discarding unreadable store {}: {}", path.display(), e);
                    BTreeMap::new()
                }),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
                Err(e) => return Err(e.into()),
            };
            tracing::debug!("Opened store {} ({} keys)", path.display(), entries.len());
            Ok(Self {
                path,
                entries: RefCell::new(entries),
            })
        }

        pub fn path(&self) -> &Path {
            &self.path
        }

        fn flush(&self) -> Result<()> {
            if let Some(parent) = self.path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let data = serde_json::to_string_pretty(&*self.entries.borrow())?;
            std::fs::write(&self.path, data)?;
            Ok(())
        }
    }

    impl KeyValueStore for JsonFileStore {
        fn get(&self, key: &str) -> Option<String> {
            self.entries.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) -> Result<()> {
            self.entries
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            self.flush()
        }

        fn remove(&self, key: &str) -> Result<()> {
            self.entries.borrow_mut().remove(key);
            self.flush()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_overwrites() {
        let store = MemoryStore::new();
        assert_eq!(store.get("k"), None);
        store.set("k", "one").unwrap();
        store.set("k", "two").unwrap();
        assert_eq!(store.get("k").as_deref(), Some("two"));
        assert_eq!(store.len(), 1);
        store.remove("k").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn shared_handles_see_the_same_data() {
        let store = Rc::new(MemoryStore::new());
        let other = Rc::clone(&store);
        store.set("aa_role", "admin").unwrap();
        assert_eq!(other.get("aa_role").as_deref(), Some("admin"));
    }

    #[cfg(feature = "std")]
    #[test]
    fn file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.json");

        let store = JsonFileStore::open(&path).unwrap();
        store.set("aa_theme", "light").unwrap();
        drop(store);

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.get("aa_theme").as_deref(), Some("light"));
        reopened.remove("aa_theme").unwrap();
        assert_eq!(JsonFileStore::open(&path).unwrap().get("aa_theme"), None);
    }

    #[cfg(feature = "std")]
    #[test]
    fn file_store_starts_empty_on_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, "not json").unwrap();

        let store = JsonFileStore::open(&path).unwrap();
        assert_eq!(store.get("anything"), None);
        store.set("k", "v").unwrap();
        assert_eq!(JsonFileStore::open(&path).unwrap().get("k").as_deref(), Some("v"));
    }
}
