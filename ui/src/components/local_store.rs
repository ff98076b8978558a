use atelier_common::storage::{KeyValueStore, MemoryStore};
use atelier_common::Result;

/// Whatever storage the host offers.
///
/// Browsers get `localStorage`; mobile builds keep a JSON file; anything
/// else (or a browser with storage disabled) falls back to memory.
pub enum HostStore {
    #[cfg(target_family = "wasm")]
    Local(wasm::LocalStorage),
    #[cfg(all(feature = "mobile", not(target_family = "wasm")))]
    File(atelier_common::storage::JsonFileStore),
    Memory(MemoryStore),
}

impl HostStore {
    pub fn open() -> Self {
        #[cfg(target_family = "wasm")]
        {
            if let Some(local) = wasm::LocalStorage::open() {
                return HostStore::Local(local);
            }
            tracing::warn!("localStorage unavailable, changes will not survive a reload");
        }
        #[cfg(all(feature = "mobile", not(target_family = "wasm")))]
        {
            let path = atelier_common::storage::JsonFileStore::default_path();
            match atelier_common::storage::JsonFileStore::open(&path) {
                Ok(store) => return HostStore::File(store),
                Err(e) => tracing::warn!("Could not open {}: {}", path.display(), e),
            }
        }
        HostStore::Memory(MemoryStore::new())
    }

    fn inner(&self) -> &dyn KeyValueStore {
        match self {
            #[cfg(target_family = "wasm")]
            HostStore::Local(store) => store,
            #[cfg(all(feature = "mobile", not(target_family = "wasm")))]
            HostStore::File(store) => store,
            HostStore::Memory(store) => store,
        }
    }
}

impl KeyValueStore for HostStore {
    fn get(&self, key: &str) -> Option<String> {
        self.inner().get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.inner().set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.inner().remove(key)
    }
}

#[cfg(target_family = "wasm")]
pub mod wasm {
    use atelier_common::storage::KeyValueStore;
    use atelier_common::{Result, StudioError};

    /// `window.localStorage`.
    pub struct LocalStorage {
        storage: web_sys::Storage,
    }

    impl LocalStorage {
        pub fn open() -> Option<Self> {
            let storage = web_sys::window()?.local_storage().ok()??;
            Some(Self { storage })
        }
    }

    impl KeyValueStore for LocalStorage {
        fn get(&self, key: &str) -> Option<String> {
            self.storage.get_item(key).ok().flatten()
        }

        fn set(&self, key: &str, value: &str) -> Result<()> {
            self.storage
                .set_item(key, value)
                .map_err(|e| StudioError::Storage(format!("{:?}", e)))
        }

        fn remove(&self, key: &str) -> Result<()> {
            self.storage
                .remove_item(key)
                .map_err(|e| StudioError::Storage(format!("{:?}", e)))
        }
    }
}
