use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use crate::error::ThemeError;

/// Device-local key/value storage for user preferences.
pub trait PreferenceStorage {
    fn read(&self, key: &str) -> Result<Option<String>, ThemeError>;
    fn write(&self, key: &str, value: &str) -> Result<(), ThemeError>;
}

/// In-memory storage. Clones share the same entries, so a preference written
/// through one handle is visible through the others.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage.entries.borrow_mut().insert(key.to_string(), value.to_string());
        storage
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl PreferenceStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, ThemeError> {
        Ok(self.get(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// `window.localStorage`. Holds `None` when the browser refuses access
/// (private mode, disabled storage); every call then reports
/// `StorageUnavailable`.
#[cfg(target_arch = "wasm32")]
pub struct BrowserStorage {
    inner: Option<web_sys::Storage>,
}

#[cfg(target_arch = "wasm32")]
impl BrowserStorage {
    pub fn open() -> Self {
        let inner = web_sys::window().and_then(|window| {
            match window.local_storage() {
                Ok(storage) => storage,
                Err(e) => {
                    log::warn!("localStorage is not accessible: {:?}", e);
                    None
                }
            }
        });
        Self { inner }
    }

    fn storage(&self) -> Result<&web_sys::Storage, ThemeError> {
        self.inner
            .as_ref()
            .ok_or_else(|| ThemeError::StorageUnavailable("localStorage is not available".to_string()))
    }
}

#[cfg(target_arch = "wasm32")]
impl PreferenceStorage for BrowserStorage {
    fn read(&self, key: &str) -> Result<Option<String>, ThemeError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| ThemeError::Read(format!("{:?}", e)))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| ThemeError::Write(format!("{:?}", e)))
    }
}

/// Storage backend for the current target.
#[cfg(target_arch = "wasm32")]
pub fn preference_storage() -> Box<dyn PreferenceStorage> {
    Box::new(BrowserStorage::open())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn preference_storage() -> Box<dyn PreferenceStorage> {
    log::info!("No device storage on this target, theme preference lasts for this session");
    Box::new(MemoryStorage::new())
}
