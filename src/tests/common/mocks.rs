use std::cell::RefCell;
use std::rc::Rc;
use crate::error::ThemeError;
use crate::utils::{ PreferenceStorage, Theme, ThemeRoot };

/// Storage that refuses every call, like a browser with storage disabled.
pub struct UnavailableStorage;

impl PreferenceStorage for UnavailableStorage {
    fn read(&self, _key: &str) -> Result<Option<String>, ThemeError> {
        Err(ThemeError::StorageUnavailable("disabled".to_string()))
    }

    fn write(&self, _key: &str, _value: &str) -> Result<(), ThemeError> {
        Err(ThemeError::StorageUnavailable("disabled".to_string()))
    }
}

/// Reads fine but rejects writes, like a full quota.
pub struct QuotaExceededStorage {
    pub stored: Option<String>,
}

impl PreferenceStorage for QuotaExceededStorage {
    fn read(&self, _key: &str) -> Result<Option<String>, ThemeError> {
        Ok(self.stored.clone())
    }

    fn write(&self, _key: &str, _value: &str) -> Result<(), ThemeError> {
        Err(ThemeError::Write("QuotaExceededError".to_string()))
    }
}

/// Records every theme applied to it.
#[derive(Clone, Default)]
pub struct RecordingRoot {
    pub applied: Rc<RefCell<Vec<Theme>>>,
}

impl RecordingRoot {
    pub fn history(&self) -> Vec<Theme> {
        self.applied.borrow().clone()
    }
}

impl ThemeRoot for RecordingRoot {
    fn apply(&self, theme: Theme) -> Result<(), ThemeError> {
        self.applied.borrow_mut().push(theme);
        Ok(())
    }
}

/// A root whose document is gone.
pub struct DetachedRoot;

impl ThemeRoot for DetachedRoot {
    fn apply(&self, _theme: Theme) -> Result<(), ThemeError> {
        Err(ThemeError::Document("no document element".to_string()))
    }
}
