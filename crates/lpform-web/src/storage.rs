use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::error::UiError;

/// Whole-value key/value storage, shaped after the browser's `localStorage`
pub trait Storage {
    fn get_item(&self, key: &str) -> Result<Option<String>, UiError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), UiError>;
    fn remove_item(&self, key: &str) -> Result<(), UiError>;
}

/// In-memory storage that counts writes
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
    writes: Cell<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `set_item` calls so far
    pub fn writes(&self) -> usize {
        self.writes.get()
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    /// Place a raw value without counting it as a write
    pub fn seed(&self, key: &str, value: &str) {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, UiError> {
        Ok(self.get(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), UiError> {
        self.writes.set(self.writes.get() + 1);
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), UiError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}
