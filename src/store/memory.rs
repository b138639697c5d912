use std::collections::HashMap;
use std::sync::Mutex;

use crate::app::{Result, WartaError};
use crate::store::KeyValueStore;

/// Process-local slots. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let slots = self
            .slots
            .lock()
            .map_err(|e| WartaError::Other(e.to_string()))?;
        Ok(slots.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut slots = self
            .slots
            .lock()
            .map_err(|e| WartaError::Other(e.to_string()))?;
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
