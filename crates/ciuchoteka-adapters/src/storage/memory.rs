//! In-memory storage medium for testing.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use ciuchoteka_core::{
    application::{ApplicationError, ports::StorageMedium},
    error::CiuchotekaResult,
};

use super::entry_size;

/// Thread-safe in-memory medium. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryMedium {
    inner: Arc<RwLock<HashMap<String, String>>>,
    quota: Option<u64>,
}

impl MemoryMedium {
    /// Create an empty, unbounded medium.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty medium that rejects writes past `quota` bytes.
    pub fn with_quota(quota: u64) -> Self {
        Self {
            quota: Some(quota),
            ..Self::default()
        }
    }

    /// Read a raw entry (testing helper).
    pub fn raw(&self, key: &str) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.get(key).cloned()
    }

    /// Put a raw entry, bypassing the quota (testing helper).
    pub fn insert_raw(&self, key: &str, value: &str) {
        if let Ok(mut inner) = self.inner.write() {
            inner.insert(key.to_string(), value.to_string());
        }
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl StorageMedium for MemoryMedium {
    fn get(&self, key: &str) -> CiuchotekaResult<Option<String>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(inner.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> CiuchotekaResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        if let Some(quota) = self.quota {
            let others: u64 = inner
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| entry_size(k, v.len()))
                .sum();
            let needed = others + entry_size(key, value.len());
            if needed > quota {
                return Err(ApplicationError::StorageWrite {
                    key: key.to_string(),
                    reason: format!("quota exceeded ({needed} of {quota} bytes)"),
                }
                .into());
            }
        }

        inner.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> CiuchotekaResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.remove(key);
        Ok(())
    }

    fn used_bytes(&self) -> CiuchotekaResult<u64> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(inner.iter().map(|(k, v)| entry_size(k, v.len())).sum())
    }
}
