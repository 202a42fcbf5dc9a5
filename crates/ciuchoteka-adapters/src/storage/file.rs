//! File-backed storage medium using std::fs.
//!
//! Each key is one file inside a data directory. Writes go to a sibling
//! temporary file that is then renamed over the entry, so a crash never
//! leaves a half-written value behind.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use ciuchoteka_core::{
    application::{ApplicationError, ports::StorageMedium},
    error::{CiuchotekaError, CiuchotekaResult},
};
use tracing::debug;

use super::entry_size;

const TEMP_SUFFIX: &str = ".tmp";

/// Production medium rooted at a data directory.
#[derive(Debug, Clone)]
pub struct FileMedium {
    root: PathBuf,
    quota: Option<u64>,
}

impl FileMedium {
    /// Unbounded medium under `root`. The directory is created on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            quota: None,
        }
    }

    /// Reject writes that would take total usage past `quota` bytes.
    pub fn with_quota(mut self, quota: u64) -> Self {
        self.quota = Some(quota);
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn entry_path(&self, key: &str) -> CiuchotekaResult<PathBuf> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
        if !valid {
            return Err(CiuchotekaError::Internal {
                message: format!("invalid storage key '{key}'"),
            });
        }
        Ok(self.root.join(key))
    }

    /// `(key, size in bytes)` for every stored entry.
    fn entries(&self) -> io::Result<Vec<(String, u64)>> {
        let dir = match fs::read_dir(&self.root) {
            Ok(dir) => dir,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e),
        };

        let mut entries = Vec::new();
        for entry in dir {
            let entry = entry?;
            let metadata = entry.metadata()?;
            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                continue;
            };
            if !metadata.is_file() || name.starts_with('.') {
                continue;
            }
            entries.push((name, metadata.len()));
        }
        Ok(entries)
    }
}

impl StorageMedium for FileMedium {
    fn get(&self, key: &str) -> CiuchotekaResult<Option<String>> {
        let path = self.entry_path(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ApplicationError::StorageRead {
                reason: format!("{}: {e}", path.display()),
            }
            .into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> CiuchotekaResult<()> {
        let path = self.entry_path(key)?;
        let write_error = |reason: String| ApplicationError::StorageWrite {
            key: key.to_string(),
            reason,
        };

        if let Some(quota) = self.quota {
            let others: u64 = self
                .entries()
                .map_err(|e| write_error(format!("failed to measure usage: {e}")))?
                .iter()
                .filter(|(name, _)| name != key)
                .map(|(name, len)| entry_size(name, *len as usize))
                .sum();
            let needed = others + entry_size(key, value.len());
            if needed > quota {
                return Err(write_error(format!("quota exceeded ({needed} of {quota} bytes)")).into());
            }
        }

        fs::create_dir_all(&self.root)
            .map_err(|e| write_error(format!("failed to create {}: {e}", self.root.display())))?;

        let temp = self.root.join(format!(".{key}{TEMP_SUFFIX}"));
        fs::write(&temp, value)
            .map_err(|e| write_error(format!("failed to write {}: {e}", temp.display())))?;
        fs::rename(&temp, &path)
            .map_err(|e| write_error(format!("failed to replace {}: {e}", path.display())))?;

        debug!(path = %path.display(), bytes = value.len(), "Entry written");
        Ok(())
    }

    fn remove(&self, key: &str) -> CiuchotekaResult<()> {
        let path = self.entry_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ApplicationError::StorageWrite {
                key: key.to_string(),
                reason: format!("failed to remove {}: {e}", path.display()),
            }
            .into()),
        }
    }

    fn used_bytes(&self) -> CiuchotekaResult<u64> {
        let entries = self.entries().map_err(|e| ApplicationError::StorageRead {
            reason: format!("{}: {e}", self.root.display()),
        })?;
        Ok(entries
            .iter()
            .map(|(name, len)| entry_size(name, *len as usize))
            .sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_directory_reads_as_empty() {
        let temp = TempDir::new().unwrap();
        let medium = FileMedium::new(temp.path().join("not-yet"));
        assert_eq!(medium.get("ciuchoteka_data").unwrap(), None);
        assert_eq!(medium.used_bytes().unwrap(), 0);
    }

    #[test]
    fn set_creates_directory_and_round_trips() {
        let temp = TempDir::new().unwrap();
        let medium = FileMedium::new(temp.path().join("data"));
        medium.set("ciuchoteka_data", "{\"a\":1}").unwrap();

        assert_eq!(
            medium.get("ciuchoteka_data").unwrap().as_deref(),
            Some("{\"a\":1}")
        );
        assert_eq!(medium.used_bytes().unwrap(), 15 + 7);
        assert!(!temp.path().join("data/.ciuchoteka_data.tmp").exists());
    }

    #[test]
    fn remove_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let medium = FileMedium::new(temp.path());
        medium.set("k", "v").unwrap();
        medium.remove("k").unwrap();
        medium.remove("k").unwrap();
        assert_eq!(medium.get("k").unwrap(), None);
    }

    #[test]
    fn quota_rejects_and_preserves_previous_value() {
        let temp = TempDir::new().unwrap();
        let medium = FileMedium::new(temp.path()).with_quota(16);
        medium.set("k", "short").unwrap();

        let err = medium.set("k", "this value is too long").unwrap_err();
        assert!(err.is_unsaved_change());
        assert_eq!(medium.get("k").unwrap().as_deref(), Some("short"));
    }

    #[test]
    fn rejects_path_like_keys() {
        let temp = TempDir::new().unwrap();
        let medium = FileMedium::new(temp.path());
        assert!(medium.set("../escape", "x").is_err());
        assert!(medium.get("").is_err());
    }

    #[test]
    fn usage_ignores_hidden_files() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".stray.tmp"), "junk").unwrap();
        let medium = FileMedium::new(temp.path());
        assert_eq!(medium.used_bytes().unwrap(), 0);
    }
}
