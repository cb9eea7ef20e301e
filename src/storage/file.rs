//! Directory-backed storage: one file per key.
//!
//! Keys become file names inside the base directory, so they are checked
//! before any filesystem access. A key must never be able to name a file
//! outside the base via `..`, separators, or absolute paths.

use super::{KeyValueStorage, StorageError};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Storage that keeps each value in `<base>/<key>.json`.
#[derive(Clone, Debug)]
pub struct FileStorage {
    base: PathBuf,
}

impl FileStorage {
    /// Create a file store rooted at `base`. The directory is created on the
    /// first write.
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// Base directory holding the stored files.
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Resolve the file that holds `key`.
    ///
    /// Rejects empty keys, `.`/`..`, path separators, and NUL bytes.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        if key.is_empty()
            || key == "."
            || key == ".."
            || key.contains(['/', '\\', '\0'])
        {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.base.join(format!("{key}.json")))
    }

    fn io_error(key: &str, source: io::Error) -> StorageError {
        StorageError::Io {
            key: key.to_string(),
            source,
        }
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Self::io_error(key, e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.base).map_err(|e| Self::io_error(key, e))?;

        // Each write gets its own temp file in the base dir, then renames over
        // the target. Concurrent writers never share a partial file; last rename wins.
        let mut tmp = NamedTempFile::new_in(&self.base).map_err(|e| Self::io_error(key, e))?;
        tmp.write_all(value.as_bytes())
            .and_then(|()| tmp.as_file().sync_all())
            .map_err(|e| Self::io_error(key, e))?;
        tmp.persist(&path).map_err(|e| Self::io_error(key, e.error))?;
        tracing::debug!(path = %path.display(), "stored value");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Self::io_error(key, e)),
        }
    }
}
