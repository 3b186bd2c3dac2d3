use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use crate::error::{ConfigError, Result};
use crate::storage::provider::StorageProvider;

/// Local filesystem storage provider
#[derive(Debug, Clone, Default)]
pub struct LocalStorageProvider {
    base_path: PathBuf,
}

impl LocalStorageProvider {
    /// Create a new local storage provider with the given base path
    ///
    /// An empty base path resolves everything against the working directory.
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Resolve a relative path against the base path
    fn resolve_path<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        self.base_path.join(path)
    }
}

impl StorageProvider for LocalStorageProvider {
    fn name(&self) -> &str {
        "local"
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        let full_path = self.resolve_path(path);
        let bytes = fs::read(&full_path).map_err(|e| ConfigError::io(e, "read_to_string", full_path))?;
        // Invalid UTF-8 becomes U+FFFD instead of failing the whole file
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn write_string(&self, path: &Path, contents: &str) -> Result<()> {
        let full_path = self.resolve_path(path);

        // Missing parent directories are an error, not something to create
        let parent = match full_path.parent() {
            Some(parent) if parent.as_os_str().is_empty() => PathBuf::from("."),
            Some(parent) => parent.to_path_buf(),
            None => {
                return Err(ConfigError::OperationFailed {
                    operation: "write_string".to_string(),
                    path: Some(full_path),
                    message: "Cannot write to path without parent directory".to_string(),
                });
            }
        };

        // Stage the contents next to the target, then atomically replace it
        let mut temp_file = NamedTempFile::new_in(&parent)
            .map_err(|e| ConfigError::io(e, "create_temp_file", parent.clone()))?;

        temp_file
            .write_all(contents.as_bytes())
            .map_err(|e| ConfigError::io(e, "write_to_temp_file", temp_file.path().to_path_buf()))?;

        temp_file
            .persist(&full_path)
            .map_err(|e| ConfigError::io(e.error, "persist_temp_file", full_path.clone()))?;

        Ok(())
    }
}
