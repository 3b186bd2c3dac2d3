use std::fmt::Debug;
use std::path::Path;
use crate::error::Result;

/// Trait for storage backends that config files are read from and written to
pub trait StorageProvider: Debug {
    /// Get the name of this provider
    fn name(&self) -> &str;

    /// Read a file to a string
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Write a string to a file, replacing any previous contents
    fn write_string(&self, path: &Path, contents: &str) -> Result<()>;
}
