pub mod provider;
pub mod local;

/// Re-export key types
pub use provider::StorageProvider;
pub use local::LocalStorageProvider;
