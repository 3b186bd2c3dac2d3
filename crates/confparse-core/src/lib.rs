//! # Confparse Core
//!
//! A section-organized key/value configuration store with typed access,
//! default-value fallback and round-trip persistence in a small INI dialect.
//!
//! ```
//! use confparse_core::{ConfigStore, DEFAULT_SECTION};
//!
//! let mut store: ConfigStore = "a=1\n[net]\nports=80,443\n".parse().unwrap();
//! assert_eq!(store.get("a", 0, DEFAULT_SECTION).to_int().unwrap(), 1);
//! assert_eq!(store.get("ports", "", "net").to_list::<u16>().unwrap(), vec![80, 443]);
//!
//! store.set("debug", true, "net");
//! assert!(store.get_typed::<bool, _>("debug", false, "net").unwrap());
//! ```
pub mod codec;
pub mod constants;
pub mod convert;
pub mod error;
pub mod storage;
pub mod store;

// Re-export key public types for easier use by callers
pub use constants::DEFAULT_SECTION;
pub use convert::{Decode, Encode, Scalar, Value};
pub use error::{ConfigError, Result};
pub use storage::{LocalStorageProvider, StorageProvider};
pub use store::{ConfigEntry, ConfigStore, DefaultHeader, Find, Section, StoreOptions};

#[cfg(test)]
mod tests;
