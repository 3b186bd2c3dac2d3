use std::fmt;

use crate::convert::{Decode, Scalar, decode, decode_list};
use crate::error::Result;

/// A looked-up configuration value, still in canonical string form
///
/// Returned by [`ConfigStore::get`](crate::store::ConfigStore::get). Looking a
/// value up never fails; decoding it into a concrete type might, so each
/// conversion returns a [`Result`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Value {
    raw: String,
}

impl Value {
    /// Wrap a canonical string
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// The canonical string itself
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Take ownership of the canonical string
    pub fn into_inner(self) -> String {
        self.raw
    }

    /// Decode into any convertible type
    pub fn parse<T: Decode>(&self) -> Result<T> {
        decode(&self.raw)
    }

    pub fn to_int(&self) -> Result<i64> {
        self.parse()
    }

    pub fn to_float(&self) -> Result<f64> {
        self.parse()
    }

    pub fn to_bool(&self) -> Result<bool> {
        self.parse()
    }

    /// Decode as a comma separated list of `T`
    pub fn to_list<T: Scalar + Decode>(&self) -> Result<Vec<T>> {
        decode_list(&self.raw)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl AsRef<str> for Value {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

impl From<String> for Value {
    fn from(raw: String) -> Self {
        Self { raw }
    }
}

impl From<&str> for Value {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        self.raw == other
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self.raw == *other
    }
}
