//! # Value Conversion
//!
//! Every value in a [`ConfigStore`](crate::store::ConfigStore) is kept in a
//! single canonical string form. This module converts between that form and
//! typed values:
//!
//! - [`Encode`] renders a value to its canonical string.
//! - [`Decode`] parses a canonical string back into a value.
//! - [`Scalar`] marks the types that may appear as list elements.
//!
//! Booleans use the literal tokens `true` and `false`, numbers use their
//! default textual rendering and lists are their encoded elements joined by
//! [`LIST_DELIMITER`] with nothing else around them.
pub mod value;

pub use value::Value;

use crate::constants::{LIST_DELIMITER, WHITESPACE};
use crate::error::{ConfigError, Result};

/// Renders a value to its canonical string form
pub trait Encode {
    fn encode(&self) -> String;
}

/// Parses a value from its canonical string form
pub trait Decode: Sized {
    fn decode(text: &str) -> Result<Self>;
}

/// Types that can be stored as a single list element
///
/// Lists themselves are not scalars, so nested lists are rejected at
/// compile time instead of producing text that cannot be split back apart.
pub trait Scalar: Encode {}

/// Encode any convertible value
pub fn encode<T: Encode + ?Sized>(value: &T) -> String {
    value.encode()
}

/// Decode any convertible value
pub fn decode<T: Decode>(text: &str) -> Result<T> {
    T::decode(text)
}

/// Join already convertible items into one list value
pub fn encode_list<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: Encode,
{
    let mut out = String::new();
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            out.push(LIST_DELIMITER);
        }
        out.push_str(&item.encode());
    }
    out
}

/// Split a list value and decode each element
///
/// An empty string is an empty list, and a single trailing delimiter does
/// not add an empty element.
pub fn decode_list<T: Decode>(text: &str) -> Result<Vec<T>> {
    let body = text.strip_suffix(LIST_DELIMITER).unwrap_or(text);
    if body.is_empty() {
        return Ok(Vec::new());
    }
    body.split(LIST_DELIMITER).map(T::decode).collect()
}

macro_rules! impl_numeric {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Encode for $ty {
                fn encode(&self) -> String {
                    self.to_string()
                }
            }

            impl Decode for $ty {
                fn decode(text: &str) -> Result<Self> {
                    text.trim_matches(WHITESPACE)
                        .parse::<$ty>()
                        .map_err(|e| ConfigError::decode(stringify!($ty), text, e))
                }
            }

            impl Scalar for $ty {}
        )*
    };
}

impl_numeric!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl Encode for bool {
    fn encode(&self) -> String {
        if *self { "true".to_string() } else { "false".to_string() }
    }
}

impl Decode for bool {
    fn decode(text: &str) -> Result<Self> {
        match text.trim_matches(WHITESPACE) {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(ConfigError::decode("bool", text, "expected `true` or `false`")),
        }
    }
}

impl Scalar for bool {}

impl Encode for str {
    fn encode(&self) -> String {
        self.to_string()
    }
}

impl Scalar for str {}

impl Encode for String {
    fn encode(&self) -> String {
        self.clone()
    }
}

impl Decode for String {
    fn decode(text: &str) -> Result<Self> {
        Ok(text.to_string())
    }
}

impl Scalar for String {}

impl<T: Encode + ?Sized> Encode for &T {
    fn encode(&self) -> String {
        (**self).encode()
    }
}

impl<T: Scalar + ?Sized> Scalar for &T {}

impl<T: Scalar> Encode for [T] {
    fn encode(&self) -> String {
        encode_list(self)
    }
}

impl<T: Scalar, const N: usize> Encode for [T; N] {
    fn encode(&self) -> String {
        encode_list(self)
    }
}

impl<T: Scalar> Encode for Vec<T> {
    fn encode(&self) -> String {
        encode_list(self)
    }
}

impl<T: Scalar + Decode> Decode for Vec<T> {
    fn decode(text: &str) -> Result<Self> {
        decode_list(text)
    }
}
