//! # Text Codec
//!
//! Reads and writes the INI dialect used on disk:
//!
//! ```text
//! [section_name]
//! option1=value1
//! option2=value2
//!
//! [section_name2]
//! option3=value3
//! ```
//!
//! Lines are stripped of surrounding whitespace. Blank lines and lines
//! starting with `#` are skipped. Entries before the first header belong to
//! the store's default section. Lines that are neither a header nor an
//! `option=value` pair are ignored without a diagnostic.
pub mod parser;
pub mod writer;

pub use parser::parse_into;
pub use writer::{serialize, write_store};
