/// Section that receives entries appearing before any `[section]` header
pub const DEFAULT_SECTION: &str = "default_";

/// First character of a full-line comment
pub const COMMENT_PREFIX: char = '#';

/// Separator between the elements of a list value
pub const LIST_DELIMITER: char = ',';

/// Separator between an option and its value
pub const KEY_VALUE_SEPARATOR: char = '=';

/// Opening bracket of a section header
pub const SECTION_OPEN: char = '[';

/// Closing bracket of a section header
pub const SECTION_CLOSE: char = ']';

/// Characters stripped from both ends of every line
pub const WHITESPACE: &[char] = &[' ', '\t', '\n', '\r', '\x0c', '\x0b'];
