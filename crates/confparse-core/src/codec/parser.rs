use log::{debug, trace};

use crate::constants::{COMMENT_PREFIX, KEY_VALUE_SEPARATOR, SECTION_CLOSE, SECTION_OPEN, WHITESPACE};
use crate::store::ConfigStore;

/// A classified, already stripped line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// Blank or `#` comment
    Skip,
    /// `[name]`; the name is stripped and may be empty
    Header(&'a str),
    /// `option=value`
    Pair { option: &'a str, value: &'a str },
    /// Anything else, including a pair with an empty option
    Malformed,
}

/// Classify one raw line
pub fn classify(raw: &str) -> Line<'_> {
    let line = raw.trim_matches(WHITESPACE);
    if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
        return Line::Skip;
    }

    if let (Some(open), Some(close)) = (line.find(SECTION_OPEN), line.find(SECTION_CLOSE)) {
        // A `]` before the `[` leaves everything after the `[` as the name
        let name = if close > open { &line[open + 1..close] } else { &line[open + 1..] };
        return Line::Header(name.trim_matches(WHITESPACE));
    }

    if let Some((option, value)) = line.split_once(KEY_VALUE_SEPARATOR) {
        let option = option.trim_end_matches(WHITESPACE);
        if option.is_empty() {
            return Line::Malformed;
        }
        return Line::Pair {
            option,
            value: value.trim_start_matches(WHITESPACE),
        };
    }

    Line::Malformed
}

/// Parse `text` and add its sections and entries to `store`
///
/// The store is not cleared first. A repeated option within one section
/// keeps its first position and takes the last value.
pub fn parse_into(store: &mut ConfigStore, text: &str) {
    let default_section = store.default_section().to_string();
    let mut current = String::new();
    let mut first = true;
    let mut entries = 0usize;

    for (number, raw) in text.lines().enumerate() {
        let line = classify(raw);
        if line == Line::Skip {
            continue;
        }

        if first && !matches!(line, Line::Header(_)) {
            current = default_section.clone();
            store.ensure_section(&current);
        }
        first = false;

        match line {
            Line::Header(name) => {
                if !name.is_empty() {
                    current = name.to_string();
                }
                store.ensure_section(&current);
            }
            Line::Pair { option, value } => {
                store.set(option, value, &current);
                entries += 1;
            }
            Line::Malformed => trace!("Ignoring line {}: {:?}", number + 1, raw),
            Line::Skip => {}
        }
    }

    debug!("Parsed {} entries into {} sections", entries, store.sections().count());
}
