use crate::store::entry::{ConfigEntry, Section};

/// Outcome of looking up an option inside a section
///
/// Distinguishes a missing section from a present section that lacks the
/// option, so callers can branch on either independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Find<'a> {
    /// No section with the requested name
    SectionMissing,
    /// The section exists but holds no such option
    OptionMissing { section: &'a Section },
    /// Both the section and the option exist
    Found {
        section: &'a Section,
        entry: &'a ConfigEntry,
    },
}

impl<'a> Find<'a> {
    pub fn section_found(&self) -> bool {
        !matches!(self, Find::SectionMissing)
    }

    pub fn entry_found(&self) -> bool {
        matches!(self, Find::Found { .. })
    }

    pub fn section(&self) -> Option<&'a Section> {
        match *self {
            Find::SectionMissing => None,
            Find::OptionMissing { section } | Find::Found { section, .. } => Some(section),
        }
    }

    pub fn entry(&self) -> Option<&'a ConfigEntry> {
        match *self {
            Find::Found { entry, .. } => Some(entry),
            _ => None,
        }
    }
}
