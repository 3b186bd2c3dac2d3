use crate::constants::DEFAULT_SECTION;

/// How the default section is written out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DefaultHeader {
    /// Write it like any other section, under its own `[name]` header
    #[default]
    Emit,
    /// Write its entries first, with no header, so headerless input
    /// round-trips byte for byte
    Omit,
}

/// Settings for a [`ConfigStore`](crate::store::ConfigStore)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreOptions {
    /// Section that receives entries appearing before any header
    pub default_section: String,
    /// Serialization policy for the default section
    pub default_header: DefaultHeader,
}

impl StoreOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_section(mut self, name: impl Into<String>) -> Self {
        self.default_section = name.into();
        self
    }

    pub fn with_default_header(mut self, policy: DefaultHeader) -> Self {
        self.default_header = policy;
        self
    }
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            default_section: DEFAULT_SECTION.to_string(),
            default_header: DefaultHeader::default(),
        }
    }
}
