/// One option/value pair inside a section
///
/// The value is always the canonical string form, whatever type the caller
/// had in mind when setting it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigEntry {
    option: String,
    value: String,
}

impl ConfigEntry {
    pub fn new(option: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            option: option.into(),
            value: value.into(),
        }
    }

    pub fn option(&self) -> &str {
        &self.option
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub(crate) fn set_value(&mut self, value: String) {
        self.value = value;
    }
}

/// A named, ordered sequence of entries
///
/// Entries keep the order they were first added in; overwriting a value
/// leaves its position unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    name: String,
    entries: Vec<ConfigEntry>,
}

impl Section {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entries(&self) -> &[ConfigEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ConfigEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First entry whose option matches exactly
    pub fn get(&self, option: &str) -> Option<&ConfigEntry> {
        self.entries.iter().find(|entry| entry.option == option)
    }

    pub(crate) fn position(&self, option: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.option == option)
    }

    /// Overwrite in place or append
    pub(crate) fn upsert(&mut self, option: &str, value: String) {
        match self.position(option) {
            Some(index) => self.entries[index].set_value(value),
            None => self.entries.push(ConfigEntry::new(option, value)),
        }
    }

    pub(crate) fn remove_at(&mut self, index: usize) -> ConfigEntry {
        self.entries.remove(index)
    }
}

impl<'a> IntoIterator for &'a Section {
    type Item = &'a ConfigEntry;
    type IntoIter = std::slice::Iter<'a, ConfigEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
