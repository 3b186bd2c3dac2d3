//! # Configuration Store
//!
//! [`ConfigStore`] owns every section and entry and exposes typed,
//! section-scoped access on top of the [`convert`](crate::convert) layer.
//!
//! Sections are kept in a sorted map, so serialization always lists them in
//! lexicographic order no matter the order they were created in. Entries
//! inside a section keep their insertion order.
pub mod entry;
pub mod find;
pub mod options;

pub use entry::{ConfigEntry, Section};
pub use find::Find;
pub use options::{DefaultHeader, StoreOptions};

use std::collections::BTreeMap;
use std::convert::Infallible;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use log::{debug, error};

use crate::codec;
use crate::convert::{Decode, Encode, Value, decode};
use crate::error::Result;
use crate::storage::{LocalStorageProvider, StorageProvider};

/// In-memory, section-organized configuration
#[derive(Debug, Clone, Default)]
pub struct ConfigStore {
    sections: BTreeMap<String, Section>,
    options: StoreOptions,
}

impl ConfigStore {
    /// Create an empty store with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with the given options
    pub fn with_options(options: StoreOptions) -> Self {
        Self {
            sections: BTreeMap::new(),
            options,
        }
    }

    /// Create a store from a file on disk
    ///
    /// A file that cannot be opened is logged and yields an empty store.
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        let mut store = Self::new();
        store.read(path);
        store
    }

    pub fn options(&self) -> &StoreOptions {
        &self.options
    }

    /// Name of the section entries land in when no section is given
    pub fn default_section(&self) -> &str {
        &self.options.default_section
    }

    /// Look an option up, falling back to the encoded default
    pub fn get<D: Encode>(&self, option: &str, default: D, section: &str) -> Value {
        match self.find(option, section).entry() {
            Some(entry) => Value::new(entry.value()),
            None => Value::new(default.encode()),
        }
    }

    /// Look an option up and decode it straight into `O`
    ///
    /// An absent option converts `default` to `O` through its canonical form.
    /// A present but malformed value is an error, never the default.
    pub fn get_typed<O: Decode, D: Encode>(&self, option: &str, default: D, section: &str) -> Result<O> {
        match self.find(option, section).entry() {
            Some(entry) => decode(entry.value()),
            None => decode(&default.encode()),
        }
    }

    /// Store a value, overwriting in place, appending, or creating the section
    pub fn set<V: Encode>(&mut self, option: &str, value: V, section: &str) {
        let encoded = value.encode();
        self.ensure_section(section).upsert(option, encoded);
    }

    /// Remove one entry, dropping its section if that leaves it empty
    pub fn remove(&mut self, option: &str, section: &str) -> Option<ConfigEntry> {
        let entries = self.sections.get_mut(section)?;
        let index = entries.position(option)?;
        let removed = entries.remove_at(index);
        if entries.is_empty() {
            self.sections.remove(section);
        }
        Some(removed)
    }

    /// Remove a whole section
    pub fn remove_section(&mut self, section: &str) -> Option<Section> {
        self.sections.remove(section)
    }

    /// Locate a section by exact name, then its first matching option
    pub fn find(&self, option: &str, section: &str) -> Find<'_> {
        match self.sections.get(section) {
            None => Find::SectionMissing,
            Some(section) => match section.get(option) {
                Some(entry) => Find::Found { section, entry },
                None => Find::OptionMissing { section },
            },
        }
    }

    pub fn contains(&self, option: &str, section: &str) -> bool {
        self.find(option, section).entry_found()
    }

    pub fn has_section(&self, section: &str) -> bool {
        self.sections.contains_key(section)
    }

    pub fn section(&self, section: &str) -> Option<&Section> {
        self.sections.get(section)
    }

    /// Sections in serialization order
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.values()
    }

    pub fn section_names(&self) -> Vec<String> {
        self.sections.keys().cloned().collect()
    }

    /// Total number of entries across all sections
    pub fn len(&self) -> usize {
        self.sections.values().map(Section::len).sum()
    }

    /// True when the store holds no entries, even if empty sections remain
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of sections, empty ones included
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Copy every section and entry of `other` into this store, its values
    /// overriding ours
    pub fn merge(&mut self, other: &ConfigStore) {
        for section in other.sections() {
            let target = self.ensure_section(section.name());
            for entry in section {
                target.upsert(entry.option(), entry.value().to_string());
            }
        }
    }

    /// Drop every section and entry
    pub fn reset(&mut self) {
        self.sections.clear();
    }

    /// Replace the contents with the parsed text
    pub fn read_str(&mut self, text: &str) {
        self.reset();
        codec::parse_into(self, text);
    }

    /// Replace the contents with a file, logging instead of failing
    pub fn read(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        if let Err(e) = self.load(path) {
            error!("error reading config file {}: {}", path.display(), e);
        }
    }

    /// Write the contents to a file, logging instead of failing
    pub fn write(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        if let Err(e) = self.save(path) {
            error!("error writing config file {}: {}", path.display(), e);
        }
    }

    /// Like [`read`](Self::read), but hands the error back
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.load_from(&LocalStorageProvider::default(), path.as_ref())
    }

    /// Like [`write`](Self::write), but hands the error back
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        self.save_to(&LocalStorageProvider::default(), path.as_ref())
    }

    /// Replace the contents with a file read through `provider`
    ///
    /// The store is cleared first, so a failed read leaves it empty.
    pub fn load_from<P: StorageProvider + ?Sized>(&mut self, provider: &P, path: &Path) -> Result<()> {
        self.reset();
        let text = provider.read_to_string(path)?;
        codec::parse_into(self, &text);
        debug!(
            "Loaded {} entries in {} sections from {} via {}",
            self.len(),
            self.sections.len(),
            path.display(),
            provider.name()
        );
        Ok(())
    }

    /// Write the serialized contents through `provider`
    pub fn save_to<P: StorageProvider + ?Sized>(&self, provider: &P, path: &Path) -> Result<()> {
        provider.write_string(path, &self.to_string())?;
        debug!("Saved {} sections to {} via {}", self.sections.len(), path.display(), provider.name());
        Ok(())
    }

    /// Serialize to standard output
    pub fn print(&self) {
        print!("{}", self);
    }

    /// Get a section, creating it empty if needed
    pub(crate) fn ensure_section(&mut self, section: &str) -> &mut Section {
        self.sections
            .entry(section.to_string())
            .or_insert_with(|| Section::new(section))
    }
}

/// Stores are equal when they hold the same sections with the same entries
impl PartialEq for ConfigStore {
    fn eq(&self, other: &Self) -> bool {
        self.sections == other.sections
    }
}

impl Eq for ConfigStore {}

impl fmt::Display for ConfigStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        codec::write_store(f, self)
    }
}

impl FromStr for ConfigStore {
    type Err = Infallible;

    fn from_str(text: &str) -> std::result::Result<Self, Self::Err> {
        let mut store = Self::new();
        store.read_str(text);
        Ok(store)
    }
}
