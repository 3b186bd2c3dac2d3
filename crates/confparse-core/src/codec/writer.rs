use std::fmt;

use crate::store::{ConfigStore, DefaultHeader, Section};

/// Serialize a store to text
pub fn serialize(store: &ConfigStore) -> String {
    store.to_string()
}

/// Write every section of `store` to `out`
///
/// Each section is its `[name]` header, one `option=value` line per entry and
/// a trailing blank line. With [`DefaultHeader::Omit`] the default section
/// goes first and without a header, so it parses back into the same place.
pub fn write_store<W: fmt::Write>(out: &mut W, store: &ConfigStore) -> fmt::Result {
    let default_name = store.default_section();
    let omit_default = store.options().default_header == DefaultHeader::Omit;

    if omit_default {
        if let Some(section) = store.section(default_name).filter(|s| !s.is_empty()) {
            write_entries(out, section)?;
            writeln!(out)?;
        }
    }

    for section in store.sections() {
        if omit_default && section.name() == default_name {
            continue;
        }
        writeln!(out, "[{}]", section.name())?;
        write_entries(out, section)?;
        writeln!(out)?;
    }
    Ok(())
}

fn write_entries<W: fmt::Write>(out: &mut W, section: &Section) -> fmt::Result {
    for entry in section {
        writeln!(out, "{}={}", entry.option(), entry.value())?;
    }
    Ok(())
}
