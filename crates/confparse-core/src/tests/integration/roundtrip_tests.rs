#![cfg(test)]

use rand::SeedableRng;
use rand::rngs::StdRng;
use tempfile::tempdir;

use crate::constants::DEFAULT_SECTION;
use crate::error::Result;
use crate::store::{ConfigStore, DefaultHeader, StoreOptions};

use super::common::{init_logging, random_store};

#[test]
fn test_random_stores_survive_write_and_read() -> Result<()> {
    init_logging();
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for round in 0..50 {
        let original = random_store(&mut rng);
        let path = temp_dir.path().join(format!("round_{}.ini", round));

        original.save(&path)?;
        let mut reloaded = ConfigStore::new();
        reloaded.load(&path)?;

        assert_eq!(reloaded, original, "Round {} did not survive:\n{}", round, original);
    }

    Ok(())
}

#[test]
fn test_text_round_trip_is_stable() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..20 {
        let original = random_store(&mut rng);
        let text = original.to_string();
        let reparsed: ConfigStore = text.parse().unwrap();

        assert_eq!(reparsed, original);
        assert_eq!(reparsed.to_string(), text);
    }
}

#[test]
fn test_headerless_input_round_trips_exactly_when_header_is_omitted() {
    let input = "a=1\nb=2\n\n";
    let mut store = ConfigStore::with_options(StoreOptions::new().with_default_header(DefaultHeader::Omit));
    store.read_str(input);

    assert_eq!(store.to_string(), input);
}

#[test]
fn test_headerless_input_gains_header_by_default() {
    let store: ConfigStore = "a=1\nb=2\n".parse().unwrap();
    let text = store.to_string();
    assert_eq!(text, format!("[{}]\na=1\nb=2\n\n", DEFAULT_SECTION));

    // Observationally the same store either way
    let reparsed: ConfigStore = text.parse().unwrap();
    assert_eq!(reparsed, store);
}
