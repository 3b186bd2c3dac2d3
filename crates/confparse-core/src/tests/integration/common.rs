#![cfg(test)]

use rand::Rng;
use rand::distributions::Alphanumeric;

use crate::store::ConfigStore;

/// Route `log` output through the test harness
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Alphanumeric identifier, safe as a section or option name
pub fn random_name<R: Rng>(rng: &mut R) -> String {
    let len = rng.gen_range(1..=8);
    (0..len).map(|_| char::from(rng.sample(Alphanumeric))).collect()
}

/// Build a store purely through `set`, using every scalar kind and lists
pub fn random_store<R: Rng>(rng: &mut R) -> ConfigStore {
    let mut store = ConfigStore::new();
    for _ in 0..rng.gen_range(1..=5) {
        let section = random_name(rng);
        for _ in 0..rng.gen_range(1..=6) {
            let option = random_name(rng);
            match rng.gen_range(0..5) {
                0 => store.set(&option, rng.gen_range(-1000i64..1000), &section),
                1 => store.set(&option, rng.gen_range(-100.0f64..100.0), &section),
                2 => store.set(&option, rng.gen_bool(0.5), &section),
                3 => store.set(&option, random_name(rng), &section),
                _ => {
                    let len = rng.gen_range(0..4);
                    let list: Vec<u32> = (0..len).map(|_| rng.gen_range(0..500)).collect();
                    store.set(&option, list, &section);
                }
            }
        }
    }
    store
}
