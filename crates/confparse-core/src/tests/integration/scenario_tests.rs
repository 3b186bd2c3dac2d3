#![cfg(test)]

use std::fs;
use tempfile::tempdir;

use crate::constants::DEFAULT_SECTION;
use crate::error::Result;
use crate::store::ConfigStore;

use super::common::init_logging;

const HEADERLESS: &str = "\
# no section header at all
a=1
b=true
c=3.5
d=some text
e=7,8,9
";

const SECTIONED: &str = "\
[abc]
a = 10
c = 0.25
d = hello world

[de]
e = 1,2,3
keep = yes
justtext
";

#[test]
fn test_headerless_file() -> Result<()> {
    init_logging();
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let path = temp_dir.path().join("cfg_test0.txt");
    fs::write(&path, HEADERLESS).expect("Failed to write fixture");

    let store = ConfigStore::from_file(&path);

    assert_eq!(store.get("a", 2, DEFAULT_SECTION).to_int()?, 1);
    assert!(store.get("b", "false", DEFAULT_SECTION).to_bool()?);
    assert_eq!(store.get("c", "0.0", DEFAULT_SECTION).to_float()?, 3.5);
    assert_eq!(store.get("d", "None", DEFAULT_SECTION), "some text");
    assert_eq!(store.get("e", "", DEFAULT_SECTION).to_list::<i32>()?, vec![7, 8, 9]);

    let a: i32 = store.get_typed("a", 2, DEFAULT_SECTION)?;
    assert_eq!(a, 1);
    let e: Vec<i32> = store.get_typed("e", "", DEFAULT_SECTION)?;
    assert_eq!(e, vec![7, 8, 9]);

    Ok(())
}

#[test]
fn test_sectioned_file_edit_and_save() -> Result<()> {
    init_logging();
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let source = temp_dir.path().join("cfg_test1.txt");
    let saved = temp_dir.path().join("cfg_save.txt");
    fs::write(&source, SECTIONED).expect("Failed to write fixture");

    let mut store = ConfigStore::from_file(&source);
    store.set("b", "true", "abc");

    assert_eq!(store.get("a", 2, "abc").to_int()?, 10);
    assert!(store.get("b", false, "abc").to_bool()?);
    assert_eq!(store.get("c", 0.0, "abc").to_float()?, 0.25);
    assert_eq!(store.get("d", "None", "abc"), "hello world");

    store.remove("e", "de");
    store.set("v", vec![4, 5, 6], "de");
    store.write(&saved);

    assert_eq!(
        fs::read_to_string(&saved).expect("Failed to read saved file"),
        "[abc]\na=10\nc=0.25\nd=hello world\nb=true\n\n[de]\nkeep=yes\nv=4,5,6\n\n"
    );

    Ok(())
}

#[test]
fn test_removing_last_entry_drops_section_from_file() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let path = temp_dir.path().join("pruned.ini");

    let mut store = ConfigStore::new();
    store.set("keep", 1, "a");
    store.set("only", 2, "b");
    store.remove("only", "b");
    store.write(&path);

    assert_eq!(fs::read_to_string(&path).expect("Failed to read file"), "[a]\nkeep=1\n\n");
}

#[test]
fn test_reread_replaces_previous_contents() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let first = temp_dir.path().join("first.ini");
    let second = temp_dir.path().join("second.ini");
    fs::write(&first, "[one]\na=1\n").expect("Failed to write fixture");
    fs::write(&second, "[two]\nb=2\n").expect("Failed to write fixture");

    let mut store = ConfigStore::from_file(&first);
    store.read(&second);

    assert_eq!(store.section_names(), vec!["two"]);
}
