// tests/release_info_test.rs
use std::fs;

use tempfile::tempdir;

use release_meta::domain::version::VersionTriple;
use release_meta::release_info::{emit, load, write};

fn sample_triple() -> VersionTriple {
    VersionTriple {
        base: "1.2.0-beta.0".to_string(),
        formal: "1.2.0-beta.0.4".to_string(),
        ceremonial: "1.2.0-beta.0.4+gitexport.abc1234".to_string(),
    }
}

#[test]
fn test_write_then_load_round_trips() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("release_info");

    write(&path, &sample_triple()).unwrap();
    let info = load(&path).unwrap();

    assert_eq!(info.base.as_deref(), Some("1.2.0-beta.0"));
    assert_eq!(info.formal.as_deref(), Some("1.2.0-beta.0.4"));
    assert_eq!(
        info.ceremonial.as_deref(),
        Some("1.2.0-beta.0.4+gitexport.abc1234")
    );
}

#[test]
fn test_round_trip_reproduces_the_triple() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("release_info");
    let versions = sample_triple();

    write(&path, &versions).unwrap();
    let mut reread = VersionTriple::fallback("0.0.0");
    load(&path).unwrap().apply_to(&mut reread);

    assert_eq!(reread, versions);
}

#[test]
fn test_single_quoted_values_are_accepted() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("release_info");
    fs::write(
        &path,
        "RELEASE_VERSION_BASE='1.2.0'\nRELEASE_VERSION_FORMAL='1.2.0'\n",
    )
    .unwrap();

    let info = load(&path).unwrap();
    assert_eq!(info.base.as_deref(), Some("1.2.0"));
    assert_eq!(info.formal.as_deref(), Some("1.2.0"));
    assert_eq!(info.ceremonial, None);
}

#[test]
fn test_unrecognized_keys_are_ignored() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("release_info");
    fs::write(
        &path,
        "RELEASE_VERSION_BASE=\"1.2.0\"\nRELEASE_DATE=\"2026-08-05\"\n",
    )
    .unwrap();

    let info = load(&path).unwrap();
    assert_eq!(info.base.as_deref(), Some("1.2.0"));
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempdir().unwrap();
    assert!(load(&dir.path().join("release_info")).is_err());
}

#[test]
fn test_emitted_fragment_has_no_spaces_around_assignments() {
    // The fragment doubles as a shell-sourceable script
    let fragment = emit(&sample_triple());
    for line in fragment.lines() {
        assert!(!line.contains(" = "), "line '{}' breaks shell sourcing", line);
        assert!(line.ends_with('"'));
    }
}
