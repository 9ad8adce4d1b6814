//! Integration tests for Settings config loading with layered merge semantics.
//!
//! Merge Semantics:
//! - Defaults → Global → Local: REPLACE per field that the layer specifies
//! - Any → Env vars: REPLACE (explicit user override)
//!
//! Note: These tests run without a global config (temp directories only),
//! so they effectively test local config merging with defaults.

use std::fs;

use rstest::rstest;
use tempfile::TempDir;

use gss::config::{local_config_path, ChildOrder, RawSettings, Settings};

// ============================================================
// Settings::load() local config tests
// ============================================================

#[test]
fn given_local_config_when_load_then_overrides_specified_fields() {
    // Arrange
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".gss.toml"),
        "child_order = \"key\"\nmark_shared = false\n",
    )
    .unwrap();

    // Act
    let settings = Settings::load(Some(dir.path())).expect("load settings");

    // Assert: unspecified fields keep their defaults
    assert_eq!(settings.child_order, ChildOrder::Key);
    assert!(!settings.mark_shared);
    assert!(settings.show_contents);
}

#[test]
fn given_directory_without_local_config_when_load_then_defaults() {
    let dir = TempDir::new().unwrap();

    let settings = Settings::load(Some(dir.path())).expect("load settings");

    assert_eq!(settings, Settings::default());
}

#[test]
fn given_malformed_local_config_when_load_then_errors() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".gss.toml"), "child_order = \"sideways\"\n").unwrap();

    let result = Settings::load(Some(dir.path()));

    assert!(result.is_err());
}

#[test]
fn given_dir_when_asking_local_config_path_then_dotfile_in_dir() {
    let dir = TempDir::new().unwrap();

    assert_eq!(local_config_path(dir.path()), dir.path().join(".gss.toml"));
}

// ============================================================
// merge_with
// ============================================================

#[test]
fn given_overlay_when_merging_then_overlay_wins_only_where_set() {
    let base = Settings {
        child_order: ChildOrder::Contents,
        show_contents: false,
        mark_shared: true,
    };
    let overlay = RawSettings {
        show_contents: Some(true),
        ..RawSettings::default()
    };

    let merged = base.merge_with(&overlay);

    assert_eq!(merged.child_order, ChildOrder::Contents);
    assert!(merged.show_contents);
    assert!(merged.mark_shared);
}

// ============================================================
// ChildOrder
// ============================================================

#[rstest]
#[case("insertion", ChildOrder::Insertion)]
#[case("key", ChildOrder::Key)]
#[case(" Contents ", ChildOrder::Contents)]
fn given_order_name_when_parsing_then_maps_to_variant(
    #[case] input: &str,
    #[case] expected: ChildOrder,
) {
    assert_eq!(input.parse::<ChildOrder>(), Ok(expected));
}

#[test]
fn given_unknown_order_name_when_parsing_then_errors() {
    assert!("random".parse::<ChildOrder>().is_err());
}

#[test]
fn given_insertion_order_when_asking_comparator_then_none() {
    assert!(ChildOrder::Insertion.comparator::<String>().is_none());
    assert!(ChildOrder::Key.comparator::<String>().is_some());
}

// ============================================================
// to_toml
// ============================================================

#[test]
fn given_settings_when_rendering_toml_then_round_trips_through_load() {
    let settings = Settings {
        child_order: ChildOrder::Key,
        show_contents: false,
        mark_shared: true,
    };
    let dir = TempDir::new().unwrap();

    let rendered = settings.to_toml().unwrap();
    fs::write(local_config_path(dir.path()), &rendered).unwrap();
    let loaded = Settings::load(Some(dir.path())).unwrap();

    assert!(rendered.contains("child_order = \"key\""));
    assert_eq!(loaded, settings);
}
