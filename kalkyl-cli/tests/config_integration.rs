//! Integration tests that load the site configuration from an on-disk
//! fixture and run commands against the resulting session.

use std::path::{Path, PathBuf};

use chrono::Utc;
use pretty_assertions::assert_eq;

use kalkyl_cli::commands;
use kalkyl_cli::config::{ConfigError, SiteConfig};
use kalkyl_core::Registry;

fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("flags.toml")
}

#[test]
fn fixture_loads() {
    let config = SiteConfig::load(&fixture_path(), &Registry::builtin())
        .expect("fixture file should load without error");

    assert_eq!(config.host.as_str(), "https://staging.kalkyl.example.se/");
    assert_eq!(config.overrides.show_calculator_navigation, Some(false));
    assert_eq!(config.overrides.show_calculators, None);
    assert_eq!(config.overrides.calculator_visibility.len(), 3);
}

#[test]
fn fixture_merges_over_defaults() {
    let registry = Registry::builtin();
    let session = SiteConfig::load(&fixture_path(), &registry).unwrap().session(registry);

    assert!(session.flags.show_calculators());
    assert!(!session.flags.show_calculator_navigation());
    assert!(session.flags.related_calculators("loan", 3).is_empty());

    // Unlisted ids keep the default.
    assert!(session.flags.is_calculator_visible("bmi"));
    assert!(session.flags.is_calculator_visible("tip"));
    assert!(!session.flags.is_calculator_visible("mortgage"));

    // Unknown ids are kept but never listed.
    assert_eq!(session.flags.calculator_visibility().get("retired-widget"), Some(&true));
    assert_eq!(session.flags.visible_calculators().len(), registry.len() - 1);
}

#[test]
fn host_flag_overrides_fixture() {
    let config = SiteConfig::resolve(
        Some(&fixture_path()),
        Some("https://kalkyl.example.se"),
        &Registry::builtin(),
    )
    .unwrap();

    assert_eq!(config.host.as_str(), "https://kalkyl.example.se/");
    assert_eq!(config.overrides.show_calculator_navigation, Some(false));
}

#[test]
fn missing_file_is_a_read_error() {
    let path = fixture_path().with_file_name("finns-inte.toml");

    let result = SiteConfig::load(&path, &Registry::builtin());

    assert!(matches!(result, Err(ConfigError::Read { .. })));
}

#[test]
fn hidden_calculator_still_opens_from_link() {
    let registry = Registry::builtin();
    let mut session = SiteConfig::load(&fixture_path(), &registry).unwrap().session(registry);
    session.premium.upgrade();

    let listing = commands::list(&session.flags, None);
    assert!(!listing.contains("/bolanekalkylator"));

    let path = registry.get("mortgage").unwrap().path;
    let report = commands::open(&session, &format!("https://kalkyl.example.se{path}"), Utc::now()).unwrap();
    assert!(report.starts_with(registry.get("mortgage").unwrap().title));
}
