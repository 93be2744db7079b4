//! Integration tests for Settings config loading.
//!
//! These tests run without a global config (temp directories only).

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use tempfile::TempDir;

use prodconf::application::ApplicationError;
use prodconf::config::Settings;
use prodconf::domain::{DefaultPolicy, Node, ValidationPolicy};

#[test]
fn given_config_file_when_loading_from_file_then_overrides_defaults() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("prodconf.toml");
    fs::write(
        &path,
        r#"
[policy]
minimum_price = "10.5"
allow_minimum = true

[output]
show_tree = true
"#,
    )
    .unwrap();

    // Act
    let settings = Settings::from_file(&path).expect("load settings");

    // Assert
    assert_eq!(settings.policy.minimum_price, Decimal::new(105, 1));
    assert!(settings.policy.allow_minimum);
    assert!(settings.output.show_tree);
}

#[test]
fn given_partial_config_file_when_loading_then_missing_keys_keep_defaults() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("prodconf.toml");
    fs::write(&path, "[output]\nshow_tree = true\n").unwrap();

    // Act
    let settings = Settings::from_file(&path).expect("load settings");

    // Assert
    assert_eq!(settings.policy.to_policy(), DefaultPolicy::default());
    assert!(settings.output.show_tree);
}

#[test]
fn given_settings_policy_when_validating_then_minimum_applies() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("prodconf.toml");
    fs::write(&path, "[policy]\nminimum_price = \"100\"\nallow_minimum = true\n").unwrap();
    let policy = Settings::from_file(&path).unwrap().policy.to_policy();

    // Act / Assert
    assert!(policy.is_price_acceptable(&Node::part("Exact", Decimal::from(100))));
    assert!(!policy.is_price_acceptable(&Node::part("Cheap", Decimal::from(99))));
}

#[test]
fn given_malformed_config_when_loading_then_config_error() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("prodconf.toml");
    fs::write(&path, "[policy\nminimum_price = ").unwrap();

    // Act
    let result = Settings::from_file(&path);

    // Assert
    assert!(matches!(result, Err(ApplicationError::Config { .. })));
}

#[test]
fn given_missing_explicit_config_when_loading_then_not_found() {
    // Act
    let result = Settings::load(Some(Path::new("/nonexistent/prodconf.toml")));

    // Assert
    assert!(matches!(result, Err(ApplicationError::ConfigNotFound(_))));
}

#[test]
fn given_settings_when_rendering_toml_then_round_trips_through_file() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("prodconf.toml");
    let mut original = Settings::default();
    original.policy.minimum_price = Decimal::new(1999, 2);
    original.output.show_tree = true;
    fs::write(&path, original.to_toml().unwrap()).unwrap();

    // Act
    let reloaded = Settings::from_file(&path).unwrap();

    // Assert
    assert_eq!(reloaded, original);
}

// Only test in this binary that touches PRODCONF_* variables; the cases run
// sequentially so no other load observes them.
#[test]
fn given_env_overrides_when_loading_then_env_wins_and_malformed_values_fail() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("prodconf.toml");
    fs::write(&path, "[policy]\nminimum_price = \"10\"\n").unwrap();

    // Act / Assert: valid decimal overrides the file
    std::env::set_var("PRODCONF_POLICY__MINIMUM_PRICE", "42");
    let settings = Settings::load(Some(&path));
    std::env::remove_var("PRODCONF_POLICY__MINIMUM_PRICE");
    assert_eq!(settings.unwrap().policy.minimum_price, Decimal::from(42));

    // Act / Assert: malformed decimal
    std::env::set_var("PRODCONF_POLICY__MINIMUM_PRICE", "ten");
    let result = Settings::load(Some(&path));
    std::env::remove_var("PRODCONF_POLICY__MINIMUM_PRICE");
    assert!(matches!(result, Err(ApplicationError::Config { .. })));

    // Act / Assert: malformed bool
    std::env::set_var("PRODCONF_POLICY__ALLOW_MINIMUM", "maybe");
    let result = Settings::load(Some(&path));
    std::env::remove_var("PRODCONF_POLICY__ALLOW_MINIMUM");
    assert!(matches!(result, Err(ApplicationError::Config { .. })));
}
