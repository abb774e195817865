// ABOUTME: Behavioral tests for configuration loading
// Verifies defaults, file overrides and rejection of unknown catalog codes

use aristo_setup::app::App;
use aristo_setup::config::AppConfig;
use pretty_assertions::assert_eq;
use std::collections::HashMap;
use std::fs;
use tempfile::TempDir;

/// Default config has the locale selections a fresh wizard starts with
#[test]
fn test_default_config_has_sensible_values() {
    let config = AppConfig::default();

    assert_eq!(config.version, env!("CARGO_PKG_VERSION"));
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(config.ui.startup_guard_ms, 100);

    let defaults = config.locale_defaults();
    assert_eq!(defaults.language, "en");
    assert_eq!(defaults.metadata_language, "en");
    assert_eq!(defaults.region, "us");
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "[defaults]\nregion = \"au\"\n").unwrap();

    let config = AppConfig::load_from(&path).unwrap();

    assert_eq!(config.defaults.region, "au");
    assert_eq!(config.defaults.language, "en");
    assert_eq!(config.ui.tick_rate_ms, 250);
}

#[test]
fn test_unknown_region_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "[defaults]\nregion = \"mars\"\n").unwrap();

    let err = AppConfig::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("mars"));
}

#[test]
fn test_malformed_file_reports_path() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.toml");
    fs::write(&path, "[ui\ntick_rate_ms = ").unwrap();

    let err = AppConfig::load_from(&path).unwrap_err();
    assert!(format!("{err:#}").contains("broken.toml"));
}

#[test]
fn test_config_defaults_seed_the_wizard() {
    let mut config = AppConfig::default();
    config.defaults.language = "fr".to_string();
    config.defaults.region = "eu".to_string();

    let app = App::new(&config);
    let fields = app.state.engine.fields();

    assert_eq!(fields.language, "fr");
    assert_eq!(fields.metadata_language, "en");
    assert_eq!(fields.region, "eu");
}

fn write_config(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_higher_file_without_ui_keeps_lower_ui_values() {
    let temp_dir = TempDir::new().unwrap();
    let user = write_config(&temp_dir, "user.toml", "[defaults]\nregion = \"eu\"\n");
    let system = write_config(
        &temp_dir,
        "system.toml",
        "[ui]\ntick_rate_ms = 100\nstartup_guard_ms = 50\n",
    );

    let config = AppConfig::load_layered(&[user, system], &HashMap::new()).unwrap();

    assert_eq!(config.ui.tick_rate_ms, 100);
    assert_eq!(config.ui.startup_guard_ms, 50);
    assert_eq!(config.defaults.region, "eu");
}

#[test]
fn test_higher_file_wins_even_with_default_value() {
    let temp_dir = TempDir::new().unwrap();
    let local = write_config(&temp_dir, "local.toml", "[defaults]\nlanguage = \"en\"\n");
    let system = write_config(
        &temp_dir,
        "system.toml",
        "[defaults]\nlanguage = \"de\"\nmetadata_language = \"ja\"\n",
    );

    let config = AppConfig::load_layered(&[local, system], &HashMap::new()).unwrap();

    assert_eq!(config.defaults.language, "en");
    assert_eq!(config.defaults.metadata_language, "ja");
}

#[test]
fn test_missing_files_are_skipped_and_env_applies_last() {
    let temp_dir = TempDir::new().unwrap();
    let absent = temp_dir.path().join("absent.toml");
    let user = write_config(&temp_dir, "user.toml", "[defaults]\nregion = \"au\"\n");
    let env: HashMap<String, String> =
        [("ARISTO_REGION".to_string(), "other".to_string())].into_iter().collect();

    let config = AppConfig::load_layered(&[absent, user], &env).unwrap();

    assert_eq!(config.defaults.region, "other");
    assert_eq!(config.ui.tick_rate_ms, 250);
}
