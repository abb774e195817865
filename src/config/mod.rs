// ABOUTME: Configuration management for aristo-setup
// Handles terminal loop timing and the initial locale selections of the wizard

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

use crate::wizard::LocaleDefaults;
use crate::wizard::catalog::{Catalog, DEFAULT_LANGUAGE, DEFAULT_REGION};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application version
    #[serde(default = "default_version")]
    pub version: String,

    /// Terminal UI preferences
    #[serde(default)]
    pub ui: UiPreferences,

    /// Initial wizard selections
    #[serde(default)]
    pub defaults: WizardDefaults,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiPreferences {
    /// Redraw interval when no input arrives, in milliseconds (default: 250)
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,

    /// Key events are ignored for this long after startup (default: 100)
    #[serde(default = "default_startup_guard")]
    pub startup_guard_ms: u64,
}

impl Default for UiPreferences {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            startup_guard_ms: default_startup_guard(),
        }
    }
}

impl UiPreferences {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    pub fn startup_guard(&self) -> Duration {
        Duration::from_millis(self.startup_guard_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardDefaults {
    /// Interface language code
    #[serde(default = "default_language")]
    pub language: String,

    /// Metadata language code
    #[serde(default = "default_language")]
    pub metadata_language: String,

    /// Metadata region code
    #[serde(default = "default_region")]
    pub region: String,
}

impl Default for WizardDefaults {
    fn default() -> Self {
        Self {
            language: default_language(),
            metadata_language: default_language(),
            region: default_region(),
        }
    }
}

fn default_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_tick_rate() -> u64 {
    250
}

fn default_startup_guard() -> u64 {
    100
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

fn default_region() -> String {
    DEFAULT_REGION.to_string()
}

/// Keys present in one config file; absent keys leave earlier values alone
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    ui: UiOverrides,
    #[serde(default)]
    defaults: DefaultsOverrides,
}

#[derive(Debug, Default, Deserialize)]
struct UiOverrides {
    tick_rate_ms: Option<u64>,
    startup_guard_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
struct DefaultsOverrides {
    language: Option<String>,
    metadata_language: Option<String>,
    region: Option<String>,
}

impl AppConfig {
    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        Self::load_layered(&Self::get_config_paths(), &load_from_env())
    }

    /// Load configuration from one explicit file, on top of the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut config = Self::default();
        config.merge(Self::read_file(path)?);
        config.apply_env_overrides(&load_from_env());
        config.validate()?;
        Ok(config)
    }

    /// Merge the existing files of `paths`, given highest precedence first,
    /// then apply environment overrides and validate
    pub fn load_layered(paths: &[PathBuf], env: &HashMap<String, String>) -> Result<Self> {
        let mut config = Self::default();

        // Lowest precedence first so later files win
        for path in paths.iter().rev() {
            if path.exists() {
                config.merge(Self::read_file(path)?);
            }
        }

        config.apply_env_overrides(env);
        config.validate()?;
        Ok(config)
    }

    fn read_file(path: &Path) -> Result<ConfigFile> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let file: ConfigFile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        debug!(path = %path.display(), "loaded config file");
        Ok(file)
    }

    /// Get configuration file paths in order of precedence
    pub fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![];

        // 1. Local project config
        if let Ok(cwd) = std::env::current_dir() {
            paths.push(cwd.join(".aristo").join("config.toml"));
        }

        // 2. User config (~/.aristo/config/config.toml)
        if let Ok(config_dir) = Self::get_user_config_dir() {
            paths.push(config_dir.join("config.toml"));
        }

        // 3. System config
        paths.push(PathBuf::from("/etc/aristo/config.toml"));

        paths
    }

    /// Get user configuration directory
    fn get_user_config_dir() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().context("Failed to get home directory")?;
        Ok(home_dir.join(".aristo").join("config"))
    }

    /// Apply the keys set in one file over this config
    fn merge(&mut self, file: ConfigFile) {
        // Don't override version
        if let Some(tick_rate_ms) = file.ui.tick_rate_ms {
            self.ui.tick_rate_ms = tick_rate_ms;
        }
        if let Some(startup_guard_ms) = file.ui.startup_guard_ms {
            self.ui.startup_guard_ms = startup_guard_ms;
        }

        if let Some(language) = file.defaults.language {
            self.defaults.language = language;
        }
        if let Some(metadata_language) = file.defaults.metadata_language {
            self.defaults.metadata_language = metadata_language;
        }
        if let Some(region) = file.defaults.region {
            self.defaults.region = region;
        }
    }

    /// Apply `ARISTO_*` overrides for the wizard defaults
    pub fn apply_env_overrides(&mut self, env: &HashMap<String, String>) {
        if let Some(language) = env.get("ARISTO_LANGUAGE") {
            self.defaults.language = language.clone();
        }
        if let Some(language) = env.get("ARISTO_METADATA_LANGUAGE") {
            self.defaults.metadata_language = language.clone();
        }
        if let Some(region) = env.get("ARISTO_REGION") {
            self.defaults.region = region.clone();
        }
    }

    /// Reject default codes that are not in the catalogs
    pub fn validate(&self) -> Result<()> {
        let checks = [
            ("language", Catalog::Languages, &self.defaults.language),
            ("metadata_language", Catalog::Languages, &self.defaults.metadata_language),
            ("region", Catalog::Regions, &self.defaults.region),
        ];

        for (key, catalog, code) in checks {
            if !catalog.contains(code) {
                bail!("Unknown {} code '{}' in [defaults]", key, code);
            }
        }

        if self.ui.tick_rate_ms == 0 {
            bail!("ui.tick_rate_ms must be greater than zero");
        }

        Ok(())
    }

    /// Initial dropdown selections for a new wizard session
    pub fn locale_defaults(&self) -> LocaleDefaults {
        LocaleDefaults {
            language: self.defaults.language.clone(),
            metadata_language: self.defaults.metadata_language.clone(),
            region: self.defaults.region.clone(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            ui: UiPreferences::default(),
            defaults: WizardDefaults::default(),
        }
    }
}

/// Load configuration from environment
pub fn load_from_env() -> HashMap<String, String> {
    std::env::vars().filter(|(k, _)| k.starts_with("ARISTO_")).collect()
}
