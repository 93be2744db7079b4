//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/prodconf/prodconf.toml`
//! 3. Explicit config file (`--config`)
//! 4. Environment variables: `PRODCONF_*` prefix

use std::path::{Path, PathBuf};
use std::str::FromStr;

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::application::{ApplicationError, IoResultExt};
use crate::domain::DefaultPolicy;

const ENV_PREFIX: &str = "PRODCONF";

/// Price rule settings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct PolicySettings {
    /// Prices must be above this value (default: 0)
    pub minimum_price: Decimal,
    /// Also accept prices equal to `minimum_price`
    pub allow_minimum: bool,
}

impl PolicySettings {
    pub fn to_policy(&self) -> DefaultPolicy {
        DefaultPolicy::new(self.minimum_price, self.allow_minimum)
    }
}

/// Display settings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct OutputSettings {
    /// Print the product tree before the verdict
    pub show_tree: bool,
}

/// Unified configuration for prodconf.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Settings {
    pub policy: PolicySettings,
    pub output: OutputSettings,
}

/// Raw policy settings for intermediate parsing (`None` means "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawPolicySettings {
    pub minimum_price: Option<Decimal>,
    pub allow_minimum: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawOutputSettings {
    pub show_tree: Option<bool>,
}

/// Raw settings for intermediate parsing.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub policy: RawPolicySettings,
    pub output: RawOutputSettings,
}

/// Get the XDG config directory for prodconf.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "prodconf").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("prodconf.toml"))
}

/// Expand `~` and `$VAR` in a user-supplied path.
pub fn expand_path(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    shellexpand::full(raw.as_ref())
        .map(|s| PathBuf::from(s.into_owned()))
        .unwrap_or_else(|_| path.to_path_buf())
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).with_path_context("read config", path)?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

/// An unset key is `None`; a set key that does not parse is an error.
fn env_value<T>(result: Result<T, ConfigError>) -> Result<Option<T>, ApplicationError> {
    match result {
        Ok(val) => Ok(Some(val)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(config_err(e)),
    }
}

fn parse_decimal(key: &str, value: &str) -> Result<Decimal, ApplicationError> {
    Decimal::from_str(value.trim()).map_err(|e| ApplicationError::Config {
        message: format!("{}: invalid decimal '{}': {}", key, value, e),
    })
}

impl Settings {
    /// Overlay wins wherever it specifies a value.
    pub fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            policy: PolicySettings {
                minimum_price: overlay
                    .policy
                    .minimum_price
                    .unwrap_or(self.policy.minimum_price),
                allow_minimum: overlay
                    .policy
                    .allow_minimum
                    .unwrap_or(self.policy.allow_minimum),
            },
            output: OutputSettings {
                show_tree: overlay.output.show_tree.unwrap_or(self.output.show_tree),
            },
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `explicit` - Optional config file; it must exist when given
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. Global config: `$XDG_CONFIG_HOME/prodconf/prodconf.toml`
    /// 3. Explicit config file
    /// 4. Environment variables: `PRODCONF_*` prefix
    #[instrument(level = "debug")]
    pub fn load(explicit: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!(path = %global_path.display(), "loading global config");
                current = current.merge_with(&load_raw_settings(&global_path)?);
            }
        }

        if let Some(path) = explicit {
            let path = expand_path(path);
            if !path.exists() {
                return Err(ApplicationError::ConfigNotFound(path));
            }
            debug!(path = %path.display(), "loading explicit config");
            current = current.merge_with(&load_raw_settings(&path)?);
        }

        Self::apply_env_overrides(current)
    }

    /// Load a single file on top of the defaults, ignoring global config and env vars.
    pub fn from_file(path: &Path) -> Result<Self, ApplicationError> {
        Ok(Self::default().merge_with(&load_raw_settings(path)?))
    }

    /// Apply PRODCONF_* environment variables as explicit overrides.
    ///
    /// e.g. `PRODCONF_POLICY__MINIMUM_PRICE=10`, `PRODCONF_OUTPUT__SHOW_TREE=true`
    fn apply_env_overrides(settings: Self) -> Result<Self, ApplicationError> {
        Self::apply_env_with_prefix(settings, ENV_PREFIX)
    }

    fn apply_env_with_prefix(mut settings: Self, prefix: &str) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Some(val) = env_value(config.get_string("policy.minimum_price"))? {
            settings.policy.minimum_price = parse_decimal("policy.minimum_price", &val)?;
        }
        if let Some(val) = env_value(config.get_bool("policy.allow_minimum"))? {
            settings.policy.allow_minimum = val;
        }
        if let Some(val) = env_value(config.get_bool("output.show_tree"))? {
            settings.output.show_tree = val;
        }

        Ok(settings)
    }

    /// Render as TOML (for `config show`).
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize settings: {}", e),
        })
    }
}
