use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::duration::{deserialize_duration, serialize_duration};

/// Name of the config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "networth.toml";

/// Default timeout for a single rate request (2 seconds).
fn default_rate_timeout() -> Duration {
    Duration::from_millis(2000)
}

/// Which rate provider converts balance sheets between currencies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RateProviderKind {
    /// Never convert; requests for another currency keep the model's own.
    None,
    /// Rates from the `[rates.table]` section, or the built-in sandbox table.
    Static,
    /// The currency rate sandbox HTTP API.
    #[default]
    Sandbox,
    /// ECB reference rates from the Frankfurter API.
    Frankfurter,
}

/// Currency conversion configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RatesConfig {
    pub provider: RateProviderKind,

    /// Overrides the provider's base URL (HTTP providers only).
    pub base_url: Option<String>,

    /// Per-request timeout for HTTP providers.
    #[serde(
        default = "default_rate_timeout",
        deserialize_with = "deserialize_duration",
        serialize_with = "serialize_duration"
    )]
    pub timeout: Duration,

    /// Static rates keyed `FROM_TO`, e.g. `USD_EUR = "0.86"`.
    pub table: BTreeMap<String, String>,
}

impl Default for RatesConfig {
    fn default() -> Self {
        Self {
            provider: RateProviderKind::default(),
            base_url: None,
            timeout: default_rate_timeout(),
            table: BTreeMap::new(),
        }
    }
}

/// Display/output formatting configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// If set, the summary rounds values to this many decimal places.
    ///
    /// This is purely a presentation setting; JSON output keeps exact values.
    pub currency_decimals: Option<u32>,

    /// When true, render summary values with thousands separators.
    pub currency_grouping: bool,
}

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Target currency used when a request does not name one.
    pub default_currency: Option<String>,

    #[serde(default)]
    pub rates: RatesConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    /// Load config from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load config from a file, or return default config if file doesn't exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}

/// Returns the default config file path.
///
/// Resolution order:
/// 1. `./networth.toml` if it exists in current directory
/// 2. `~/.config/networth/networth.toml` (XDG config directory)
pub fn default_config_path() -> PathBuf {
    let local_config = PathBuf::from(CONFIG_FILE_NAME);
    if local_config.exists() {
        return local_config;
    }

    if let Some(config_dir) = dirs::config_dir() {
        return config_dir.join("networth").join(CONFIG_FILE_NAME);
    }

    local_config
}
