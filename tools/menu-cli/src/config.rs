//! CLI configuration.

use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// CLI configuration file.
///
/// Unknown keys are rejected so a catalog file is never mistaken for config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Catalog loading.
    #[serde(default)]
    pub loader: LoaderConfig,

    /// Order processing.
    #[serde(default)]
    pub checkout: CheckoutConfig,

    /// Log output.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: CliConfig = if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))?
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))?
        };

        config.validate()?;
        Ok(config)
    }

    /// Save config to a file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Reject values that would make the loader or logger misbehave.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.loader.failure_rate) {
            bail!(
                "loader.failure_rate must be between 0 and 1, got {}",
                self.loader.failure_rate
            );
        }
        if self.loader.max_attempts == 0 {
            bail!("loader.max_attempts must be at least 1");
        }
        if !matches!(self.logging.format.as_str(), "compact" | "pretty" | "json") {
            bail!(
                "logging.format must be one of compact, pretty, json; got {:?}",
                self.logging.format
            );
        }
        Ok(())
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().map_or(false, |e| e == "json")
}

/// Catalog loader settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoaderConfig {
    /// Simulated network delay in milliseconds.
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,

    /// Probability (0-1) that a load fails.
    #[serde(default = "default_failure_rate")]
    pub failure_rate: f64,

    /// Total load attempts before giving up.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// JSON or TOML catalog file. The built-in menu is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<String>,
}

fn default_delay_ms() -> u64 {
    1500
}

fn default_failure_rate() -> f64 {
    0.1
}

fn default_max_attempts() -> u32 {
    1
}

impl LoaderConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
            failure_rate: default_failure_rate(),
            max_attempts: default_max_attempts(),
            catalog_path: None,
        }
    }
}

/// Checkout settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CheckoutConfig {
    /// Simulated order processing time in milliseconds.
    #[serde(default = "default_processing_delay_ms")]
    pub processing_delay_ms: u64,
}

fn default_processing_delay_ms() -> u64 {
    2000
}

impl CheckoutConfig {
    pub fn processing_delay(&self) -> Duration {
        Duration::from_millis(self.processing_delay_ms)
    }
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            processing_delay_ms: default_processing_delay_ms(),
        }
    }
}

/// Logging settings. `RUST_LOG` takes precedence over `level`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Filter directive, e.g. "warn" or "menu_commerce=debug".
    #[serde(default = "default_level")]
    pub level: String,

    /// One of "compact", "pretty", "json".
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_level() -> String {
    "warn".to_string()
}

fn default_format() -> String {
    "compact".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}

/// Generate a default menu.toml config file.
pub fn generate_default_config() -> String {
    r#"# Menu storefront configuration

[loader]
# Simulated network delay before the menu appears.
delay_ms = 1500
# Chance (0-1) that loading the menu fails.
failure_rate = 0.1
max_attempts = 1
# catalog_path = "catalog.json"

[checkout]
processing_delay_ms = 2000

[logging]
level = "warn"
format = "compact"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config: CliConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.loader.delay_ms, 1500);
        assert_eq!(config.loader.failure_rate, 0.1);
        assert_eq!(config.checkout.processing_delay_ms, 2000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config: CliConfig = toml::from_str("[loader]\ndelay_ms = 0\n").unwrap();
        assert_eq!(config.loader.delay_ms, 0);
        assert_eq!(config.loader.max_attempts, 1);
        assert_eq!(config.logging.format, "compact");
    }

    #[test]
    fn test_invalid_failure_rate_rejected() {
        let mut config = CliConfig::default();
        config.loader.failure_rate = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_log_format_rejected() {
        let mut config = CliConfig::default();
        config.logging.format = "xml".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_save_and_load_json() {
        let path = std::env::temp_dir().join(format!("menu-cli-config-{}.json", std::process::id()));
        let mut config = CliConfig::default();
        config.loader.delay_ms = 0;
        config.loader.catalog_path = Some("catalog.json".into());
        config.save(&path).unwrap();

        let loaded = CliConfig::load(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded.loader.delay_ms, 0);
        assert_eq!(loaded.loader.catalog_path.as_deref(), Some("catalog.json"));
    }

    #[test]
    fn test_catalog_file_is_not_accepted_as_config() {
        let catalog = r#"{"items": [{"id":"i-1","name":"Nasi Goreng","category":"Main","price":30000,"isAvailable":true}]}"#;
        assert!(serde_json::from_str::<CliConfig>(catalog).is_err());
        assert!(serde_json::from_str::<CliConfig>("[]").is_err());
    }

    #[test]
    fn test_unknown_section_key_rejected() {
        assert!(toml::from_str::<CliConfig>("[loader]
delay = 10
").is_err());
        assert!(toml::from_str::<CliConfig>("[checkout]
tax_rate = 5
").is_err());
    }
}
