//! CLI configuration.
//!
//! Loaded from `--config` / `KIRA_CONFIG`, else `<config_dir>/kira/config.toml`
//! when it exists, else defaults.
//!
//! ```toml
//! currency = "MYR"
//! format = "table"
//! store_path = "/home/me/.local/share/kira/inputs.redb"
//!
//! [property_tax]
//! loan_duty_percent = 0.5
//!
//! [[property_tax.legal_fee]]
//! up_to = 500000
//! rate_percent = 1.25
//!
//! [[property_tax.legal_fee]]
//! rate_percent = 1.0
//!
//! [[property_tax.transfer_duty]]
//! rate_percent = 3.0
//! ```

use std::path::{Path, PathBuf};

use kira_calc::PropertyTaxSchedule;
use serde::{Deserialize, Serialize};

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};

/// CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KiraConfig {
    /// Currency label printed before amounts
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Default output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Database of saved inputs
    #[serde(default)]
    pub store_path: Option<PathBuf>,

    /// Replacement legal fee and stamp duty schedule
    #[serde(default)]
    pub property_tax: Option<PropertyTaxSchedule>,
}

fn default_currency() -> String {
    "MYR".to_string()
}

impl Default for KiraConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            format: OutputFormat::default(),
            store_path: None,
            property_tax: None,
        }
    }
}

impl KiraConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        toml::from_str(&content)
            .map_err(|e| CliError::Config(format!("invalid {}: {}", path.display(), e)))
    }

    /// Loads the explicit file if given, else the default file if present.
    pub fn load(explicit: Option<&Path>) -> CliResult<Self> {
        if let Some(path) = explicit {
            tracing::debug!("loading configuration from {}", path.display());
            return Self::from_file(path);
        }

        match default_config_path() {
            Some(path) if path.exists() => {
                tracing::debug!("loading configuration from {}", path.display());
                Self::from_file(&path)
            }
            _ => {
                tracing::debug!("using default configuration");
                Ok(Self::default())
            }
        }
    }

    /// Database path: configured, else `<data_dir>/kira/inputs.redb`.
    pub fn store_path(&self) -> CliResult<PathBuf> {
        if let Some(path) = &self.store_path {
            return Ok(path.clone());
        }
        dirs::data_dir()
            .or_else(dirs::home_dir)
            .map(|dir| dir.join("kira").join("inputs.redb"))
            .ok_or_else(|| CliError::Config("could not determine a data directory".to_string()))
    }

    /// Property tax schedule: configured, else the built-in one.
    pub fn property_tax_schedule(&self) -> PropertyTaxSchedule {
        self.property_tax.clone().unwrap_or_default()
    }
}

/// Default configuration file location.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("kira").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config: KiraConfig = toml::from_str("").unwrap();
        assert_eq!(config.currency, "MYR");
        assert_eq!(config.format, OutputFormat::Table);
        assert!(config.property_tax.is_none());
        assert_eq!(config.property_tax_schedule(), PropertyTaxSchedule::default());
    }

    #[test]
    fn test_full_config() {
        let config: KiraConfig = toml::from_str(
            r#"
            currency = "RM"
            format = "json"
            store_path = "/tmp/kira/inputs.redb"

            [property_tax]
            loan_duty_percent = 0.0

            [[property_tax.legal_fee]]
            up_to = 500000
            rate_percent = 1.25

            [[property_tax.legal_fee]]
            rate_percent = 1.0

            [[property_tax.transfer_duty]]
            rate_percent = 3.0
            "#,
        )
        .unwrap();

        assert_eq!(config.currency, "RM");
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(
            config.store_path().unwrap(),
            PathBuf::from("/tmp/kira/inputs.redb")
        );

        let schedule = config.property_tax_schedule();
        assert_eq!(schedule.legal_fee.tiers().len(), 2);
        assert_eq!(schedule.transfer_duty.charge(100_000.0), 3_000.0);
    }

    #[test]
    fn test_malformed_tiers_are_rejected() {
        let result: Result<KiraConfig, _> = toml::from_str(
            r#"
            [property_tax]
            loan_duty_percent = 0.5
            legal_fee = [{ rate_percent = 1.0 }, { up_to = 100.0, rate_percent = 2.0 }]
            transfer_duty = [{ rate_percent = 1.0 }]
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = KiraConfig::from_file(Path::new("/nonexistent/kira.toml")).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }
}
