//! TOML configuration for the `solar-quote` binary.
//!
//! Every key is optional; anything left out falls back to
//! [`AppConfig::default`].
//!
//! ```toml
//! company_name = "Solar System Quote Generator"
//! currency = "PKR"
//! validity_days = 5
//! log_level = "info"
//! log_file = "quotes.log"
//! terms = ["Installation timeline: 2-3 weeks after confirmation."]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use quote_core::summary::{DEFAULT_VALIDITY_DAYS, SummaryTemplate, default_notes};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Read from the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "solar-quote.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub company_name: String,
    pub currency: String,
    pub validity_days: u32,
    /// Bare level or full `EnvFilter` directive.
    pub log_level: String,
    pub log_file: Option<PathBuf>,
    /// Replaces the default additional-information notes when set.
    pub terms: Option<Vec<String>>,
}

impl Default for AppConfig {
    fn default() -> Self {
        let template = SummaryTemplate::default();
        Self {
            company_name: template.company_name,
            currency: template.currency,
            validity_days: DEFAULT_VALIDITY_DAYS,
            log_level: "info".to_string(),
            log_file: None,
            terms: None,
        }
    }
}

impl AppConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config file");
        Self::from_toml_str(&text)
    }

    /// Loads `explicit` if given, otherwise [`DEFAULT_CONFIG_FILE`] when it
    /// exists, otherwise the defaults.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    Self::load(fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.currency.trim().is_empty() {
            return Err(ConfigError::Invalid("currency must not be empty".to_string()));
        }
        if self.validity_days == 0 {
            return Err(ConfigError::Invalid(
                "validity_days must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Applies command-line overrides on top of the file values.
    #[must_use]
    pub fn with_overrides(
        mut self,
        log_level: Option<String>,
        log_file: Option<PathBuf>,
    ) -> Self {
        if let Some(level) = log_level {
            self.log_level = level;
        }
        if log_file.is_some() {
            self.log_file = log_file;
        }
        self
    }

    pub fn summary_template(
        &self,
        show_breakdown: bool,
    ) -> SummaryTemplate {
        SummaryTemplate {
            company_name: self.company_name.clone(),
            currency: self.currency.clone(),
            validity_days: self.validity_days,
            notes: self.terms.clone().unwrap_or_else(default_notes),
            show_breakdown,
        }
    }
}
