use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::core::services::AmountPolicy;
use crate::currency::{CurrencyCode, LocaleConfig};
use crate::errors::LedgerError;
use crate::labels::Language;

const CONFIG_FILE: &str = "config.json";
const APP_DIR: &str = "finpath";
const HOME_ENV: &str = "FINPATH_HOME";
const TMP_SUFFIX: &str = "tmp";

/// User preferences. Ledger contents are never stored here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub locale: String,
    pub currency: String,
    #[serde(default)]
    pub amount_policy: AmountPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en-US".into(),
            currency: "USD".into(),
            amount_policy: AmountPolicy::default(),
        }
    }
}

impl Config {
    pub fn language(&self) -> Language {
        Language::from_tag(&self.locale)
    }

    pub fn locale_config(&self) -> LocaleConfig {
        LocaleConfig::from_tag(&self.locale)
    }

    pub fn currency_code(&self) -> CurrencyCode {
        CurrencyCode::new(&self.currency)
    }
}

/// Loads and stores `config.json` under the application directory.
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    /// Uses `$FINPATH_HOME` when set, otherwise the platform config directory.
    pub fn new() -> Result<Self, LedgerError> {
        Self::with_base_dir(base_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, LedgerError> {
        fs::create_dir_all(&base)?;
        Ok(Self {
            path: base.join(CONFIG_FILE),
        })
    }

    /// Reads the stored config, or defaults when none has been saved yet.
    pub fn load(&self) -> Result<Config, LedgerError> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&data)?)
    }

    pub fn save(&self, config: &Config) -> Result<(), LedgerError> {
        let json = serde_json::to_string_pretty(config)?;
        let tmp = self.path.with_extension(format!("json.{TMP_SUFFIX}"));
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        tracing::info!(path = %self.path.display(), "config saved");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn base_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    dirs::config_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}
