//! Picker configuration, read from a YAML file.
//!
//! Every field is optional; a missing file section falls back to the
//! standard presets, a Monday-first week and medium date style.

use std::path::Path;
use chrono::{NaiveDate, Weekday};
use serde::{Serialize, Deserialize};
use tracing_subscriber::{fmt, EnvFilter};
use crate::daterange::{DateRange, GregorianCalendar, PresetCatalog};
use crate::error::ConfigError;
use crate::view::DateStyle;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl LoggingConfig {
    /// Installs the global subscriber. `RUST_LOG` wins over the configured level.
    pub fn init(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.level));
        fmt().with_env_filter(filter).init();
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig { level: "info".to_string() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    pub date_style: DateStyle,
    pub first_weekday: Weekday,
    #[serde(with = "serde_yaml::with::singleton_map_recursive")]
    pub presets: Option<Vec<DateRange>>,
    pub logging: LoggingConfig,
}

impl Default for PickerConfig {
    fn default() -> Self {
        PickerConfig {
            date_style: DateStyle::default(),
            first_weekday: Weekday::Mon,
            presets: None,
            logging: LoggingConfig::default(),
        }
    }
}

impl PickerConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let yaml_content = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        Self::from_yaml_str(&yaml_content)
    }

    pub fn from_yaml_str(yaml_content: &str) -> Result<Self, ConfigError> {
        let config: PickerConfig = serde_yaml::from_str(yaml_content)
            .map_err(ConfigError::Parse)?;
        if let Some(presets) = &config.presets {
            PresetCatalog::try_new(presets.clone())?;
        }
        Ok(config)
    }

    pub fn calendar(&self) -> GregorianCalendar {
        GregorianCalendar::new(self.first_weekday)
    }

    pub fn catalog(&self, today: NaiveDate) -> Result<PresetCatalog, ConfigError> {
        match &self.presets {
            Some(presets) => PresetCatalog::try_new(presets.clone()),
            None => Ok(PresetCatalog::standard(today)),
        }
    }
}
