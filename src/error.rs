use std::path::PathBuf;
use thiserror::Error;

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[source] serde_yaml::Error),

    #[error("preset catalog is empty")]
    EmptyCatalog,

    #[error("invalid preset at index {index}: {reason}")]
    InvalidPreset { index: usize, reason: String },
}

/// Misuse of the expanded picker controller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PickerError {
    #[error("the date range picker is not being edited")]
    NotEditing,

    #[error("preset index {index} is out of range for a catalog of {len} entries")]
    PresetOutOfRange { index: usize, len: usize },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Picker(#[from] PickerError),

    #[error("invalid argument '{0}'")]
    InvalidArgument(String),
}
