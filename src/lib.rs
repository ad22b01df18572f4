pub mod daterange;
pub mod controller;
pub mod view;
pub mod config;
pub mod error;

// Re-export the main types for easy access
pub use daterange::*;
pub use controller::*;
pub use view::*;
pub use config::*;
pub use error::{ConfigError, Error, PickerError};
