//! Error types for settings loading and persistence.

use thiserror::Error;

/// Errors that can occur while loading or saving configuration.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Reading or writing the configuration file failed.
    #[error("Configuration I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The JSON configuration could not be parsed or serialized.
    #[error("JSON configuration error: {0}")]
    Json(#[from] serde_json::Error),

    /// The TOML configuration could not be parsed.
    #[error("TOML configuration error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// The TOML configuration could not be serialized.
    #[error("TOML serialization error: {0}")]
    TomlWrite(#[from] toml::ser::Error),

    /// The file extension names no supported format.
    #[error("Unsupported configuration format: {extension}")]
    UnsupportedFormat {
        /// The extension that was not recognized.
        extension: String,
    },
}
