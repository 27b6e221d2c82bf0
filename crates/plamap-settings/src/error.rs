//! Error types for the preference layer.

use std::io;
use thiserror::Error;

/// Errors that can occur while loading or persisting preferences.
#[derive(Error, Debug)]
pub enum PreferencesError {
    /// The backing store file could not be read or written.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON (de)serialization of the backing store failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML deserialization of the backing store failed.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization of the backing store failed.
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// The backing store file is not a supported format.
    #[error("Unsupported preferences format: {0}")]
    UnsupportedFormat(String),

    /// The platform configuration directory could not be resolved.
    #[error("Config directory error: {0}")]
    ConfigDirectory(String),
}

/// Result type alias for preference operations.
pub type PreferencesResult<T> = Result<T, PreferencesError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PreferencesError::UnsupportedFormat("prefs.yaml".to_string());
        assert_eq!(err.to_string(), "Unsupported preferences format: prefs.yaml");

        let err = PreferencesError::ConfigDirectory("no home directory".to_string());
        assert_eq!(err.to_string(), "Config directory error: no home directory");
    }

    #[test]
    fn test_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: PreferencesError = io_err.into();
        assert!(matches!(err, PreferencesError::Io(_)));
    }
}
