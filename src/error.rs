//! Error types and handling for the Airwatch service

use thiserror::Error;

/// Main error type for the Airwatch service
#[derive(Error, Debug)]
pub enum AirwatchError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Site feed loading or parsing errors
    #[error("Feed error: {message}")]
    Feed { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// General application errors
    #[error("Application error: {message}")]
    General { message: String },
}

impl AirwatchError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new feed error
    pub fn feed<S: Into<String>>(message: S) -> Self {
        Self::Feed {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            AirwatchError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            AirwatchError::Feed { .. } => {
                "Unable to load the site feed. Please check the data file.".to_string()
            }
            AirwatchError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            AirwatchError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
            AirwatchError::General { message } => message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = AirwatchError::config("missing sites path");
        assert!(matches!(config_err, AirwatchError::Config { .. }));

        let feed_err = AirwatchError::feed("malformed record");
        assert!(matches!(feed_err, AirwatchError::Feed { .. }));

        let validation_err = AirwatchError::validation("unknown site id");
        assert!(matches!(validation_err, AirwatchError::Validation { .. }));
    }

    #[test]
    fn test_user_messages() {
        let config_err = AirwatchError::config("test");
        assert!(config_err.user_message().contains("Configuration error"));

        let feed_err = AirwatchError::feed("test");
        assert!(feed_err.user_message().contains("site feed"));

        let validation_err = AirwatchError::validation("test input");
        assert!(validation_err.user_message().contains("test input"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let airwatch_err: AirwatchError = io_err.into();
        assert!(matches!(airwatch_err, AirwatchError::Io { .. }));
    }
}
