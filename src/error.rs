use thiserror::Error;

/// Errors of the layers around the booking wizard.
///
/// The wizard itself has no error type: a transition whose precondition is
/// not met is ignored. These cover configuration files and terminal input.

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration from {path}")]
    LoadFailed {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Failed to save configuration to {path}")]
    SaveFailed {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to create config directory: {path}")]
    DirectoryCreationFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not determine the user config directory")]
    NoConfigDir,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Nothing entered")]
    Empty,

    #[error("'{input}' is not an option (choose 1-{count})")]
    BadOption { input: String, count: usize },

    #[error("'{0}' is not a date (use YYYY-MM-DD)")]
    BadDate(String),

    #[error("'{0}' is not understood here")]
    Unrecognized(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    #[error("Missing value for {0}")]
    MissingValue(&'static str),

    #[error("Invalid value '{value}' for {flag}: {reason}")]
    InvalidValue {
        flag: &'static str,
        value: String,
        reason: String,
    },

    #[error("Unknown argument: {0}")]
    UnknownArgument(String),
}

/// Type alias for application Results using anyhow for context chaining
pub type AppResult<T> = anyhow::Result<T>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_display() {
        let err = InputError::BadOption {
            input: "7".to_string(),
            count: 4,
        };
        assert_eq!(err.to_string(), "'7' is not an option (choose 1-4)");

        let err = CliError::MissingValue("--theme");
        assert_eq!(err.to_string(), "Missing value for --theme");
    }

    #[test]
    fn test_error_source_chain() {
        use std::io;

        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let config_err = ConfigError::LoadFailed {
            path: "/test/config.json".to_string(),
            source: Box::new(io_err),
        };

        assert!(config_err.source().is_some());
        assert_eq!(
            config_err.to_string(),
            "Failed to load configuration from /test/config.json"
        );
    }
}
