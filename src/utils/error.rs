use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("Invalid value for field '{field}': '{value}' ({reason})")]
    InvalidArgument {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
    Io,
}

impl RecordError {
    pub fn invalid_argument(field: &str, value: &str, reason: impl Into<String>) -> Self {
        RecordError::InvalidArgument {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            RecordError::InvalidArgument { .. } => ErrorCategory::Validation,
            RecordError::ConfigError { .. } => ErrorCategory::Configuration,
            RecordError::IoError(_) => ErrorCategory::Io,
        }
    }

    /// Field name carried by an `InvalidArgument`, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            RecordError::InvalidArgument { field, .. } => Some(field.as_str()),
            _ => None,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RecordError::InvalidArgument { field, value, .. } => {
                format!("'{}' is not an accepted value for {}", value, field)
            }
            RecordError::ConfigError { message } => {
                format!("Could not read the input file: {}", message)
            }
            RecordError::IoError(e) => format!("File access failed: {}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, RecordError>;
