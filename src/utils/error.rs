use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("IO error on {}: {source}", .path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse archive {}: {source}", .path.display())]
    ParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid date in '{field}': {value}")]
    InvalidDateError { field: String, value: String },

    #[error("Index {index} out of range for collection of size {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Camera '{camera}' takes {found} film, not {expected}")]
    IncompatibleFilmType {
        camera: String,
        expected: String,
        found: String,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error in '{field}': {reason}")]
    ValidationError { field: String, reason: String },

    #[error("Not found: {what}")]
    NotFound { what: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Data,
    Configuration,
    Usage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ArchiveError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::IoError {
            path: path.into(),
            source,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::IoError { .. } => ErrorCategory::Io,
            Self::ParseError { .. } | Self::SerializationError(_) | Self::InvalidDateError { .. } => {
                ErrorCategory::Data
            }
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            Self::IndexOutOfRange { .. }
            | Self::IncompatibleFilmType { .. }
            | Self::ValidationError { .. }
            | Self::NotFound { .. } => ErrorCategory::Usage,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Usage => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::IoError { .. } => "Check that the archive path exists and is readable/writable",
            Self::ParseError { .. } | Self::InvalidDateError { .. } => {
                "The archive file is malformed; restore it from a backup or fix the reported field"
            }
            Self::SerializationError(_) => "The archive could not be encoded; this is a bug",
            Self::IndexOutOfRange { .. } => "List the collection first and pick an index below its size",
            Self::IncompatibleFilmType { .. } => "Pick a camera that uses the same film type as the roll",
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                "Review the configuration file and command-line overrides"
            }
            Self::ValidationError { .. } => "Correct the input value and try again",
            Self::NotFound { .. } => "List the collection to find a valid entry",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::IoError { path, .. } => format!("Could not access {}", path.display()),
            Self::ParseError { path, .. } => format!("{} is not a valid archive file", path.display()),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ArchiveError>;
