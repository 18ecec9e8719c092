//! Error types and exit codes for lexis
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (storage, IO)
//! - 2: Usage error (validation, bad arguments, malformed import file)
//! - 3: Data error (missing entry, missing or invalid lexicon file)

mod macros;

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the lexis CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - validation, bad flags/args, malformed input (2)
    Usage = 2,
    /// Data error - missing entry, invalid lexicon (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Distinguishable error kind surfaced at the boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Storage,
    InvalidArgument,
    Format,
    InvalidLexicon,
    AlreadyExists,
    Io,
    Cancelled,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "validation",
            ErrorKind::NotFound => "not_found",
            ErrorKind::Storage => "storage",
            ErrorKind::InvalidArgument => "invalid_argument",
            ErrorKind::Format => "format",
            ErrorKind::InvalidLexicon => "invalid_lexicon",
            ErrorKind::AlreadyExists => "already_exists",
            ErrorKind::Io => "io",
            ErrorKind::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<rusqlite::Error> for LexisError {
    fn from(err: rusqlite::Error) -> Self {
        LexisError::Storage {
            operation: "query lexicon".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Errors that can occur during lexicon operations
#[derive(Error, Debug)]
pub enum LexisError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    Validation(String),

    #[error("invalid {context}: {value}")]
    InvalidArgument { context: String, value: String },

    #[error("malformed {format} input: {reason}")]
    Format { format: String, reason: String },

    // Data errors (exit code 3)
    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    #[error("not a valid lexicon: {path:?} ({reason})")]
    InvalidLexicon { path: PathBuf, reason: String },

    #[error("{context} already exists: {value}")]
    AlreadyExists { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("failed to {operation}: {reason}")]
    Storage { operation: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("operation cancelled: {0}")]
    Cancelled(String),
}

impl LexisError {
    /// Create an error for a failed database operation
    pub fn db_operation(operation: &str, error: impl fmt::Display) -> Self {
        LexisError::Storage {
            operation: operation.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for a failed transaction
    pub fn transaction(operation: &str, error: impl fmt::Display) -> Self {
        LexisError::Storage {
            operation: format!("{} transaction", operation),
            reason: error.to_string(),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        LexisError::Validation(message.into())
    }

    /// Create an error for an invalid caller-supplied value
    pub fn invalid_argument(context: &str, value: impl fmt::Display) -> Self {
        LexisError::InvalidArgument {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a record that does not exist
    pub fn not_found(context: &str, value: impl fmt::Display) -> Self {
        LexisError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for something that should not exist yet
    pub fn already_exists(context: &str, value: impl fmt::Display) -> Self {
        LexisError::AlreadyExists {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a malformed import file
    pub fn format(format: &str, reason: impl fmt::Display) -> Self {
        LexisError::Format {
            format: format.to_string(),
            reason: reason.to_string(),
        }
    }

    /// The distinguishable kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            LexisError::Validation(_) => ErrorKind::Validation,
            LexisError::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            LexisError::Format { .. } | LexisError::Json(_) | LexisError::Csv(_) => {
                ErrorKind::Format
            }
            LexisError::Toml(_) => ErrorKind::InvalidArgument,
            LexisError::NotFound { .. } => ErrorKind::NotFound,
            LexisError::InvalidLexicon { .. } => ErrorKind::InvalidLexicon,
            LexisError::AlreadyExists { .. } => ErrorKind::AlreadyExists,
            LexisError::Storage { .. } => ErrorKind::Storage,
            LexisError::Io(_) => ErrorKind::Io,
            LexisError::Cancelled(_) => ErrorKind::Cancelled,
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self.kind() {
            ErrorKind::Validation | ErrorKind::InvalidArgument | ErrorKind::Format => {
                ExitCode::Usage
            }
            ErrorKind::NotFound | ErrorKind::InvalidLexicon | ErrorKind::AlreadyExists => {
                ExitCode::Data
            }
            ErrorKind::Storage | ErrorKind::Io => ExitCode::Failure,
            ErrorKind::Cancelled => ExitCode::Success,
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.kind().as_str(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for lexicon operations
pub type Result<T> = std::result::Result<T, LexisError>;
