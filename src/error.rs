use std::fmt;
use std::path::PathBuf;

/// Main error type for recordtier
#[derive(Debug)]
pub enum TierError {
    /// IO-related errors with context
    Io {
        path: Option<PathBuf>,
        operation: String,
        source: std::io::Error,
    },
    /// JSON parsing or rendering errors
    Json {
        context: String,
        source: serde_json::Error,
    },
    /// Record input that does not have the expected shape
    Input {
        message: String,
    },
    /// Validation errors
    Validation {
        field: String,
        reason: String,
    },
}

impl fmt::Display for TierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, operation, source } => {
                if let Some(p) = path {
                    write!(f, "IO error during {operation} on {p:?}: {source}")
                } else {
                    write!(f, "IO error during {operation}: {source}")
                }
            }
            Self::Json { context, source } => {
                write!(f, "JSON error in {context}: {source}")
            }
            Self::Input { message } => {
                write!(f, "Invalid record input: {message}")
            }
            Self::Validation { field, reason } => {
                write!(f, "Validation error for field '{field}': {reason}")
            }
        }
    }
}

impl std::error::Error for TierError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Result type alias for recordtier operations
pub type TierResult<T> = Result<T, TierError>;

/// Attaches an operation description (and optionally a path) to a fallible result
pub trait ErrorContext<T> {
    fn with_operation(self, operation: &str, path: Option<PathBuf>) -> TierResult<T>;
}

impl<T> ErrorContext<T> for Result<T, std::io::Error> {
    fn with_operation(self, operation: &str, path: Option<PathBuf>) -> TierResult<T> {
        self.map_err(|e| TierError::Io {
            path,
            operation: operation.to_string(),
            source: e,
        })
    }
}

impl<T> ErrorContext<T> for Result<T, serde_json::Error> {
    fn with_operation(self, operation: &str, path: Option<PathBuf>) -> TierResult<T> {
        self.map_err(|e| TierError::Json {
            context: match path {
                Some(p) => format!("{operation} ({})", p.display()),
                None => operation.to_string(),
            },
            source: e,
        })
    }
}

// Allow using ? with io::Error
impl From<std::io::Error> for TierError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            operation: "unspecified".to_string(),
            source: err,
        }
    }
}

// Allow using ? with serde_json::Error
impl From<serde_json::Error> for TierError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json {
            context: "unspecified".to_string(),
            source: err,
        }
    }
}
