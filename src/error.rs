use thiserror::Error;

/// Main error type for Rankeval
#[derive(Error, Debug)]
pub enum RankevalError {
    /// Explicit precondition violation (e.g. batch length mismatch)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// File system I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Case-file parse errors
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Convenient Result type using RankevalError
pub type Result<T> = std::result::Result<T, RankevalError>;
