use thiserror::Error;

/// Unified error type for the approximation toolkit.
#[derive(Error, Debug)]
pub enum ApproxError {
    #[error("singular system: no usable pivot in column {column}")]
    SingularSystem { column: usize },

    #[error("domain error at x = {x}: {message}")]
    DomainError { x: f64, message: String },

    #[error("iteration did not converge: stopped at x = {x} after {iterations} iterations")]
    NonConvergence { x: f64, iterations: usize },

    #[error("invalid sample table: {0}")]
    InvalidTable(String),

    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used across all approximation crates.
pub type ApproxResult<T> = Result<T, ApproxError>;
