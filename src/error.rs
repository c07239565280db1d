//! Error types for the college match engine

use thiserror::Error;

/// Main error type for the college match engine
#[derive(Error, Debug)]
pub enum MatchError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid criteria: {0}")]
    InvalidCriteria(String),

    #[error("Invalid tier policy: {0}")]
    InvalidPolicy(String),

    #[error("Catalog not initialized")]
    CatalogNotInitialized,
}

#[cfg(feature = "python")]
impl From<MatchError> for pyo3::PyErr {
    fn from(err: MatchError) -> pyo3::PyErr {
        use pyo3::exceptions::{PyRuntimeError, PyValueError};
        match err {
            MatchError::Json(e) => PyValueError::new_err(format!("JSON error: {}", e)),
            MatchError::InvalidCriteria(msg) => {
                PyValueError::new_err(format!("Invalid criteria: {}", msg))
            }
            MatchError::InvalidPolicy(msg) => {
                PyValueError::new_err(format!("Invalid tier policy: {}", msg))
            }
            MatchError::CatalogNotInitialized => {
                PyRuntimeError::new_err("Catalog not initialized. Call init_catalog() first.")
            }
        }
    }
}

/// Result type alias for the college match engine
pub type Result<T> = std::result::Result<T, MatchError>;
