//! Data Layer Errors

use serde::{Deserialize, Serialize};

/// Common result type for data-access operations
pub type DataResult<T> = Result<T, DataError>;

/// Data-access errors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DataError {
    NotFound(String),
    InvalidInput(String),
    Backend(String),
}

impl std::fmt::Display for DataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataError::NotFound(msg) => write!(f, "Not found: {}", msg),
            DataError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            DataError::Backend(msg) => write!(f, "Backend error: {}", msg),
        }
    }
}

impl std::error::Error for DataError {}

impl From<serde_wasm_bindgen::Error> for DataError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        DataError::Backend(err.to_string())
    }
}
