use thiserror::Error;

/// JSON-related errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum JsonError {
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid cast: expected {expected}, found {found}")]
    InvalidCast {
        expected: &'static str,
        found: &'static str,
    },
}

impl From<serde_json::Error> for JsonError {
    fn from(err: serde_json::Error) -> Self {
        JsonError::ParseError(err.to_string())
    }
}

/// Result type for JSON operations
pub type JsonResult<T> = Result<T, JsonError>;
