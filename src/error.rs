//! Error types for the native bridge
//!
//! Multiplication itself is infallible. These cover the ambient pieces
//! around it: logger setup, descriptor serialization and input handling.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BridgeError>;

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown module: {0}")]
    UnknownModule(String),

    #[error("Logging setup failed: {0}")]
    Logging(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<tracing_subscriber::filter::ParseError> for BridgeError {
    fn from(err: tracing_subscriber::filter::ParseError) -> Self {
        BridgeError::InvalidInput(format!("log filter: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BridgeError::UnknownModule("Foo".to_string());
        assert_eq!(err.to_string(), "Unknown module: Foo");
    }

    #[test]
    fn test_json_error_conversion() {
        let parse: std::result::Result<serde_json::Value, _> = serde_json::from_str("{");
        let err: BridgeError = parse.unwrap_err().into();
        assert!(matches!(err, BridgeError::Json(_)));
    }
}
