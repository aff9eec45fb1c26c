use thiserror::Error;

/// Custom error type for the lossbox crate.
///
/// Every variant is a synchronous, non-retryable configuration or
/// programming error surfaced directly to the caller.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum LossBoxError {
    #[error("Invalid config: field '{field}': {message}")]
    InvalidConfig { field: String, message: String },

    #[error("Unknown loss '{name}'. Registered losses: {registered:?}")]
    UnknownLoss {
        name: String,
        registered: Vec<String>,
    },

    #[error("Loss '{name}' is already registered")]
    DuplicateRegistration { name: String },

    #[error("Shape mismatch: expected {expected} elements, got {actual} during operation {operation}")]
    ShapeMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Empty input during operation {operation}")]
    EmptyInput { operation: String },

    #[error("Config parse error: {0}")]
    ConfigParse(String),

    #[error("Registry lock poisoned: {0}")]
    Lock(String),
}

impl LossBoxError {
    /// Shorthand for the most common failure: a missing or malformed
    /// hyperparameter field.
    pub fn invalid_config(field: impl Into<String>, message: impl Into<String>) -> Self {
        LossBoxError::InvalidConfig {
            field: field.into(),
            message: message.into(),
        }
    }
}
