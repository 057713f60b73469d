use thiserror::Error;
use tracing::error;

/// Error types for the forecast model crate
#[derive(Error, Debug)]
pub enum ForecastError {
    /// The model file could not be read
    #[error("Model file error: {0}")]
    Io(#[from] std::io::Error),

    /// The model file does not contain a valid serialized model
    #[error("Model deserialization error: {0}")]
    Deserialization(#[from] serde_json::Error),

    /// The deserialized model violates a structural invariant
    #[error("Invalid model definition: {0}")]
    Model(String),

    /// Error from Polars DataFrame operations
    #[error("DataFrame error: {0}")]
    DataFrame(String),

    /// Error from date arithmetic
    #[error("Date error: {0}")]
    Date(String),
}

impl From<polars::error::PolarsError> for ForecastError {
    fn from(error: polars::error::PolarsError) -> Self {
        let err = ForecastError::DataFrame(error.to_string());
        error!(?err, "DataFrame error");
        err
    }
}

/// Type alias for Result with ForecastError
pub type Result<T> = std::result::Result<T, ForecastError>;
