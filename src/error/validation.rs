use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum ValidationError {
    #[error("Invalid value: {source}")]
    InvalidNumber {
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Value must be >= {min}.")]
    ValueTooSmall { min: u64 },
    #[error("Slow percentage must be within 0-100, got {value}.")]
    InvalidPercentage { value: u64 },
    #[error("Rate must be greater than zero requests per minute.")]
    ZeroRate,
    #[error("Worker delay computation overflowed; lower the thread count.")]
    DelayOverflow,
    #[error("Invalid base URL '{value}'.")]
    InvalidBaseUrl { value: String },
    #[error("{0}")]
    Message(String),
}

impl From<String> for ValidationError {
    fn from(value: String) -> Self {
        ValidationError::Message(value)
    }
}

impl From<&str> for ValidationError {
    fn from(value: &str) -> Self {
        ValidationError::Message(value.to_owned())
    }
}
