use serde_json::Value;

/// A value that could not be read as a decimal number.
///
/// Carries the original input so callers can inspect or pass it through.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DecimalError {
    #[error("Value {value} is not numeric")]
    NotNumeric { value: Value },
}

impl DecimalError {
    /// The input that failed to parse.
    pub fn into_value(self) -> Value {
        match self {
            DecimalError::NotNumeric { value } => value,
        }
    }
}

/// Failure to obtain a usable currency conversion rate.
#[derive(Debug, thiserror::Error)]
pub enum RateError {
    #[error("Rate provider {provider} failed: {error:#}")]
    Provider {
        provider: String,
        error: anyhow::Error,
    },

    #[error("Rate provider {provider} returned an unusable rate: {value}")]
    Unusable { provider: String, value: String },
}
