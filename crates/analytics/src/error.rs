use thiserror::Error;

use ledgerscope_core::DomainError;

/// Failure of an analytics call.
///
/// Sparse or degenerate data never produces an error (it yields fallback values);
/// these variants signal inputs or configuration the engine refuses to interpret.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalyticsError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl AnalyticsError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

impl From<DomainError> for AnalyticsError {
    fn from(err: DomainError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}
