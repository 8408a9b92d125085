use showroom_domain::DateRangeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Account not found: {0}")]
    AccountNotFound(String),
    #[error("Account name is ambiguous: {0}")]
    AmbiguousAccount(String),
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<DateRangeError> for CoreError {
    fn from(err: DateRangeError) -> Self {
        CoreError::InvalidInput(err.to_string())
    }
}
