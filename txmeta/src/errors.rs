use thiserror::Error;

/// Errors that can occur while reading or writing transaction records
#[derive(Debug, Eq, PartialEq, Error)]
pub enum TransactionParseError {
    #[error("Invalid transaction record: {0}")]
    InvalidRecord(String),
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),
}
