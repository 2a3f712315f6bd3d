//! Error types for dataset construction.

use types::PassengerId;

/// Result type for dataset operations.
pub type Result<T> = std::result::Result<T, DatasetError>;

/// Reasons a dataset cannot be built. All of them are fatal at startup.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DatasetError {
    /// A dataset must contain at least one record.
    #[error("dataset is empty")]
    Empty,

    /// Identifiers must run 1..=N in order.
    #[error("expected passenger id {expected}, found {found}")]
    NonDenseId { expected: u64, found: PassengerId },

    #[error("{id} has age {age}, outside {min}..={max}")]
    InvalidAge {
        id: PassengerId,
        age: u8,
        min: u8,
        max: u8,
    },

    #[error("{id} has invalid fare {fare}")]
    InvalidFare { id: PassengerId, fare: f64 },

    /// Generator parameters that cannot produce valid records.
    #[error("invalid generator config: {0}")]
    InvalidConfig(String),
}
