//! Query parameter validation errors.

/// Invalid query parameters. Maps to a client error at the HTTP layer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("page must be at least 1, got {0}")]
    InvalidPage(u64),

    #[error("per_page must be at least 1, got {0}")]
    InvalidPerPage(u64),
}
