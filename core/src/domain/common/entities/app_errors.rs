use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Invalid sort column: {0}")]
    InvalidSortColumn(String),

    #[error("Invalid sort direction: {0}")]
    InvalidSortDirection(String),

    #[error("Invalid pagination")]
    InvalidPagination,

    #[error("Invalid sell status: {0}")]
    InvalidSellStatus(String),

    #[error("Store unavailable")]
    StoreUnavailable,

    #[error("Store timeout")]
    StoreTimeout,

    #[error("Internal server error")]
    InternalServerError,
}

impl CoreError {
    /// Transient store failures; the caller owns the retry policy.
    pub fn is_retryable(&self) -> bool {
        matches!(self, CoreError::StoreUnavailable | CoreError::StoreTimeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_store_failures_are_retryable() {
        assert!(CoreError::StoreUnavailable.is_retryable());
        assert!(CoreError::StoreTimeout.is_retryable());
        assert!(!CoreError::InvalidPagination.is_retryable());
        assert!(!CoreError::InvalidSortColumn("rating".to_string()).is_retryable());
        assert!(!CoreError::InternalServerError.is_retryable());
    }
}
