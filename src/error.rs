//! Error types for query operators.

use thiserror::Error;

/// Errors raised by terminal operators and fallible sorts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// No element was available to satisfy the request.
    ///
    /// Returned both for an empty sequence and for a predicate that never
    /// matched.
    #[error("sequence contains no matching element")]
    EmptySequence,

    /// A sort key had no usable ordering (e.g. a NaN float key).
    #[error("{operator}: sort keys have no total order")]
    InvalidComparer { operator: &'static str },
}

pub type Result<T> = std::result::Result<T, QueryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            QueryError::EmptySequence.to_string(),
            "sequence contains no matching element"
        );
        let err = QueryError::InvalidComparer {
            operator: "try_order_by",
        };
        assert_eq!(err.to_string(), "try_order_by: sort keys have no total order");
    }
}
