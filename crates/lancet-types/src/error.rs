use thiserror::Error;

/// Boxed error from the underlying database client or Arrow layer.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors from vector store operations (used by the trait in lancet-core).
///
/// Backend failures are carried as their original error value so callers
/// can downcast to the client's own error type.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to connect to vector database at '{uri}'")]
    Connection {
        uri: String,
        #[source]
        source: BoxError,
    },

    #[error(transparent)]
    Backend(BoxError),

    #[error("malformed result row: column '{column}' {reason}")]
    MalformedRow { column: String, reason: String },

    #[error("invalid store config: {0}")]
    InvalidConfig(String),
}

impl StoreError {
    /// Wrap a client error without altering it.
    pub fn backend<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        StoreError::Backend(Box::new(err))
    }

    /// Shorthand for a result batch that lacks `column`.
    pub fn missing_column(column: &str) -> Self {
        StoreError::MalformedRow {
            column: column.to_string(),
            reason: "is missing".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_error_is_transparent() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
        let err = StoreError::backend(io);
        assert_eq!(err.to_string(), "disk on fire");

        match err {
            StoreError::Backend(inner) => {
                assert!(inner.downcast_ref::<std::io::Error>().is_some());
            }
            other => panic!("Expected Backend, got {other:?}"),
        }
    }

    #[test]
    fn test_connection_error_keeps_source() {
        let err = StoreError::Connection {
            uri: "/tmp/nowhere".to_string(),
            source: Box::new(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "denied",
            )),
        };
        assert!(err.to_string().contains("/tmp/nowhere"));
        let source = std::error::Error::source(&err).expect("source should be set");
        assert_eq!(source.to_string(), "denied");
    }

    #[test]
    fn test_missing_column_display() {
        let err = StoreError::missing_column("doc_id");
        assert_eq!(err.to_string(), "malformed result row: column 'doc_id' is missing");
    }
}
