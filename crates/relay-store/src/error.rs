use relay_types::DocumentId;

/// Errors from document store operations.
///
/// With the default [`StoreConfig`](crate::StoreConfig) the in-memory store
/// never returns any of these: missing documents are reported as `None`,
/// an empty result list, or `false`.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    /// A document with this ID is already stored and duplicates are rejected.
    #[error("document {0} already exists")]
    DuplicateId(DocumentId),

    /// No document with this ID exists and missing edits are reported.
    #[error("document not found: {0}")]
    NotFound(DocumentId),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
