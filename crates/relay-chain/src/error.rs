use relay_types::{Priority, RequestId};

/// Errors that can occur while dispatching a request.
///
/// With the default [`ChainConfig`](crate::ChainConfig) dispatching from the
/// head of a chain never produces an error.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EscalationError {
    /// No handler in the chain was competent for the request. Only reported
    /// when `report_unhandled` is enabled.
    #[error("support request {request_id} ({priority} priority) was not handled by any team")]
    Unhandled {
        request_id: RequestId,
        priority: Priority,
    },

    /// Dispatch was asked to enter the chain at a position that does not exist.
    #[error("no handler at position {index} (chain has {len} handlers)")]
    NoSuchHandler { index: usize, len: usize },
}

/// Result alias for escalation operations.
pub type EscalationResult<T> = Result<T, EscalationError>;
