use std::fmt;

use relay_types::{RequestId, SupportRequest};
use serde::Serialize;

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Record of a handler taking ownership of a request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// The request that was resolved.
    pub request_id: RequestId,
    /// Team that handles the request (e.g. "Hardware").
    pub team: String,
    /// Name of the handler in the chain that resolved it.
    pub handler: String,
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} team handles support request: {}",
            self.team, self.request_id
        )
    }
}

// ---------------------------------------------------------------------------
// HandlerDecision
// ---------------------------------------------------------------------------

/// The outcome of offering a request to a single handler.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HandlerDecision {
    /// The handler resolved the request; the chain stops here.
    Resolved(Resolution),
    /// The handler is not competent; pass the request on unchanged.
    Forward,
}

impl HandlerDecision {
    /// Returns `true` if the decision is `Resolved`.
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }
}

// ---------------------------------------------------------------------------
// EscalationHandler trait
// ---------------------------------------------------------------------------

/// A single node in an escalation chain.
///
/// Handlers never hold a reference to their successor. The chain that owns
/// them decides what comes next, so the same handler types can be composed
/// in any order.
///
/// The trait is object-safe and `Send + Sync` so handlers can be stored in
/// a `Vec<Box<dyn EscalationHandler>>`.
pub trait EscalationHandler: Send + Sync {
    /// Human-readable name of this handler (e.g., "hardware").
    fn name(&self) -> &str;

    /// Either resolve the request or ask for it to be forwarded.
    fn handle(&self, request: &SupportRequest) -> HandlerDecision;
}
