//! Escalation chain for Relay.
//!
//! A support request is offered to an ordered chain of handlers. Each
//! handler is competent for one priority tier: it either resolves the
//! request or forwards it, unchanged, to the next handler. A request that
//! reaches the end of the chain unresolved is dropped silently unless the
//! chain is configured to report it.
//!
//! # Quick Start
//!
//! ```rust
//! use relay_chain::{ChainConfig, EscalationChain};
//! use relay_types::{Priority, SupportRequest};
//!
//! let chain = EscalationChain::with_default_handlers(ChainConfig::default());
//! let request = SupportRequest::new(2, "Software issue", Priority::Medium);
//! let outcome = chain.dispatch(&request).unwrap();
//! assert_eq!(outcome.resolution.unwrap().team, "Software");
//! ```

pub mod chain;
pub mod config;
pub mod error;
pub mod handler;
pub mod teams;

// Re-exports for convenience.
pub use chain::{DispatchOutcome, EscalationChain};
pub use config::ChainConfig;
pub use error::{EscalationError, EscalationResult};
pub use handler::{EscalationHandler, HandlerDecision, Resolution};
pub use teams::TeamHandler;
