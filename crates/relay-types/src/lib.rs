//! Shared value types for Relay.
//!
//! Both the escalation chain and the document access layer build on the
//! records defined here. Every type is a plain value: cloned freely, never
//! mutated after construction.
//!
//! # Key Types
//!
//! - [`SupportRequest`] — a request routed through an escalation chain
//! - [`Priority`] — the tier that decides which handler resolves a request
//! - [`Document`] — a titled piece of content with string metadata
//! - [`RequestId`], [`DocumentId`] — integer identifiers

pub mod document;
pub mod error;
pub mod request;

pub use document::{Document, DocumentId};
pub use error::TypeError;
pub use request::{Priority, RequestId, SupportRequest};
