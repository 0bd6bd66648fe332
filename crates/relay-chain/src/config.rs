use serde::{Deserialize, Serialize};

/// Configuration for an escalation chain.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainConfig {
    /// When `true`, a request that no handler resolves is reported as
    /// [`EscalationError::Unhandled`](crate::EscalationError::Unhandled)
    /// instead of being dropped silently.
    pub report_unhandled: bool,
}

impl ChainConfig {
    /// A configuration that surfaces unhandled requests as errors.
    pub fn strict() -> Self {
        Self {
            report_unhandled: true,
        }
    }
}
