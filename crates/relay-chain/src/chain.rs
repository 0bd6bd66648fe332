use relay_types::SupportRequest;
use serde::Serialize;

use crate::config::ChainConfig;
use crate::error::{EscalationError, EscalationResult};
use crate::handler::{EscalationHandler, HandlerDecision, Resolution};
use crate::teams::TeamHandler;

// ---------------------------------------------------------------------------
// DispatchOutcome
// ---------------------------------------------------------------------------

/// The outcome of routing one request through a chain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DispatchOutcome {
    /// The resolving handler's report, or `None` if the request was dropped.
    pub resolution: Option<Resolution>,
    /// Names of the handlers that saw the request, in order.
    pub visited: Vec<String>,
}

impl DispatchOutcome {
    /// Returns `true` if some handler resolved the request.
    pub fn is_handled(&self) -> bool {
        self.resolution.is_some()
    }
}

// ---------------------------------------------------------------------------
// EscalationChain
// ---------------------------------------------------------------------------

/// An ordered chain of handlers.
///
/// The chain owns its handlers; the successor of the handler at position
/// `i` is the handler at `i + 1`. A request is offered to each handler in
/// turn until one resolves it. The first resolution ends dispatch.
pub struct EscalationChain {
    handlers: Vec<Box<dyn EscalationHandler>>,
    config: ChainConfig,
}

impl EscalationChain {
    /// Create an empty chain with the given configuration.
    ///
    /// Use [`Self::add_handler`] to add handlers, or
    /// [`Self::with_default_handlers`] for the standard wiring.
    pub fn new(config: ChainConfig) -> Self {
        Self {
            handlers: Vec::new(),
            config,
        }
    }

    /// Create a chain with the default wiring:
    /// Hardware (low) -> Software (medium) -> Network (high)
    pub fn with_default_handlers(config: ChainConfig) -> Self {
        let mut chain = Self::new(config);
        chain.add_handler(Box::new(TeamHandler::hardware()));
        chain.add_handler(Box::new(TeamHandler::software()));
        chain.add_handler(Box::new(TeamHandler::network()));
        chain
    }

    /// Append a handler to the end of the chain.
    pub fn add_handler(&mut self, handler: Box<dyn EscalationHandler>) {
        self.handlers.push(handler);
    }

    /// Builder-style variant of [`Self::add_handler`].
    pub fn then(mut self, handler: impl EscalationHandler + 'static) -> Self {
        self.add_handler(Box::new(handler));
        self
    }

    pub fn config(&self) -> &ChainConfig {
        &self.config
    }

    /// Number of handlers in the chain.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Handler names in chain order.
    pub fn handler_names(&self) -> Vec<&str> {
        self.handlers.iter().map(|h| h.name()).collect()
    }

    /// Route a request starting at the head of the chain.
    pub fn dispatch(&self, request: &SupportRequest) -> EscalationResult<DispatchOutcome> {
        self.walk(0, request)
    }

    /// Route a request starting at the handler at position `entry`.
    ///
    /// Handlers before `entry` never see the request. An empty chain accepts
    /// `entry == 0` and drops the request.
    pub fn dispatch_from(
        &self,
        entry: usize,
        request: &SupportRequest,
    ) -> EscalationResult<DispatchOutcome> {
        if entry > 0 && entry >= self.handlers.len() {
            return Err(EscalationError::NoSuchHandler {
                index: entry,
                len: self.handlers.len(),
            });
        }
        self.walk(entry, request)
    }

    fn walk(&self, entry: usize, request: &SupportRequest) -> EscalationResult<DispatchOutcome> {
        let mut visited = Vec::with_capacity(self.handlers.len().saturating_sub(entry));

        for handler in self.handlers.iter().skip(entry) {
            visited.push(handler.name().to_string());

            match handler.handle(request) {
                HandlerDecision::Resolved(resolution) => {
                    return Ok(DispatchOutcome {
                        resolution: Some(resolution),
                        visited,
                    });
                }
                HandlerDecision::Forward => {
                    tracing::debug!(
                        handler = handler.name(),
                        request = %request.id,
                        "forwarding support request"
                    );
                }
            }
        }

        if self.config.report_unhandled {
            tracing::warn!(
                request = %request.id,
                priority = %request.priority,
                "support request reached the end of the chain unhandled"
            );
            return Err(EscalationError::Unhandled {
                request_id: request.id,
                priority: request.priority,
            });
        }

        Ok(DispatchOutcome {
            resolution: None,
            visited,
        })
    }
}

impl Default for EscalationChain {
    fn default() -> Self {
        Self::with_default_handlers(ChainConfig::default())
    }
}

impl std::fmt::Debug for EscalationChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EscalationChain")
            .field("handlers", &self.handler_names())
            .field("config", &self.config)
            .finish()
    }
}
