use relay_types::{Priority, SupportRequest};

use crate::handler::{EscalationHandler, HandlerDecision, Resolution};

/// A support team competent for exactly one priority tier.
///
/// The competence predicate is `request.priority == tier`. On a match the
/// team reports that it handles the request; otherwise it forwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TeamHandler {
    name: String,
    team: String,
    tier: Priority,
}

impl TeamHandler {
    /// A handler for `team` bound to `tier`. The handler name is the team
    /// name in lower case.
    pub fn new(team: impl Into<String>, tier: Priority) -> Self {
        let team = team.into();
        Self {
            name: team.to_lowercase(),
            team,
            tier,
        }
    }

    /// The hardware team handles low-priority requests.
    pub fn hardware() -> Self {
        Self::new("Hardware", Priority::Low)
    }

    /// The software team handles medium-priority requests.
    pub fn software() -> Self {
        Self::new("Software", Priority::Medium)
    }

    /// The network team handles high-priority requests.
    pub fn network() -> Self {
        Self::new("Network", Priority::High)
    }

    pub fn team(&self) -> &str {
        &self.team
    }

    pub fn tier(&self) -> Priority {
        self.tier
    }

    fn is_competent(&self, request: &SupportRequest) -> bool {
        request.priority == self.tier
    }
}

impl EscalationHandler for TeamHandler {
    fn name(&self) -> &str {
        &self.name
    }

    fn handle(&self, request: &SupportRequest) -> HandlerDecision {
        if !self.is_competent(request) {
            return HandlerDecision::Forward;
        }

        let resolution = Resolution {
            request_id: request.id,
            team: self.team.clone(),
            handler: self.name.clone(),
        };
        tracing::info!(
            team = %self.team,
            request = %request.id,
            priority = %request.priority,
            "{resolution}"
        );
        HandlerDecision::Resolved(resolution)
    }
}
