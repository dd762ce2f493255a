//! Guard decision vocabulary
//!
//! Guards answer a yes/no question, but callers that log or surface a refusal
//! want to know why. `GuardDecision` carries that reason alongside the verdict.

use serde::{Deserialize, Serialize};
use skilltree_core::Identity;

/// Structured guard violation reasons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuardViolation {
    /// Caller is not the hierarchy's controller
    NotController { caller: Identity },
    /// Caller is not in the guard's allow list
    NotAllowListed { caller: Identity },
    /// Caller identity is empty
    BlankIdentity,
    Other(String),
}

impl GuardViolation {
    pub fn other(reason: impl Into<String>) -> Self {
        Self::Other(reason.into())
    }
}

impl std::fmt::Display for GuardViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GuardViolation::NotController { caller } => {
                write!(f, "{caller} is not the hierarchy controller")
            }
            GuardViolation::NotAllowListed { caller } => {
                write!(f, "{caller} is not on the allow list")
            }
            GuardViolation::BlankIdentity => write!(f, "caller identity is blank"),
            GuardViolation::Other(reason) => write!(f, "{reason}"),
        }
    }
}

/// Verdict of one guard check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuardDecision {
    /// The caller may insert
    Allow,
    /// The caller is refused
    Deny(GuardViolation),
}

impl GuardDecision {
    /// Returns `true` if the caller may insert.
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }

    /// Why the caller was refused, if it was.
    pub fn denial_reason(&self) -> Option<&GuardViolation> {
        match self {
            Self::Allow => None,
            Self::Deny(reason) => Some(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deny_exposes_reason() {
        let decision = GuardDecision::Deny(GuardViolation::BlankIdentity);
        assert!(!decision.is_allowed());
        assert_eq!(
            decision.denial_reason(),
            Some(&GuardViolation::BlankIdentity)
        );
        assert!(GuardDecision::Allow.denial_reason().is_none());
    }

    #[test]
    fn violation_display() {
        let violation = GuardViolation::NotController {
            caller: Identity::new("mallory"),
        };
        assert_eq!(violation.to_string(), "mallory is not the hierarchy controller");
    }
}
