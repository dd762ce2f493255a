//! Identity-based guards.
//!
//! `ControllerGuard` models the single controlling entity that owns the
//! hierarchy. `AllowListGuard` generalizes it to a fixed set of identities.

use crate::guard::AccessGuard;
use crate::types::{GuardDecision, GuardViolation};
use skilltree_core::{Identity, IndexConfig};
use std::collections::BTreeSet;

/// Accepts exactly one controller identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerGuard {
    controller: Identity,
}

impl ControllerGuard {
    /// Create a guard for `controller`.
    pub fn new(controller: impl Into<Identity>) -> Self {
        Self {
            controller: controller.into(),
        }
    }

    /// Guard for the controller named in an index configuration.
    pub fn from_config(config: &IndexConfig) -> Self {
        Self::new(config.controller.clone())
    }

    /// The identity this guard accepts.
    pub fn controller(&self) -> &Identity {
        &self.controller
    }
}

impl AccessGuard for ControllerGuard {
    fn is_authorized(&self, caller: &Identity) -> bool {
        !caller.is_blank() && caller == &self.controller
    }

    fn check(&self, caller: &Identity) -> GuardDecision {
        if caller.is_blank() {
            GuardDecision::Deny(GuardViolation::BlankIdentity)
        } else if caller == &self.controller {
            GuardDecision::Allow
        } else {
            tracing::trace!(caller = %caller, controller = %self.controller, "controller mismatch");
            GuardDecision::Deny(GuardViolation::NotController {
                caller: caller.clone(),
            })
        }
    }
}

/// Accepts any identity from a fixed set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowListGuard {
    allowed: BTreeSet<Identity>,
}

impl AllowListGuard {
    /// Create a guard from any collection of identities.
    pub fn new<I, T>(identities: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Identity>,
    {
        Self {
            allowed: identities
                .into_iter()
                .map(Into::into)
                .filter(|id: &Identity| !id.is_blank())
                .collect(),
        }
    }

    /// Number of allowed identities.
    pub fn len(&self) -> usize {
        self.allowed.len()
    }

    /// Returns `true` if nobody is allowed.
    pub fn is_empty(&self) -> bool {
        self.allowed.is_empty()
    }
}

impl AccessGuard for AllowListGuard {
    fn is_authorized(&self, caller: &Identity) -> bool {
        self.allowed.contains(caller)
    }

    fn check(&self, caller: &Identity) -> GuardDecision {
        if caller.is_blank() {
            GuardDecision::Deny(GuardViolation::BlankIdentity)
        } else if self.allowed.contains(caller) {
            GuardDecision::Allow
        } else {
            GuardDecision::Deny(GuardViolation::NotAllowListed {
                caller: caller.clone(),
            })
        }
    }
}
