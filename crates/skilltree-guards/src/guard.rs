//! The access guard contract.

use crate::types::{GuardDecision, GuardViolation};
use skilltree_core::Identity;
use std::sync::Arc;

/// Read-only authorization oracle consulted before every hierarchy mutation.
pub trait AccessGuard {
    /// Returns `true` if `caller` may insert nodes.
    fn is_authorized(&self, caller: &Identity) -> bool;

    /// Evaluate `caller` and explain a refusal.
    ///
    /// Must agree with [`AccessGuard::is_authorized`].
    fn check(&self, caller: &Identity) -> GuardDecision {
        if self.is_authorized(caller) {
            GuardDecision::Allow
        } else {
            GuardDecision::Deny(GuardViolation::other(format!(
                "{caller} rejected by access guard"
            )))
        }
    }
}

impl<G: AccessGuard + ?Sized> AccessGuard for &G {
    fn is_authorized(&self, caller: &Identity) -> bool {
        (**self).is_authorized(caller)
    }

    fn check(&self, caller: &Identity) -> GuardDecision {
        (**self).check(caller)
    }
}

impl<G: AccessGuard + ?Sized> AccessGuard for Arc<G> {
    fn is_authorized(&self, caller: &Identity) -> bool {
        (**self).is_authorized(caller)
    }

    fn check(&self, caller: &Identity) -> GuardDecision {
        (**self).check(caller)
    }
}

impl<G: AccessGuard + ?Sized> AccessGuard for Box<G> {
    fn is_authorized(&self, caller: &Identity) -> bool {
        (**self).is_authorized(caller)
    }

    fn check(&self, caller: &Identity) -> GuardDecision {
        (**self).check(caller)
    }
}

/// Guard backed by a predicate, handy for mocks.
pub struct FnGuard<F>(pub F);

impl<F> AccessGuard for FnGuard<F>
where
    F: Fn(&Identity) -> bool,
{
    fn is_authorized(&self, caller: &Identity) -> bool {
        (self.0)(caller)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn default_check_agrees_with_predicate() {
        let guard = FnGuard(|caller: &Identity| caller.as_str() == "ok");
        assert!(guard.check(&Identity::new("ok")).is_allowed());
        assert!(!guard.check(&Identity::new("nope")).is_allowed());
    }

    #[test]
    fn guard_is_consulted_through_references() {
        let calls = Cell::new(0);
        let guard = FnGuard(|_: &Identity| {
            calls.set(calls.get() + 1);
            true
        });
        let by_ref = &guard;
        assert!(by_ref.is_authorized(&Identity::new("a")));
        assert!(by_ref.check(&Identity::new("b")).is_allowed());
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn boxed_dyn_guard() {
        let guard: Box<dyn AccessGuard> = Box::new(FnGuard(|_: &Identity| false));
        assert!(!guard.is_authorized(&Identity::new("anyone")));
    }
}
