//! Reactive baseline.

use crate::{Decision, Policy, TwinSnapshot};

/// Stays passive until the user acts, then performs a full handover.
///
/// Never anticipates: a handover under this policy always takes the slow
/// path unless something else prepared the target.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReactivePolicy;

impl Policy for ReactivePolicy {
    fn name(&self) -> &str {
        "Reactive"
    }

    fn decide(&self, snapshot: &TwinSnapshot<'_>) -> Decision {
        if snapshot.is_user_switching {
            return Decision::ExecuteMigration;
        }
        Decision::NoOp
    }
}
