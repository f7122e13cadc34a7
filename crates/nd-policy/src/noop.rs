//! A no-op policy: never acts.

use crate::{Decision, Policy, TwinSnapshot};

/// A [`Policy`] that always returns [`Decision::NoOp`].
///
/// Useful as a placeholder in tests, or as a floor for the comparison: the
/// session never moves, so only device idle/active draw is accrued.
pub struct NoopPolicy;

impl Policy for NoopPolicy {
    fn name(&self) -> &str {
        "Noop"
    }

    fn decide(&self, _snapshot: &TwinSnapshot<'_>) -> Decision {
        Decision::NoOp
    }
}
