//! The `Policy` trait: the extension point for decision-making agents.

use std::sync::Arc;

use crate::{Decision, TwinSnapshot};

/// Pluggable decision policy.
///
/// Implement this trait to define how the session-management agent reacts
/// to the world each step.  [`decide`][Self::decide] receives a read-only
/// [`TwinSnapshot`] and returns at most one action, evaluated as an ordered
/// if-chain where the first matching rule wins.
///
/// # Thread safety
///
/// Independent comparison runs may execute on Rayon's thread pool with the
/// same policy instance, so implementations must be `Send + Sync`.  Anything
/// a policy needs to know about the run must come through the snapshot.
///
/// # Example
///
/// ```rust
/// use nd_core::QualityLevel;
/// use nd_policy::{Decision, Policy, TwinSnapshot};
///
/// struct AlwaysStandard;
///
/// impl Policy for AlwaysStandard {
///     fn name(&self) -> &str { "AlwaysStandard" }
///
///     fn decide(&self, snapshot: &TwinSnapshot<'_>) -> Decision {
///         if snapshot.quality() == QualityLevel::High {
///             Decision::AdjustQos { level: QualityLevel::Standard }
///         } else {
///             Decision::NoOp
///         }
///     }
/// }
/// ```
pub trait Policy: Send + Sync + 'static {
    /// Label used as the key in comparison results.
    fn name(&self) -> &str;

    /// Called exactly once per step.
    fn decide(&self, snapshot: &TwinSnapshot<'_>) -> Decision;
}

impl<P: Policy + ?Sized> Policy for Box<P> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn decide(&self, snapshot: &TwinSnapshot<'_>) -> Decision {
        (**self).decide(snapshot)
    }
}

impl<P: Policy + ?Sized> Policy for Arc<P> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn decide(&self, snapshot: &TwinSnapshot<'_>) -> Decision {
        (**self).decide(snapshot)
    }
}
