//! Myopic-adaptive baseline.

use nd_core::QualityLevel;

use crate::{Decision, Policy, ReactivePolicy, TwinSnapshot};

/// Adapts to the *current* link but cannot foresee a switch.
///
/// Lowers quality to `Standard` whenever the session renders at `High` over
/// 5G, otherwise behaves exactly like [`ReactivePolicy`].
#[derive(Debug, Default, Clone, Copy)]
pub struct MyopicPolicy;

impl Policy for MyopicPolicy {
    fn name(&self) -> &str {
        "Myopic"
    }

    fn decide(&self, snapshot: &TwinSnapshot<'_>) -> Decision {
        if snapshot.network.is_degraded_high_quality() {
            return Decision::AdjustQos { level: QualityLevel::Standard };
        }
        ReactivePolicy.decide(snapshot)
    }
}
