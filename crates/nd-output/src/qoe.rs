//! Quality-of-experience curve derived from a run's handover latency.

use nd_core::Step;

/// Score while the session is usable.
pub const QOE_EXCELLENT: f64 = 5.0;
/// Score while the user waits for a slow handover.
pub const QOE_POOR: f64 = 1.5;

/// Per-step QoE for a run of `steps` steps.
///
/// The user waits from `switch_step` for `latency` steps, clipped to the end
/// of the run.  A latency of 0 or 1 is imperceptible and leaves the curve
/// flat.
pub fn qoe_curve(latency: u64, switch_step: Step, steps: u64) -> Vec<f64> {
    let mut curve = vec![QOE_EXCELLENT; steps as usize];
    if latency > 1 {
        let start = switch_step.0.min(steps) as usize;
        let end = switch_step.0.saturating_add(latency).min(steps) as usize;
        curve[start..end].fill(QOE_POOR);
    }
    curve
}
