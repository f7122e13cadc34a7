//! Engine observer trait for progress reporting and data collection.

use nd_core::{NetworkCondition, QualityLevel, Step, UserContext};
use nd_migration::{JobKind, MigrationPhase};
use nd_policy::Decision;

use crate::Metrics;

/// What the engine did with the step's decision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepOutcome {
    /// Nothing to do: no live job and a `NoOp` decision.
    Idle,
    /// A live job moved data and is still running.  Any decision returned
    /// this step was dropped.
    Transferred {
        kind:         JobKind,
        remaining_mb: f64,
        steps_taken:  u64,
    },
    /// A live job finished this step.
    Completed { kind: JobKind, steps_taken: u64 },
    /// A new job was created; no data moves on the creation step.
    Started { kind: JobKind },
    /// EXECUTE against an already-prepared target.
    FastHandover,
    QosAdjusted { level: QualityLevel },
}

/// Read-only view of one finished step.
#[derive(Debug, Clone, Copy)]
pub struct StepRecord<'a> {
    pub step:              Step,
    pub context:           UserContext,
    pub active_device:     &'a str,
    /// Link and quality after the decision was applied.
    pub network:           NetworkCondition,
    pub is_user_switching: bool,
    pub decision:          Decision,
    pub outcome:           StepOutcome,
    /// Phase after the decision was applied.
    pub phase:             MigrationPhase,
    /// Progress of the live job in `[0, 1]`, if any.
    pub job_progress:      Option<f64>,
    /// Power charged this step (devices, transmit and CPU burst).
    pub step_power:        f64,
    /// Running total after this step.
    pub total_power:       f64,
}

/// Callbacks invoked by [`Engine::run`][crate::Engine::run] at key points in
/// the step loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: decision log
///
/// ```rust
/// use nd_sim::{StepObserver, StepRecord};
///
/// #[derive(Default)]
/// struct DecisionLog(Vec<String>);
///
/// impl StepObserver for DecisionLog {
///     fn on_step_end(&mut self, record: &StepRecord<'_>) {
///         self.0.push(format!("{} {}", record.step, record.decision));
///     }
/// }
/// ```
pub trait StepObserver {
    /// Called at the very start of each step, before events are applied.
    fn on_step_start(&mut self, _step: Step) {}

    /// Called once the step's power has been accrued.
    fn on_step_end(&mut self, _record: &StepRecord<'_>) {}

    /// Called once after the final step with the finished counters.
    fn on_run_end(&mut self, _final_step: Step, _metrics: &Metrics) {}
}

/// A [`StepObserver`] that does nothing.  Use when you need to call `run`
/// but don't want callbacks.
pub struct NoopObserver;

impl StepObserver for NoopObserver {}
