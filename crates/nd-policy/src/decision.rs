//! Decisions: the single action a policy requests for the current step.

use std::fmt;

use nd_core::QualityLevel;

/// What a policy wants the engine to do this step.
///
/// Produced by [`Policy::decide`][crate::Policy::decide] and consumed by the
/// engine.  Exactly one decision is returned per step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Decision {
    /// Do nothing.
    #[default]
    NoOp,

    /// Start a background transfer that pre-stages the session on the
    /// handover target.
    PrepareMigration,

    /// Move the session to the handover target now.  Takes the single-step
    /// fast path if the target is already prepared.
    ExecuteMigration,

    /// Change the session's rendering quality.
    AdjustQos { level: QualityLevel },
}

impl Decision {
    /// Action tag, useful for CSV column values and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::NoOp             => "NO_OP",
            Decision::PrepareMigration => "PREPARE_MIGRATION",
            Decision::ExecuteMigration => "EXECUTE_MIGRATION",
            Decision::AdjustQos { .. } => "ADJUST_QOS",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::AdjustQos { level } => write!(f, "ADJUST_QOS({level})"),
            other => f.write_str(other.as_str()),
        }
    }
}
