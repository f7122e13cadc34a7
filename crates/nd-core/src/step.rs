//! Simulation time model.
//!
//! Time is a monotonically increasing `Step` counter starting at 0.  A step
//! has no wall-clock meaning; bandwidths are expressed per step and every
//! duration in the model (handover latency, migration time) is a whole
//! number of steps.

use std::fmt;

/// An absolute simulation step index.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step(pub u64);

impl Step {
    /// The step that follows `self`.
    #[inline]
    pub fn next(self) -> Step {
        Step(self.0 + 1)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={}", self.0)
    }
}
