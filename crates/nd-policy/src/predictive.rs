//! Predictive-proactive policy.
//!
//! Combines a deterministic intent classifier with a pre-staging rule: when
//! the classifier expects the user to move to the target device soon, the
//! session is copied there in the background so the eventual handover takes
//! the single-step fast path.

use nd_core::UserContext;
use nd_device::LAPTOP;
use nd_migration::MigrationPhase;

use crate::{Decision, Policy, TwinSnapshot};

/// Output of the intent classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictedIntent<'a> {
    /// The user is expected to keep using the current device.
    Stay,
    /// The user is expected to move the session to the named device.
    SwitchTo(&'a str),
}

/// Anticipates a device switch from the user's context.
///
/// The classifier fires when the user is in `trigger` context while the
/// session is on `source`, and predicts a move to the snapshot's handover
/// target.  The default instance encodes "a user walking with their laptop
/// open will pick up their phone".
#[derive(Debug, Clone)]
pub struct PredictivePolicy {
    pub trigger: UserContext,
    pub source:  String,
}

impl Default for PredictivePolicy {
    fn default() -> Self {
        Self { trigger: UserContext::Walking, source: LAPTOP.to_owned() }
    }
}

impl PredictivePolicy {
    pub fn new(trigger: UserContext, source: impl Into<String>) -> Self {
        Self { trigger, source: source.into() }
    }

    /// Classify the user's next move from the snapshot.
    pub fn predict_intent<'a>(&self, snapshot: &TwinSnapshot<'a>) -> PredictedIntent<'a> {
        let away_from_target = snapshot.active_device != snapshot.handover_target;
        if snapshot.context == self.trigger && snapshot.active_device == self.source && away_from_target {
            PredictedIntent::SwitchTo(snapshot.handover_target)
        } else {
            PredictedIntent::Stay
        }
    }
}

impl Policy for PredictivePolicy {
    fn name(&self) -> &str {
        "Predictive"
    }

    fn decide(&self, snapshot: &TwinSnapshot<'_>) -> Decision {
        if let PredictedIntent::SwitchTo(target) = self.predict_intent(snapshot) {
            let preparing = snapshot.migration == MigrationPhase::Preparing;
            if !snapshot.is_prepared(target) && !preparing {
                return Decision::PrepareMigration;
            }
        }
        if snapshot.is_user_switching {
            return Decision::ExecuteMigration;
        }
        Decision::NoOp
    }
}
