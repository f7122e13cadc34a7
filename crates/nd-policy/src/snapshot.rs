//! Read-only simulation state passed to every policy.

use nd_core::{NetworkCondition, QualityLevel, Step, UserContext};
use nd_device::{Device, User};
use nd_migration::MigrationPhase;

/// The user digital twin: an immutable view of the world for one step.
///
/// Built by the engine after the step's scripted events have been applied
/// and before the policy is consulted.  It borrows the device list, so the
/// engine cannot mutate devices while a snapshot is live; a new snapshot is
/// built every step.
#[derive(Debug, Clone, Copy)]
pub struct TwinSnapshot<'a> {
    /// Current simulation step.
    pub step: Step,

    pub context: UserContext,

    /// Name of the device currently hosting the session.
    pub active_device: &'a str,

    /// Every device of the user, in registration order.
    pub devices: &'a [Device],

    /// Device that PREPARE and EXECUTE migrate the session to.
    pub handover_target: &'a str,

    /// Ambient link type, bandwidth, and quality level.
    pub network: NetworkCondition,

    /// `true` only on the step the user switches their active device.
    pub is_user_switching: bool,

    /// What the migration state machine is doing right now.
    pub migration: MigrationPhase,
}

impl<'a> TwinSnapshot<'a> {
    /// Build the snapshot for a single step.
    pub fn build(
        step:              Step,
        user:              &'a User,
        handover_target:   &'a str,
        network:           NetworkCondition,
        is_user_switching: bool,
        migration:         MigrationPhase,
    ) -> Self {
        Self {
            step,
            context: user.context(),
            active_device: user.active_device_name(),
            devices: user.devices(),
            handover_target,
            network,
            is_user_switching,
            migration,
        }
    }

    /// Look up a device by name.
    pub fn device(&self, name: &str) -> Option<&'a Device> {
        self.devices.iter().find(|d| d.name == name)
    }

    /// `true` if `name` exists and already holds a pre-staged session.
    pub fn is_prepared(&self, name: &str) -> bool {
        self.device(name).is_some_and(|d| d.is_prepared)
    }

    #[inline]
    pub fn quality(&self) -> QualityLevel {
        self.network.quality
    }
}
