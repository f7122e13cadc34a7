//! The Idle → Preparing | Executing → Idle state machine.

use nd_core::{NetworkCondition, NetworkType};
use tracing::{debug, info};

use crate::{JobKind, MigrationJob};

/// Coarse state of the machine, cheap to copy into a policy snapshot.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum MigrationPhase {
    #[default]
    Idle,
    Preparing,
    Executing,
}

impl MigrationPhase {
    pub fn as_str(self) -> &'static str {
        match self {
            MigrationPhase::Idle      => "idle",
            MigrationPhase::Preparing => "preparing",
            MigrationPhase::Executing => "executing",
        }
    }
}

/// Outcome of advancing a live job by one step.
#[derive(Debug, Clone, PartialEq)]
pub enum Transfer {
    /// Data moved but the job is still live.
    InProgress {
        kind:         JobKind,
        network_type: NetworkType,
        remaining_mb: f64,
        steps_taken:  u64,
    },
    /// The job finished this step and has been removed from the machine.
    Completed(MigrationJob),
}

impl Transfer {
    /// Link the transfer ran over (drives transmit power).
    pub fn network_type(&self) -> NetworkType {
        match self {
            Transfer::InProgress { network_type, .. } => *network_type,
            Transfer::Completed(job) => job.network_type,
        }
    }
}

/// Holds at most one [`MigrationJob`].
#[derive(Debug, Default)]
pub struct MigrationMachine {
    job: Option<MigrationJob>,
}

impl MigrationMachine {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn phase(&self) -> MigrationPhase {
        match &self.job {
            None => MigrationPhase::Idle,
            Some(job) => match job.kind {
                JobKind::Prepare => MigrationPhase::Preparing,
                JobKind::Execute => MigrationPhase::Executing,
            },
        }
    }

    /// The live job, if any.
    #[inline]
    pub fn job(&self) -> Option<&MigrationJob> {
        self.job.as_ref()
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.job.is_none()
    }

    /// A handle that can start a job, available only while idle.
    pub fn vacant(&mut self) -> Option<VacantSlot<'_>> {
        if self.job.is_some() {
            return None;
        }
        Some(VacantSlot { slot: &mut self.job })
    }

    /// Move one step of data on the live job.
    ///
    /// Returns `None` when idle.  When the job finishes it is removed and
    /// returned inside [`Transfer::Completed`]; otherwise `steps_taken` is
    /// incremented.
    pub fn advance(&mut self) -> Option<Transfer> {
        let job = self.job.as_mut()?;
        job.remaining_mb -= job.per_step_mb();

        if job.remaining_mb <= 0.0 {
            let done = self.job.take()?;
            info!(
                kind = %done.kind,
                target = %done.target,
                steps = done.steps_taken,
                "migration completed"
            );
            return Some(Transfer::Completed(done));
        }

        job.steps_taken += 1;
        debug!(
            kind = %job.kind,
            remaining_mb = job.remaining_mb,
            steps = job.steps_taken,
            "migration in progress"
        );
        Some(Transfer::InProgress {
            kind:         job.kind,
            network_type: job.network_type,
            remaining_mb: job.remaining_mb,
            steps_taken:  job.steps_taken,
        })
    }
}

/// Proof that the machine is idle.  Consumed by [`start`][Self::start].
pub struct VacantSlot<'a> {
    slot: &'a mut Option<MigrationJob>,
}

impl<'a> VacantSlot<'a> {
    /// Create a job over the current `link`, freezing its bandwidth and type.
    pub fn start(
        self,
        kind:            JobKind,
        target:          impl Into<String>,
        session_size_mb: f64,
        link:            &NetworkCondition,
    ) -> &'a MigrationJob {
        let job = MigrationJob::new(kind, target, session_size_mb, link);
        info!(
            kind = %job.kind,
            target = %job.target,
            network = %job.network_type,
            bandwidth_mbps = job.bandwidth_mbps,
            "migration started"
        );
        let VacantSlot { slot } = self;
        slot.insert(job)
    }
}
