//! A single in-flight session transfer.

use std::fmt;

use nd_core::{NetworkCondition, NetworkType};

/// Divisor applied to the link bandwidth to get MB moved per step.
pub const TRANSFER_DIVISOR: f64 = 8.0;

/// What a job is for.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum JobKind {
    /// Background pre-staging of the session on the target device.
    Prepare,
    /// User-visible handover: the user waits until this completes.
    Execute,
}

impl JobKind {
    pub fn as_str(self) -> &'static str {
        match self {
            JobKind::Prepare => "PREPARE",
            JobKind::Execute => "EXECUTE",
        }
    }
}

impl fmt::Display for JobKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transfer state for the one live job.
///
/// `bandwidth_mbps` and `network_type` are captured at creation and never
/// change for the job's lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct MigrationJob {
    pub kind:           JobKind,
    /// Name of the device receiving the session state.
    pub target:         String,
    /// Full session size this job started with.
    pub total_mb:       f64,
    /// Still to transfer.  Monotonically non-increasing.
    pub remaining_mb:   f64,
    /// Starts at 1 and counts every step the job has been live.
    pub steps_taken:    u64,
    pub bandwidth_mbps: f64,
    pub network_type:   NetworkType,
}

impl MigrationJob {
    /// A fresh job over `link` that has not moved any data yet.
    pub fn new(kind: JobKind, target: impl Into<String>, session_size_mb: f64, link: &NetworkCondition) -> Self {
        Self {
            kind,
            target:         target.into(),
            total_mb:       session_size_mb,
            remaining_mb:   session_size_mb,
            steps_taken:    1,
            bandwidth_mbps: link.bandwidth_mbps,
            network_type:   link.network_type,
        }
    }

    /// MB moved per step on this job's frozen link.
    #[inline]
    pub fn per_step_mb(&self) -> f64 {
        self.bandwidth_mbps / TRANSFER_DIVISOR
    }

    /// Fraction of the session transferred, in `[0.0, 1.0]`.
    pub fn progress(&self) -> f64 {
        if self.total_mb <= 0.0 {
            return 1.0;
        }
        (1.0 - self.remaining_mb / self.total_mb).clamp(0.0, 1.0)
    }
}

/// Number of transfer steps a full job needs at `bandwidth_mbps`.
///
/// This is `ceil(session / (bandwidth / 8))`, which is also the
/// `steps_taken` reported when a slow-path handover completes.
pub fn steps_to_transfer(session_size_mb: f64, bandwidth_mbps: f64) -> u64 {
    (session_size_mb / (bandwidth_mbps / TRANSFER_DIVISOR)).ceil().max(1.0) as u64
}
