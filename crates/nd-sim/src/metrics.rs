//! Run counters and the derived "power" statistic.
//!
//! ```text
//! γ     = session_size / total_migration_time    (0 when no migration time)
//! T     = max(handover_latency_steps, 1)
//! power = γ / T
//! ```
//!
//! The clamp on `T` applies only inside the formula; the raw latency is
//! always reported as measured.

use serde::{Deserialize, Serialize};

/// Counters accumulated by one engine run.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Metrics {
    /// Steps from the user's switch until the session is usable on the new
    /// device.  1 for the fast path, 0 if no handover was measured.
    pub handover_latency_steps: u64,
    pub total_power_consumed:   f64,
    /// Data moved ahead of the switch by a completed PREPARE job.
    pub proactive_data_mb:      f64,
    /// Steps spent starting or progressing migration jobs.
    pub total_migration_time:   u64,
}

impl Metrics {
    /// Effective throughput γ in MB per migration step.
    pub fn throughput(&self, session_size_mb: f64) -> f64 {
        if self.total_migration_time > 0 {
            session_size_mb / self.total_migration_time as f64
        } else {
            0.0
        }
    }

    /// γ / max(latency, 1).
    pub fn power(&self, session_size_mb: f64) -> f64 {
        let t = self.handover_latency_steps.max(1) as f64;
        self.throughput(session_size_mb) / t
    }

    pub fn report(&self, session_size_mb: f64) -> MetricsReport {
        MetricsReport {
            handover_latency_steps: self.handover_latency_steps,
            total_power_consumed:   self.total_power_consumed,
            proactive_data_mb:      self.proactive_data_mb,
            total_migration_time:   self.total_migration_time,
            power:                  self.power(session_size_mb),
        }
    }
}

/// Counters plus the derived statistic, as handed to consumers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricsReport {
    pub handover_latency_steps: u64,
    pub total_power_consumed:   f64,
    pub proactive_data_mb:      f64,
    pub total_migration_time:   u64,
    pub power:                  f64,
}
