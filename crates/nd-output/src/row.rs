//! Plain data row types written by output backends.

/// One policy's state at one step.
#[derive(Debug, Clone, PartialEq)]
pub struct StepRow {
    pub policy:         String,
    pub step:           u64,
    pub context:        &'static str,
    pub active_device:  String,
    pub network_type:   &'static str,
    pub bandwidth_mbps: f64,
    pub quality:        &'static str,
    /// Decision tag returned by the policy, executed or not.
    pub decision:       &'static str,
    pub phase:          &'static str,
    /// Live job progress in `[0, 1]`; empty when idle.
    pub job_progress:   Option<f64>,
    pub step_power:     f64,
    pub total_power:    f64,
    /// User-perceived quality of experience on a 1–5 scale.
    pub qoe:            f64,
}

/// Final counters for one policy.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub policy:                 String,
    pub handover_latency_steps: u64,
    pub total_power_consumed:   f64,
    pub proactive_data_mb:      f64,
    pub total_migration_time:   u64,
    pub power:                  f64,
}
