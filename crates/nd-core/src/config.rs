//! Scenario configuration.
//!
//! Every constant of the nomadic-user scenario lives here so alternative
//! timelines and link budgets can be run without touching the engine.  The
//! `Default` impl reproduces the reference scenario: 100 steps, a 100 MB
//! session, office Wi-Fi at 50 MB/s degrading to 25 MB/s 5G at step 30, and
//! the user picking up their phone at step 60.

use crate::{CoreError, CoreResult, NetworkCondition, NetworkType, QualityLevel, Step};

// ── PowerModel ────────────────────────────────────────────────────────────────

/// Per-step energy draw, in abstract energy units.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PowerModel {
    /// Draw of a device that is not the active endpoint.
    pub idle:            f64,
    /// Draw of the active device while rendering at `QualityLevel::High`.
    pub active_high:     f64,
    /// Draw of the active device while rendering at `QualityLevel::Standard`.
    pub active_standard: f64,
    /// One-off cost of a QoS re-decision.
    pub cpu_burst:       f64,
    /// Transmit cost per migration step over Wi-Fi.
    pub tx_wifi:         f64,
    /// Transmit cost per migration step over 5G.
    pub tx_5g:           f64,
}

impl Default for PowerModel {
    fn default() -> Self {
        Self {
            idle:            0.05,
            active_high:     0.20,
            active_standard: 0.12,
            cpu_burst:       0.1,
            tx_wifi:         0.3,
            tx_5g:           0.6,
        }
    }
}

impl PowerModel {
    /// Draw of the active device at `quality`.
    #[inline]
    pub fn active_rate(&self, quality: QualityLevel) -> f64 {
        match quality {
            QualityLevel::High     => self.active_high,
            QualityLevel::Standard => self.active_standard,
        }
    }

    /// Transmit cost of one migration step over `network`.
    #[inline]
    pub fn tx_rate(&self, network: NetworkType) -> f64 {
        match network {
            NetworkType::WiFi  => self.tx_wifi,
            NetworkType::FiveG => self.tx_5g,
        }
    }

    fn rates(&self) -> [(&'static str, f64); 6] {
        [
            ("idle", self.idle),
            ("active_high", self.active_high),
            ("active_standard", self.active_standard),
            ("cpu_burst", self.cpu_burst),
            ("tx_wifi", self.tx_wifi),
            ("tx_5g", self.tx_5g),
        ]
    }
}

// ── ScenarioConfig ────────────────────────────────────────────────────────────

/// Top-level scenario configuration.
///
/// Typically built with `ScenarioConfig::default()` and individual fields
/// overridden, or loaded from JSON by the application crate (requires the
/// `serde` feature; missing fields fall back to the defaults).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScenarioConfig {
    /// Total steps to simulate.
    pub steps: u64,

    /// Size of the session state that a full migration must move, in MB.
    pub session_size_mb: f64,

    /// Link bandwidth while the user is at the office, in MB/s.
    pub wifi_bandwidth_mbps: f64,

    /// Link bandwidth once the user is walking, in MB/s.
    pub fiveg_bandwidth_mbps: f64,

    /// Energy draw rates.
    pub power: PowerModel,

    /// Step at which the user leaves the office (Wi-Fi → 5G, context → Walking).
    pub context_change_step: Step,

    /// Step at which the user switches their active device to the phone.
    pub switch_step: Step,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            steps:                100,
            session_size_mb:      100.0,
            wifi_bandwidth_mbps:  50.0,
            fiveg_bandwidth_mbps: 25.0,
            power:                PowerModel::default(),
            context_change_step:  Step(30),
            switch_step:          Step(60),
        }
    }
}

impl ScenarioConfig {
    /// The step at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_step(&self) -> Step {
        Step(self.steps)
    }

    /// Link condition at step 0: office Wi-Fi at High quality.
    pub fn initial_network(&self) -> NetworkCondition {
        NetworkCondition::new(NetworkType::WiFi, self.wifi_bandwidth_mbps, QualityLevel::High)
    }

    /// Reject configurations the engine cannot run meaningfully.
    ///
    /// Event steps at or beyond `steps` are rejected because they would never
    /// fire and silently turn the comparison into a no-op.
    pub fn validate(&self) -> CoreResult<()> {
        if self.steps == 0 {
            return Err(CoreError::Config("steps must be > 0".into()));
        }
        positive("session_size_mb", self.session_size_mb)?;
        positive("wifi_bandwidth_mbps", self.wifi_bandwidth_mbps)?;
        positive("fiveg_bandwidth_mbps", self.fiveg_bandwidth_mbps)?;
        for (name, rate) in self.power.rates() {
            if !rate.is_finite() || rate < 0.0 {
                return Err(CoreError::Config(format!(
                    "power.{name} must be a finite non-negative rate, got {rate}"
                )));
            }
        }
        for (name, step) in [
            ("context_change_step", self.context_change_step),
            ("switch_step", self.switch_step),
        ] {
            if step >= self.end_step() {
                return Err(CoreError::Config(format!(
                    "{name} {step} is outside the run (steps = {})",
                    self.steps
                )));
            }
        }
        Ok(())
    }
}

fn positive(name: &str, value: f64) -> CoreResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(CoreError::Config(format!("{name} must be finite and > 0, got {value}")))
    }
}
