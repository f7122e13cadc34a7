//! Ambient network condition shared by the whole run.
//!
//! The condition is process-wide to a simulation run.  It changes only
//! through scripted environmental events or a QoS-adjustment decision; an
//! in-flight migration job snapshots the link at creation and never sees
//! later changes.

use std::fmt;

/// The radio link the active session currently rides on.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NetworkType {
    #[default]
    WiFi,
    FiveG,
}

impl NetworkType {
    /// Human-readable label, useful for CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            NetworkType::WiFi  => "Wi-Fi",
            NetworkType::FiveG => "5G",
        }
    }
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rendering quality of the active session.  Drives the active-device draw.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum QualityLevel {
    #[default]
    High,
    Standard,
}

impl QualityLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            QualityLevel::High     => "High",
            QualityLevel::Standard => "Standard",
        }
    }
}

impl fmt::Display for QualityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current link type, bandwidth (MB/s) and quality level.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NetworkCondition {
    pub network_type:   NetworkType,
    /// Link bandwidth in MB/s.  Always `> 0`.
    pub bandwidth_mbps: f64,
    pub quality:        QualityLevel,
}

impl NetworkCondition {
    #[inline]
    pub fn new(network_type: NetworkType, bandwidth_mbps: f64, quality: QualityLevel) -> Self {
        Self { network_type, bandwidth_mbps, quality }
    }

    /// `true` when the link is 5G and the session still renders at High
    /// quality.  This is the condition a myopic policy reacts to.
    #[inline]
    pub fn is_degraded_high_quality(&self) -> bool {
        self.network_type == NetworkType::FiveG && self.quality == QualityLevel::High
    }
}
