//! Scripted scenario events.
//!
//! A [`Timeline`] is a declarative list of `(Step, ScenarioEvent)` pairs.
//! The engine applies every event keyed to the current step before the
//! policy is consulted, in insertion order for events sharing a step.

use nd_core::{NetworkType, ScenarioConfig, Step, UserContext};
use nd_device::PHONE;

/// A change to the world the engine applies at a fixed step.
#[derive(Debug, Clone, PartialEq)]
pub enum ScenarioEvent {
    /// The user changes context and the ambient link changes with it.
    /// Rendering quality is left untouched.
    ContextChange {
        context:        UserContext,
        network_type:   NetworkType,
        bandwidth_mbps: f64,
    },

    /// The user activates another device.  Raises the switching flag for
    /// the step on which it fires.
    SwitchDevice { to: String },
}

/// Ordered list of scripted events.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timeline {
    events: Vec<(Step, ScenarioEvent)>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// The two-event nomad scenario: the user leaves the office onto 5G at
    /// `context_change_step`, then picks up the phone at `switch_step`.
    pub fn from_config(config: &ScenarioConfig) -> Self {
        Self::new()
            .with(
                config.context_change_step,
                ScenarioEvent::ContextChange {
                    context:        UserContext::Walking,
                    network_type:   NetworkType::FiveG,
                    bandwidth_mbps: config.fiveg_bandwidth_mbps,
                },
            )
            .with(config.switch_step, ScenarioEvent::SwitchDevice { to: PHONE.to_owned() })
    }

    /// Add an event, keeping the list sorted by step (stable for ties).
    pub fn push(&mut self, step: Step, event: ScenarioEvent) {
        let at = self.events.partition_point(|(s, _)| *s <= step);
        self.events.insert(at, (step, event));
    }

    /// Builder-style [`push`][Self::push].
    pub fn with(mut self, step: Step, event: ScenarioEvent) -> Self {
        self.push(step, event);
        self
    }

    /// Events scheduled for exactly `step`.
    pub fn events_at(&self, step: Step) -> impl Iterator<Item = &ScenarioEvent> {
        let start = self.events.partition_point(|(s, _)| *s < step);
        self.events[start..]
            .iter()
            .take_while(move |(s, _)| *s == step)
            .map(|(_, e)| e)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Step, ScenarioEvent)> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
