//! Fluent builder for constructing an [`Engine`].

use nd_core::ScenarioConfig;
use nd_device::{DeviceError, PHONE, User};
use nd_migration::MigrationMachine;
use nd_policy::Policy;

use crate::{Engine, Metrics, ScenarioEvent, SimError, SimResult, Timeline};

/// Fluent builder for [`Engine<P>`].
///
/// # Required inputs
///
/// - [`ScenarioConfig`]: step count, session size, bandwidths, power model
/// - `P: Policy`: the decision policy
///
/// # Optional inputs (have defaults)
///
/// | Method                   | Default                          |
/// |--------------------------|----------------------------------|
/// | `.user(u)`               | [`User::nomad()`]                |
/// | `.timeline(t)`           | [`Timeline::from_config`]        |
/// | `.handover_target(name)` | `"Phone"`                        |
///
/// # Example
///
/// ```rust
/// use nd_core::ScenarioConfig;
/// use nd_policy::ReactivePolicy;
/// use nd_sim::{EngineBuilder, NoopObserver};
///
/// let mut engine = EngineBuilder::new(ScenarioConfig::default(), ReactivePolicy)
///     .build()
///     .unwrap();
/// let metrics = engine.run(&mut NoopObserver).unwrap();
/// assert_eq!(metrics.handover_latency_steps, 32);
/// ```
pub struct EngineBuilder<P: Policy> {
    config:          ScenarioConfig,
    policy:          P,
    user:            Option<User>,
    timeline:        Option<Timeline>,
    handover_target: Option<String>,
}

impl<P: Policy> EngineBuilder<P> {
    pub fn new(config: ScenarioConfig, policy: P) -> Self {
        Self {
            config,
            policy,
            user:            None,
            timeline:        None,
            handover_target: None,
        }
    }

    /// Supply the user and their devices.
    ///
    /// The modelled scenario has exactly two devices, Laptop and Phone, as
    /// built by [`User::nomad()`].  A user with more devices is accepted as
    /// an extension: the engine still migrates only to the single
    /// [`handover_target`][Self::handover_target], and every other device
    /// just draws idle power.
    pub fn user(mut self, user: User) -> Self {
        self.user = Some(user);
        self
    }

    /// Replace the scripted events derived from the config.
    pub fn timeline(mut self, timeline: Timeline) -> Self {
        self.timeline = Some(timeline);
        self
    }

    /// Device that PREPARE and EXECUTE migrate the session to.
    pub fn handover_target(mut self, name: impl Into<String>) -> Self {
        self.handover_target = Some(name.into());
        self
    }

    /// Validate inputs and return a ready-to-run [`Engine`] positioned at
    /// step 0.
    pub fn build(self) -> SimResult<Engine<P>> {
        self.config.validate()?;

        let user = self.user.unwrap_or_else(User::nomad);
        let timeline = self.timeline.unwrap_or_else(|| Timeline::from_config(&self.config));
        let handover_target = self.handover_target.unwrap_or_else(|| PHONE.to_owned());

        // ── Every device name must resolve before the first step ──────────
        if user.device(&handover_target).is_none() {
            return Err(DeviceError::UnknownDevice(handover_target).into());
        }
        for (step, event) in timeline.iter() {
            if step.0 >= self.config.steps {
                return Err(SimError::EventOutsideRun { step: *step, steps: self.config.steps });
            }
            if let ScenarioEvent::SwitchDevice { to } = event {
                if user.device(to).is_none() {
                    return Err(DeviceError::UnknownDevice(to.clone()).into());
                }
            }
        }

        Ok(Engine {
            network:   self.config.initial_network(),
            current:   Default::default(),
            config:    self.config,
            user,
            migration: MigrationMachine::new(),
            metrics:   Metrics::default(),
            policy:    self.policy,
            timeline,
            handover_target,
        })
    }
}
