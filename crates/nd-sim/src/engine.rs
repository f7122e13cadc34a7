//! The `Engine` struct and its step loop.

use nd_core::{NetworkCondition, ScenarioConfig, Step};
use nd_device::User;
use nd_migration::{JobKind, MigrationJob, MigrationMachine, Transfer};
use nd_policy::{Decision, Policy, TwinSnapshot};
use tracing::{debug, info};

use crate::{Metrics, ScenarioEvent, StepObserver, StepOutcome, StepRecord, SimResult, Timeline};

// ── Engine ────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Engine<P>` holds all scenario state and drives the step loop:
///
/// 1. **Events**: apply every scripted event keyed to this step.  A device
///    switch lands on the user before the policy looks at the world.
/// 2. **Snapshot**: freeze a read-only [`TwinSnapshot`]; the switching flag
///    is raised only on the step a `SwitchDevice` fired.
/// 3. **Decide**: call [`Policy::decide`] once.
/// 4. **Execute**: a live job consumes the step (the decision is dropped);
///    otherwise the decision is applied.
/// 5. **Power**: charge each device's idle or active draw.
/// 6. **Observe**: hand a [`StepRecord`] to the observer.
///
/// Create via [`EngineBuilder`][crate::EngineBuilder].
pub struct Engine<P: Policy> {
    /// Scenario parameters (step count, session size, power model, …).
    pub config: ScenarioConfig,

    /// The nomadic user and their devices.
    pub user: User,

    /// Ambient link and the session's rendering quality.
    pub network: NetworkCondition,

    /// Holds at most one live migration job.
    pub migration: MigrationMachine,

    /// Counters accumulated so far.  Use [`final_metrics`][Self::final_metrics]
    /// for the end-of-run view.
    pub metrics: Metrics,

    /// The decision policy.  Called exactly once per step.
    pub policy: P,

    /// Scripted events.
    pub timeline: Timeline,

    /// Device PREPARE and EXECUTE migrate the session to.
    pub handover_target: String,

    /// Next step to be processed.
    pub current: Step,
}

impl<P: Policy> Engine<P> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current step to `config.end_step()` and return the
    /// finished counters.
    ///
    /// Calls observer hooks at every step boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: StepObserver>(&mut self, observer: &mut O) -> SimResult<Metrics> {
        while self.current < self.config.end_step() {
            self.step_once(observer)?;
        }
        let metrics = self.final_metrics();
        observer.on_run_end(self.current, &metrics);
        info!(
            policy = self.policy.name(),
            latency = metrics.handover_latency_steps,
            total_power = metrics.total_power_consumed,
            "run finished"
        );
        Ok(metrics)
    }

    /// Run exactly `n` steps from the current position (ignores `end_step`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_steps<O: StepObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step_once(observer)?;
        }
        Ok(())
    }

    /// Process the current step and move to the next.
    pub fn step_once<O: StepObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.current;
        observer.on_step_start(now);

        let is_user_switching = self.apply_events(now)?;

        let decision = {
            let snapshot = TwinSnapshot::build(
                now,
                &self.user,
                &self.handover_target,
                self.network,
                is_user_switching,
                self.migration.phase(),
            );
            self.policy.decide(&snapshot)
        };

        let power_before = self.metrics.total_power_consumed;
        let outcome = self.execute(decision, now)?;
        self.accrue_device_power();

        observer.on_step_end(&StepRecord {
            step:              now,
            context:           self.user.context(),
            active_device:     self.user.active_device_name(),
            network:           self.network,
            is_user_switching,
            decision,
            outcome,
            phase:             self.migration.phase(),
            job_progress:      self.migration.job().map(MigrationJob::progress),
            step_power:        self.metrics.total_power_consumed - power_before,
            total_power:       self.metrics.total_power_consumed,
        });

        self.current = now.next();
        Ok(())
    }

    /// Counters as they stand, with the end-of-run rule applied: an EXECUTE
    /// job still live reports its `steps_taken` as the handover latency.
    ///
    /// Pure; calling it mid-run does not disturb the engine.
    pub fn final_metrics(&self) -> Metrics {
        let mut metrics = self.metrics;
        if let Some(job) = self.migration.job() {
            if job.kind == JobKind::Execute {
                metrics.handover_latency_steps = job.steps_taken;
            }
        }
        metrics
    }

    // ── Step phases ───────────────────────────────────────────────────────

    /// Apply scripted events for `now`.  Returns whether the user switched
    /// devices this step.
    fn apply_events(&mut self, now: Step) -> SimResult<bool> {
        let mut switched = false;
        for event in self.timeline.events_at(now) {
            match event {
                ScenarioEvent::ContextChange { context, network_type, bandwidth_mbps } => {
                    self.user.set_context(*context);
                    self.network.network_type = *network_type;
                    self.network.bandwidth_mbps = *bandwidth_mbps;
                    info!(
                        step = %now,
                        context = %context,
                        network = %network_type,
                        bandwidth_mbps,
                        "context changed"
                    );
                }
                ScenarioEvent::SwitchDevice { to } => {
                    self.user.switch_active(to)?;
                    switched = true;
                    info!(step = %now, device = %to, "user switched device");
                }
            }
        }
        Ok(switched)
    }

    fn execute(&mut self, decision: Decision, now: Step) -> SimResult<StepOutcome> {
        // ── A live job consumes the step ──────────────────────────────────
        if let Some(transfer) = self.migration.advance() {
            self.metrics.total_migration_time += 1;
            self.metrics.total_power_consumed += self.config.power.tx_rate(transfer.network_type());
            if decision != Decision::NoOp {
                debug!(step = %now, %decision, "decision dropped: migration in progress");
            }
            return match transfer {
                Transfer::InProgress { kind, remaining_mb, steps_taken, .. } => {
                    Ok(StepOutcome::Transferred { kind, remaining_mb, steps_taken })
                }
                Transfer::Completed(job) => {
                    self.complete(&job)?;
                    Ok(StepOutcome::Completed { kind: job.kind, steps_taken: job.steps_taken })
                }
            };
        }

        // ── Otherwise apply the decision ──────────────────────────────────
        match decision {
            Decision::NoOp => Ok(StepOutcome::Idle),

            Decision::PrepareMigration => {
                self.metrics.total_migration_time += 1;
                Ok(self.start_job(JobKind::Prepare))
            }

            Decision::ExecuteMigration => {
                self.metrics.total_migration_time += 1;
                let prepared = self
                    .user
                    .device(&self.handover_target)
                    .is_some_and(|d| d.is_prepared);
                if prepared {
                    self.metrics.handover_latency_steps = 1;
                    info!(step = %now, target = %self.handover_target, "fast-path handover");
                    Ok(StepOutcome::FastHandover)
                } else {
                    Ok(self.start_job(JobKind::Execute))
                }
            }

            Decision::AdjustQos { level } => {
                self.network.quality = level;
                self.metrics.total_power_consumed += self.config.power.cpu_burst;
                info!(step = %now, quality = %level, "quality adjusted");
                Ok(StepOutcome::QosAdjusted { level })
            }
        }
    }

    /// Create a job on the machine.  Only called once `advance` has shown
    /// the machine idle.
    fn start_job(&mut self, kind: JobKind) -> StepOutcome {
        if let Some(slot) = self.migration.vacant() {
            slot.start(kind, self.handover_target.as_str(), self.config.session_size_mb, &self.network);
        }
        StepOutcome::Started { kind }
    }

    fn complete(&mut self, job: &MigrationJob) -> SimResult<()> {
        match job.kind {
            JobKind::Prepare => {
                self.user.mark_prepared(&job.target)?;
                self.metrics.proactive_data_mb = self.config.session_size_mb;
            }
            JobKind::Execute => {
                self.metrics.handover_latency_steps = job.steps_taken;
            }
        }
        Ok(())
    }

    fn accrue_device_power(&mut self) {
        let power = &self.config.power;
        let quality = self.network.quality;
        let draw: f64 = self
            .user
            .devices()
            .iter()
            .map(|d| if d.is_active { power.active_rate(quality) } else { power.idle })
            .sum();
        self.metrics.total_power_consumed += draw;
    }
}
