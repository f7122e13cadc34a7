//! `nd-sim`: step loop orchestrator for the nomad_dt twin.
//!
//! # Step loop
//!
//! ```text
//! for step in 0..config.steps:
//!   ① Events    apply Timeline entries for this step (context change,
//!                device switch); a switch raises the switching flag.
//!   ② Snapshot  freeze a TwinSnapshot of user, link and migration phase.
//!   ③ Decide    Policy::decide, exactly once.
//!   ④ Execute   live job?  advance it, drop the decision
//!                else       NoOp | Prepare | Execute (fast or slow) | AdjustQos
//!   ⑤ Power     active device 0.20 / 0.12, idle devices 0.05
//!   ⑥ Observe   StepObserver::on_step_end(&StepRecord)
//! after the loop: a live EXECUTE job reports its steps_taken as latency.
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | [`compare`] runs policies on Rayon's thread pool.      |
//!
//! # Quick-start
//!
//! ```rust
//! use nd_core::ScenarioConfig;
//! use nd_sim::{compare, default_policies};
//!
//! let results = compare(&ScenarioConfig::default(), &default_policies()).unwrap();
//! assert_eq!(results["Predictive"].proactive_data_mb, 100.0);
//! ```

pub mod builder;
pub mod compare;
pub mod engine;
pub mod error;
pub mod metrics;
pub mod observer;
pub mod timeline;


pub use builder::EngineBuilder;
pub use compare::{Comparison, compare, default_policies, run_policy};
pub use engine::Engine;
pub use error::{SimError, SimResult};
pub use metrics::{Metrics, MetricsReport};
pub use observer::{NoopObserver, StepObserver, StepOutcome, StepRecord};
pub use timeline::{ScenarioEvent, Timeline};
