//! `nd-policy`: decision policies and the digital-twin snapshot they read.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                        |
//! |----------------|-----------------------------------------------------------------|
//! | [`snapshot`]   | `TwinSnapshot<'a>`: read-only per-step view of the world       |
//! | [`decision`]   | `Decision` enum (`NoOp`, `PrepareMigration`, …)                 |
//! | [`policy`]     | `Policy` trait                                                  |
//! | [`reactive`]   | `ReactivePolicy`: acts only when the user switches             |
//! | [`myopic`]     | `MyopicPolicy`: also lowers QoS on a degraded link             |
//! | [`predictive`] | `PredictivePolicy`: pre-stages the session ahead of a switch   |
//! | [`noop`]       | `NoopPolicy`: placeholder that never acts                      |
//!
//! # Design notes
//!
//! Each step the engine builds a fresh [`TwinSnapshot`], calls
//! [`Policy::decide`] once, and applies the returned [`Decision`].  Policies
//! never see the engine itself: everything they may read, including the
//! migration phase, is copied or borrowed into the snapshot.  That keeps
//! policies `Send + Sync` and lets independent runs execute in parallel.

pub mod decision;
pub mod myopic;
pub mod noop;
pub mod policy;
pub mod predictive;
pub mod reactive;
pub mod snapshot;


pub use decision::Decision;
pub use myopic::MyopicPolicy;
pub use noop::NoopPolicy;
pub use policy::Policy;
pub use predictive::{PredictedIntent, PredictivePolicy};
pub use reactive::ReactivePolicy;
pub use snapshot::TwinSnapshot;
