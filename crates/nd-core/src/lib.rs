//! `nd-core`: foundational types for the `nomad_dt` session-migration twin.
//!
//! This crate is a dependency of every other `nd-*` crate.  It intentionally
//! has no `nd-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`step`]        | `Step`: the discrete simulation time unit            |
//! | [`network`]     | `NetworkType`, `QualityLevel`, `NetworkCondition`     |
//! | [`context`]     | `UserContext` enum                                    |
//! | [`config`]      | `ScenarioConfig`, `PowerModel`                        |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!           | Required to load a `ScenarioConfig` from JSON.             |

pub mod config;
pub mod context;
pub mod error;
pub mod network;
pub mod step;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{PowerModel, ScenarioConfig};
pub use context::UserContext;
pub use error::{CoreError, CoreResult};
pub use network::{NetworkCondition, NetworkType, QualityLevel};
pub use step::Step;
