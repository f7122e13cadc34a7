//! `nd-output`: run output writers for the nomad_dt twin.
//!
//! Two backends are provided, the second behind a Cargo feature:
//!
//! | Feature   | Backend     | Files created                         |
//! |-----------|-------------|---------------------------------------|
//! | *(none)*  | CSV         | `step_timeline.csv`, `summary.csv`    |
//! | `sqlite`  | SQLite      | `output.db`                           |
//!
//! All backends implement [`OutputWriter`] and are driven by
//! [`TimelineObserver`], which implements `nd_sim::StepObserver`.
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use nd_core::ScenarioConfig;
//! use nd_output::{CsvWriter, OutputWriter, TimelineObserver};
//! use nd_policy::Policy;
//! use nd_sim::{default_policies, run_policy};
//!
//! let config = ScenarioConfig::default();
//! let mut writer = CsvWriter::new(Path::new("./output")).unwrap();
//! for policy in default_policies() {
//!     let mut obs = TimelineObserver::new(&mut writer, policy.name(), config.session_size_mb);
//!     run_policy(&config, policy, &mut obs).unwrap();
//!     if let Some(e) = obs.take_error() {
//!         eprintln!("output error: {e}");
//!     }
//! }
//! writer.finish().unwrap();
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod qoe;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::TimelineObserver;
pub use qoe::{QOE_EXCELLENT, QOE_POOR, qoe_curve};
pub use row::{StepRow, SummaryRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
