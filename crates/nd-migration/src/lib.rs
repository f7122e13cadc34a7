//! `nd-migration`: session-state transfer across a bandwidth-limited link.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                          |
//! |-------------|-------------------------------------------------------------------|
//! | [`job`]     | `MigrationJob`, `JobKind`: one in-flight transfer                |
//! | [`machine`] | `MigrationMachine`, `VacantSlot`, `Transfer`, `MigrationPhase`    |
//!
//! # Transfer model
//!
//! A job moves the whole session state over the link it was created on:
//!
//! 1. `VacantSlot::start` snapshots the ambient bandwidth and link type and
//!    creates a job with `remaining_mb = session_size`, `steps_taken = 1`.
//!    No data moves on the creation step.
//! 2. Every later step, `MigrationMachine::advance` moves
//!    `bandwidth / 8.0` MB.  The link is frozen, so a bandwidth drop after
//!    creation never slows an in-flight job.
//! 3. On the step where `remaining_mb <= 0` the job is removed and handed
//!    back as [`Transfer::Completed`] so the caller can apply the
//!    kind-specific side effects.
//!
//! # Single-job invariant
//!
//! A [`VacantSlot`], the only way to start a job, can be obtained only
//! while the machine is idle, so a second concurrent job is unrepresentable.

pub mod job;
pub mod machine;


pub use job::{JobKind, MigrationJob, TRANSFER_DIVISOR, steps_to_transfer};
pub use machine::{MigrationMachine, MigrationPhase, Transfer, VacantSlot};
