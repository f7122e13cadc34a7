//! `nd-device`: the user's device ecosystem.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`device`]      | `Device`: activation and preparedness flags              |
//! | [`user`]        | `User`: device set, context, active-device invariant     |
//! | [`builder`]     | `UserBuilder` (fluent, validating construction)           |
//! | [`error`]       | `DeviceError`, `DeviceResult<T>`                          |
//!
//! # Invariants
//!
//! Exactly one device is active at any time and `User::active_device_name`
//! always names it.  The active device is stored as an index into the device
//! list, so the name and the `is_active` flags cannot drift apart.

pub mod builder;
pub mod device;
pub mod error;
pub mod user;


pub use builder::UserBuilder;
pub use device::Device;
pub use error::{DeviceError, DeviceResult};
pub use user::User;

/// Name of the device the session starts on in the reference scenario.
pub const LAPTOP: &str = "Laptop";

/// Name of the device the user switches to in the reference scenario.
pub const PHONE: &str = "Phone";
