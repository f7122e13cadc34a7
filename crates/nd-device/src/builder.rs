//! Fluent builder for constructing a validated [`User`].
//!
//! # Usage
//!
//! ```rust
//! use nd_core::UserContext;
//! use nd_device::UserBuilder;
//!
//! let user = UserBuilder::new()
//!     .device("Laptop")
//!     .device("Phone")
//!     .active("Laptop")
//!     .context(UserContext::AtOffice)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(user.active_device_name(), "Laptop");
//! assert_eq!(user.devices().len(), 2);
//! ```

use nd_core::UserContext;

use crate::{Device, DeviceError, DeviceResult, User};

/// Fluent builder for [`User`].
///
/// Construction fails fast on configuration mistakes rather than producing a
/// user whose active-device invariant is already broken.
#[derive(Debug, Default)]
pub struct UserBuilder {
    names:   Vec<String>,
    active:  Option<String>,
    context: UserContext,
}

impl UserBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a device.  Devices start inactive and unprepared.
    pub fn device(mut self, name: impl Into<String>) -> Self {
        self.names.push(name.into());
        self
    }

    /// Choose the initially active device.  Defaults to the first registered.
    pub fn active(mut self, name: impl Into<String>) -> Self {
        self.active = Some(name.into());
        self
    }

    /// Initial user context.  Defaults to [`UserContext::AtOffice`].
    pub fn context(mut self, context: UserContext) -> Self {
        self.context = context;
        self
    }

    /// Validate inputs and return a ready [`User`].
    pub fn build(self) -> DeviceResult<User> {
        if self.names.is_empty() {
            return Err(DeviceError::NoDevices);
        }
        for (i, name) in self.names.iter().enumerate() {
            if self.names[..i].contains(name) {
                return Err(DeviceError::DuplicateDevice(name.clone()));
            }
        }

        let active = match &self.active {
            None => 0,
            Some(name) => self
                .names
                .iter()
                .position(|n| n == name)
                .ok_or_else(|| DeviceError::UnknownDevice(name.clone()))?,
        };

        let devices = self.names.into_iter().map(Device::new).collect();
        Ok(User::from_parts(devices, active, self.context))
    }
}
