//! The nomadic user and the invariant-holding device set.

use nd_core::UserContext;

use crate::{Device, DeviceError, DeviceResult, LAPTOP, PHONE};

/// The user's context and device ecosystem.
///
/// Fields are private so that the "exactly one active device" invariant can
/// only change through [`switch_active`][Self::switch_active], which flips
/// both flags and the active index in one call.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct User {
    devices: Vec<Device>,
    active:  usize,
    context: UserContext,
}

impl User {
    /// The reference user: a Laptop (active) and a Phone, at the office.
    pub fn nomad() -> Self {
        let mut laptop = Device::new(LAPTOP);
        laptop.is_active = true;
        Self {
            devices: vec![laptop, Device::new(PHONE)],
            active:  0,
            context: UserContext::AtOffice,
        }
    }

    /// Used by [`UserBuilder`][crate::UserBuilder] after validation.
    pub(crate) fn from_parts(mut devices: Vec<Device>, active: usize, context: UserContext) -> Self {
        for (i, d) in devices.iter_mut().enumerate() {
            d.is_active = i == active;
        }
        Self { devices, active, context }
    }

    // ── Read access ───────────────────────────────────────────────────────

    /// All devices, in registration order.
    #[inline]
    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    /// Look up a device by name.
    pub fn device(&self, name: &str) -> Option<&Device> {
        self.devices.iter().find(|d| d.name == name)
    }

    /// Name of the device currently hosting the session.
    #[inline]
    pub fn active_device_name(&self) -> &str {
        &self.devices[self.active].name
    }

    #[inline]
    pub fn context(&self) -> UserContext {
        self.context
    }

    // ── Mutation (engine only) ────────────────────────────────────────────

    pub fn set_context(&mut self, context: UserContext) {
        self.context = context;
    }

    /// Move the session to `name`.
    ///
    /// Deactivates the old device and activates the new one atomically.
    /// Switching to the already-active device is a no-op.
    ///
    /// # Errors
    ///
    /// [`DeviceError::UnknownDevice`] if `name` is not registered; the user is
    /// left untouched.
    pub fn switch_active(&mut self, name: &str) -> DeviceResult<()> {
        let next = self.index_of(name)?;
        self.devices[self.active].is_active = false;
        self.devices[next].is_active = true;
        self.active = next;
        Ok(())
    }

    /// Record that `name` now holds a pre-staged copy of the session.
    pub fn mark_prepared(&mut self, name: &str) -> DeviceResult<()> {
        let i = self.index_of(name)?;
        self.devices[i].is_prepared = true;
        Ok(())
    }

    fn index_of(&self, name: &str) -> DeviceResult<usize> {
        self.devices
            .iter()
            .position(|d| d.name == name)
            .ok_or_else(|| DeviceError::UnknownDevice(name.to_owned()))
    }
}
