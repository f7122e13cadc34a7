//! A single endpoint the session can live on.

/// One of the user's devices.
///
/// `is_active` marks the session's current endpoint; `is_prepared` marks a
/// device that already holds a pre-staged copy of the session state.  The two
/// flags are independent.  Only [`User`][crate::User] mutates them.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Device {
    pub name:        String,
    pub is_active:   bool,
    pub is_prepared: bool,
}

impl Device {
    /// An inactive, unprepared device.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name:        name.into(),
            is_active:   false,
            is_prepared: false,
        }
    }
}
