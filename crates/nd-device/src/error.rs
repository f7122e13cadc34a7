use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeviceError {
    #[error("device {0:?} is not registered with this user")]
    UnknownDevice(String),

    #[error("device {0:?} registered twice")]
    DuplicateDevice(String),

    #[error("a user needs at least one device")]
    NoDevices,
}

pub type DeviceResult<T> = Result<T, DeviceError>;
