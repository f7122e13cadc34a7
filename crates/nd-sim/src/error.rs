use nd_core::{CoreError, Step};
use nd_device::DeviceError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("scenario configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("device error: {0}")]
    Device(#[from] DeviceError),

    #[error("scripted event at {step} falls outside a run of {steps} steps")]
    EventOutsideRun {
        step:  Step,
        steps: u64,
    },

    #[error("policy name {0:?} appears more than once in the comparison")]
    DuplicatePolicy(String),
}

pub type SimResult<T> = Result<T, SimError>;
