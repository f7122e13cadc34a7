//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`, so configuration failures surface unchanged at the
//! engine boundary.

use thiserror::Error;

/// The top-level error type for `nd-core`.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `nd-core`.
pub type CoreResult<T> = Result<T, CoreError>;
