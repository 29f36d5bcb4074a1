//! Error type shared by the simulators and the sweep driver.

use statrs::distribution::NormalError;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the simulators and the sweep.
#[derive(Error, Debug)]
pub enum Error {
    /// A sample count or prior scale outside its valid range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// statrs refused to build a distribution.
    #[error("distribution error: {0}")]
    Distribution(#[from] NormalError),
}

impl Error {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// True for [`Error::InvalidArgument`].
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}
