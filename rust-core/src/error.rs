//! Error types for the transform engine

use std::collections::TryReserveError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DspError {
    #[error("Transform length must be at least 1")]
    ZeroLength,

    #[error("Length {0} is not a power of two")]
    NotPowerOfTwo(usize),

    #[error("Transform order {0} exceeds the addressable buffer size")]
    OrderTooLarge(u32),

    #[error("Buffer length mismatch (expected {expected}, found {actual})")]
    InvalidLength { expected: usize, actual: usize },

    #[error("Buffer too short (need at least {required}, found {actual})")]
    BufferTooShort { required: usize, actual: usize },

    #[error("Unable to allocate {len} elements for {what}")]
    AllocationFailure { what: &'static str, len: usize },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

impl DspError {
    /// True for every variant that rejects a caller-supplied size
    pub fn is_invalid_length(&self) -> bool {
        matches!(
            self,
            DspError::ZeroLength
                | DspError::NotPowerOfTwo(_)
                | DspError::OrderTooLarge(_)
                | DspError::InvalidLength { .. }
                | DspError::BufferTooShort { .. }
        )
    }

    pub(crate) fn allocation(what: &'static str, len: usize) -> impl FnOnce(TryReserveError) -> Self {
        move |_| DspError::AllocationFailure { what, len }
    }
}

pub type Result<T> = std::result::Result<T, DspError>;

/// Allocate a zero-filled vector, surfacing allocation failure instead of aborting
pub(crate) fn try_zeroed<T: Clone + Default>(what: &'static str, len: usize) -> Result<Vec<T>> {
    let mut v = Vec::new();
    v.try_reserve_exact(len).map_err(DspError::allocation(what, len))?;
    v.resize(len, T::default());
    Ok(v)
}
