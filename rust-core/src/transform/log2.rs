//! Ceiling base-2 logarithm used to size FFT buffers

use crate::error::{DspError, Result};

/// Smallest `m` such that `2^m >= x`
///
/// Rounds up, so a buffer of `1 << log2(len)` samples always holds `len` samples.
/// `x = 0` has no logarithm and is rejected.
pub fn log2(x: usize) -> Result<u32> {
    if x == 0 {
        return Err(DspError::ZeroLength);
    }
    Ok(usize::BITS - (x - 1).leading_zeros())
}

/// Transform length `2^m`, rejecting orders that do not fit in `usize`
pub(crate) fn order_len(m: u32) -> Result<usize> {
    1usize.checked_shl(m).ok_or(DspError::OrderTooLarge(m))
}

/// Order `m` of a power-of-two length
pub(crate) fn exact_order(len: usize) -> Result<u32> {
    if len == 0 {
        return Err(DspError::ZeroLength);
    }
    if !len.is_power_of_two() {
        return Err(DspError::NotPowerOfTwo(len));
    }
    Ok(len.trailing_zeros())
}
