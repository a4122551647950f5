//! 2:1 interpolation by zero-insertion in the frequency domain

use num_complex::Complex64;

use crate::error::{try_zeroed, Result};
use crate::transform::log2::order_len;
use crate::transform::{log2, TransformContext};

/// Interpolate a real record by a factor of two
///
/// The record is zero-padded to `N = 2^log2(len)` and transformed; its
/// negative-frequency half moves to the top of a `2N` spectrum with zeros
/// in between, the Nyquist bin is split evenly between both halves, and the
/// inverse transform gives `2·len` samples at twice the rate.
pub fn interpolate_2x(ctx: &mut TransformContext, signal: &[f64]) -> Result<Vec<f64>> {
    let length = signal.len();
    let m = log2(length)?;
    let fft_length = order_len(m)?;

    let mut samp: Vec<Complex64> = try_zeroed("interpolation buffer", 2 * fft_length)?;
    for (s, &x) in samp.iter_mut().zip(signal.iter()) {
        *s = Complex64::new(x, 0.0);
    }

    ctx.fft(&mut samp[..fft_length], m)?;

    if fft_length > 1 {
        // Divide the middle frequency component by 2
        let half = fft_length / 2;
        samp[half] *= 0.5;
        samp[3 * half] = samp[half];

        // Move the negative frequencies to the top
        for i in half + 1..fft_length {
            samp[i + fft_length] = samp[i];
            samp[i] = Complex64::new(0.0, 0.0);
        }
    }

    ctx.ifft(&mut samp, m + 1)?;

    Ok(samp[..2 * length].iter().map(|c| 2.0 * c.re).collect())
}
