//! Real-input FFT by trig recombination
//!
//! `N` real samples are packed into `N/2` complex samples, transformed with the
//! half-length radix-2 FFT, and recombined into the lower `N/2 + 1` bins of the
//! real spectrum. The upper bins are the conjugate mirror and are not produced.

use num_complex::Complex64;
use std::f64::consts::PI;

use super::cache::TransformKind;
use super::context::TransformContext;
use super::fft::{radix2_in_place, twiddle_table};
use super::log2::order_len;
use crate::error::{try_zeroed, DspError, Result};

/// Recombination coefficients `(cos kπ/num, sin kπ/num)` for `k = 1..num`
pub(crate) fn recombination_table(num: usize) -> Result<Vec<Complex64>> {
    let len = num.saturating_sub(1);
    let mut cf: Vec<Complex64> = try_zeroed("rfft recombination", len)?;

    let factor = PI / num as f64;
    for (idx, c) in cf.iter_mut().enumerate() {
        let arg = factor * (idx + 1) as f64;
        *c = Complex64::new(arg.cos(), arg.sin());
    }

    Ok(cf)
}

/// Number of spectrum bins produced for `2^m` real samples
pub fn rfft_bins(m: u32) -> Result<usize> {
    Ok(order_len(m)? / 2 + 1)
}

impl TransformContext {
    /// Spectrum of `2^m` real samples, bins `0..=N/2` written to `output`
    ///
    /// Requires `m >= 1`, `input.len() == 2^m` and room for `2^(m-1) + 1` bins.
    /// `input` is not modified. DC and Nyquist bins are purely real.
    pub fn rfft(&mut self, input: &[f64], output: &mut [Complex64], m: u32) -> Result<()> {
        let n = order_len(m)?;
        if m == 0 {
            return Err(DspError::BufferTooShort {
                required: 2,
                actual: input.len(),
            });
        }
        if input.len() != n {
            return Err(DspError::InvalidLength {
                expected: n,
                actual: input.len(),
            });
        }
        let num = n / 2;
        if output.len() < num + 1 {
            return Err(DspError::BufferTooShort {
                required: num + 1,
                actual: output.len(),
            });
        }

        self.prepare_rfft(m)?;

        for (z, pair) in self.rfft_scratch.iter_mut().zip(input.chunks_exact(2)) {
            *z = Complex64::new(pair[0], pair[1]);
        }

        let w = self
            .fft
            .get_or_build(TransformKind::Fft, num, |n| twiddle_table(n, false))?;
        radix2_in_place(&mut self.rfft_scratch, m - 1, w);

        let cf = self
            .rfft
            .get_or_build(TransformKind::RealFft, num, recombination_table)?;
        let cx = &self.rfft_scratch;

        // DC and Nyquist need no multiplies
        output[0] = Complex64::new(cx[0].re + cx[0].im, 0.0);
        output[num] = Complex64::new(cx[0].re - cx[0].im, 0.0);

        for k in 1..num {
            let xk = cx[k];
            let xnk = cx[num - k];
            let ck = cf[k - 1];

            let realsum = (xk.re + xnk.re) / 2.0;
            let imagsum = (xk.im + xnk.im) / 2.0;
            let realdif = (xk.re - xnk.re) / 2.0;
            let imagdif = (xk.im - xnk.im) / 2.0;

            output[k] = Complex64::new(
                realsum + ck.re * imagsum - ck.im * realdif,
                imagdif - ck.im * imagsum - ck.re * realdif,
            );
        }

        Ok(())
    }

    /// [`rfft`](Self::rfft) into a freshly allocated vector of `N/2 + 1` bins
    pub fn rfft_vec(&mut self, input: &[f64], m: u32) -> Result<Vec<Complex64>> {
        let mut output = try_zeroed("rfft output", rfft_bins(m)?)?;
        self.rfft(input, &mut output, m)?;
        Ok(output)
    }

    /// Build the half-length FFT table, recombination table and scratch buffer
    /// for `2^m` real samples
    pub fn prepare_rfft(&mut self, m: u32) -> Result<()> {
        let n = order_len(m)?;
        if m == 0 {
            return Err(DspError::BufferTooShort { required: 2, actual: n });
        }
        let num = n / 2;

        if self.rfft_scratch.len() != num {
            self.rfft_scratch = try_zeroed("rfft scratch", num)?;
        }
        self.fft
            .get_or_build(TransformKind::Fft, num, |n| twiddle_table(n, false))?;
        self.rfft
            .get_or_build(TransformKind::RealFft, num, recombination_table)?;
        Ok(())
    }
}
