//! Direct O(N²) DFT and inverse DFT
//!
//! Reference transforms for arbitrary lengths. The kernel value for the pair
//! `(n, k)` depends only on `n·k mod N`, so the cached table holds `N` values
//! rather than `N²`.

use num_complex::Complex64;
use std::f64::consts::PI;

use super::cache::TransformKind;
use super::context::TransformContext;
use crate::error::{try_zeroed, DspError, Result};

/// Kernel `e^(∓2πi·p/N)` for `p = 0..N`; the inverse kernel carries the `1/N` scale
pub(crate) fn kernel_table(n: usize, inverse: bool) -> Result<Vec<Complex64>> {
    let mut cf: Vec<Complex64> = try_zeroed("dft kernel", n)?;

    let arg = 2.0 * PI / n as f64;
    let (sign, scale) = if inverse {
        (1.0, 1.0 / n as f64)
    } else {
        (-1.0, 1.0)
    };

    for (p, c) in cf.iter_mut().enumerate() {
        let theta = arg * p as f64;
        *c = Complex64::new(theta.cos() * scale, sign * theta.sin() * scale);
    }

    Ok(cf)
}

fn check_buffers(input: &[Complex64], output: &[Complex64], n: usize) -> Result<()> {
    if n == 0 {
        return Err(DspError::ZeroLength);
    }
    for len in [input.len(), output.len()] {
        if len < n {
            return Err(DspError::BufferTooShort { required: n, actual: len });
        }
    }
    Ok(())
}

/// `output[k] = Σ input[i]·cf[(i·k) mod n]`
fn correlate(input: &[Complex64], output: &mut [Complex64], n: usize, cf: &[Complex64]) {
    let len = n as u64;

    for (k, out) in output[..n].iter_mut().enumerate() {
        let mut acc = Complex64::new(0.0, 0.0);
        for (i, x) in input[..n].iter().enumerate() {
            let p = ((i as u64 * k as u64) % len) as usize;
            acc += x * cf[p];
        }
        *out = acc;
    }
}

impl TransformContext {
    /// Direct DFT of the first `n` samples of `input` into `output`
    ///
    /// `output[k] = Σ input[i]·e^(-2πi·ik/n)`. Both buffers must hold at least `n`
    /// samples and `n` must be at least 1.
    pub fn dft(&mut self, input: &[Complex64], output: &mut [Complex64], n: usize) -> Result<()> {
        check_buffers(input, output, n)?;
        let cf = self
            .dft
            .get_or_build(TransformKind::Dft, n, |n| kernel_table(n, false))?;
        correlate(input, output, n, cf);
        Ok(())
    }

    /// Direct inverse DFT; the `1/n` scale lives in the cached kernel
    pub fn idft(&mut self, input: &[Complex64], output: &mut [Complex64], n: usize) -> Result<()> {
        check_buffers(input, output, n)?;
        let cf = self
            .idft
            .get_or_build(TransformKind::Idft, n, |n| kernel_table(n, true))?;
        correlate(input, output, n, cf);
        Ok(())
    }
}
