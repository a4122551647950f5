//! In-place radix-2 decimation-in-time FFT and inverse FFT
//!
//! Buffers must hold exactly `2^m` samples. Twiddles come from a table built once
//! per size by a complex-multiply recurrence, so the only trigonometric calls are
//! the single cos/sin pair that seeds it.

use num_complex::Complex64;
use std::f64::consts::PI;

use super::cache::TransformKind;
use super::context::TransformContext;
use super::log2::order_len;
use crate::error::{try_zeroed, DspError, Result};

/// Twiddle table for an `n`-point transform: `w[k-1] = e^(∓iπk/(n/2))`, `k = 1..n/2`
///
/// The forward table rotates clockwise, the inverse one counter-clockwise.
pub(crate) fn twiddle_table(n: usize, inverse: bool) -> Result<Vec<Complex64>> {
    let le = n / 2;
    let len = le.saturating_sub(1);
    let mut w: Vec<Complex64> = try_zeroed("fft twiddles", len)?;
    if len == 0 {
        return Ok(w);
    }

    let arg = PI / le as f64;
    let sign = if inverse { 1.0 } else { -1.0 };
    let step = Complex64::new(arg.cos(), sign * arg.sin());

    let mut wrecur = step;
    for slot in w.iter_mut() {
        *slot = wrecur;
        wrecur *= step;
    }

    Ok(w)
}

/// Butterfly stages followed by the bit-reversal permutation
///
/// `x.len()` is `2^m` and `w` is the matching table from [`twiddle_table`].
pub(crate) fn radix2_in_place(x: &mut [Complex64], m: u32, w: &[Complex64]) {
    let n = x.len();
    let mut le = n;
    let mut windex = 1;

    for _ in 0..m {
        le /= 2;

        // First group: twiddle is 1
        for i in (0..n).step_by(2 * le) {
            let (a, b) = (x[i], x[i + le]);
            x[i] = a + b;
            x[i + le] = a - b;
        }

        let mut wi = windex - 1;
        for j in 1..le {
            let u = w[wi];
            for i in (j..n).step_by(2 * le) {
                let (a, b) = (x[i], x[i + le]);
                x[i] = a + b;
                x[i + le] = (a - b) * u;
            }
            wi += windex;
        }

        windex *= 2;
    }

    bit_reverse(x);
}

/// Reorder so index `k` holds the element at the bit-reversal of `k`
fn bit_reverse(x: &mut [Complex64]) {
    let n = x.len();
    let mut j = 0;

    for i in 1..n.saturating_sub(1) {
        let mut k = n / 2;
        while k <= j {
            j -= k;
            k /= 2;
        }
        j += k;
        if i < j {
            x.swap(i, j);
        }
    }
}

/// Check `buffer` holds exactly `2^m` samples
fn checked_len(buffer: &[Complex64], m: u32) -> Result<usize> {
    let n = order_len(m)?;
    if buffer.len() != n {
        return Err(DspError::InvalidLength {
            expected: n,
            actual: buffer.len(),
        });
    }
    Ok(n)
}

impl TransformContext {
    /// Forward FFT of `2^m` samples, in place
    ///
    /// Output bin `k` is `Σ x[n]·e^(-2πi·kn/N)`; bin 0 is DC. `m = 0` leaves the
    /// single sample unchanged. A buffer of any other length than `2^m` is
    /// rejected before it is touched.
    pub fn fft(&mut self, buffer: &mut [Complex64], m: u32) -> Result<()> {
        let n = checked_len(buffer, m)?;
        if m == 0 {
            return Ok(());
        }

        let w = self
            .fft
            .get_or_build(TransformKind::Fft, n, |n| twiddle_table(n, false))?;
        radix2_in_place(buffer, m, w);
        Ok(())
    }

    /// Inverse FFT of `2^m` samples, in place, scaled by `1/N`
    pub fn ifft(&mut self, buffer: &mut [Complex64], m: u32) -> Result<()> {
        let n = checked_len(buffer, m)?;
        if m == 0 {
            return Ok(());
        }

        let w = self
            .ifft
            .get_or_build(TransformKind::Ifft, n, |n| twiddle_table(n, true))?;
        radix2_in_place(buffer, m, w);

        let scale = 1.0 / n as f64;
        for x in buffer.iter_mut() {
            *x *= scale;
        }
        Ok(())
    }

    /// Build the FFT and IFFT tables for `2^m` points ahead of the first call
    pub fn prepare_fft(&mut self, m: u32) -> Result<()> {
        let n = order_len(m)?;
        self.fft
            .get_or_build(TransformKind::Fft, n, |n| twiddle_table(n, false))?;
        self.ifft
            .get_or_build(TransformKind::Ifft, n, |n| twiddle_table(n, true))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use rustfft::FftPlanner;

    const TOL: f64 = 1e-9;

    fn random_signal(n: usize, seed: u64) -> Vec<Complex64> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..n)
            .map(|_| Complex64::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)))
            .collect()
    }

    fn assert_close(a: &[Complex64], b: &[Complex64], tol: f64) {
        assert_eq!(a.len(), b.len());
        for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
            assert!((x - y).norm() < tol, "Mismatch at {}: {} vs {}", i, x, y);
        }
    }

    #[test]
    fn test_twiddle_table_matches_direct_evaluation() {
        let n = 64;
        let w = twiddle_table(n, false).unwrap();
        assert_eq!(w.len(), n / 2 - 1);

        for (idx, &value) in w.iter().enumerate() {
            let k = (idx + 1) as f64;
            let expected = Complex64::from_polar(1.0, -2.0 * PI * k / n as f64);
            assert!((value - expected).norm() < 1e-12);
        }

        let wi = twiddle_table(n, true).unwrap();
        for (f, i) in w.iter().zip(wi.iter()) {
            assert!((f.conj() - i).norm() < 1e-12);
        }
    }

    #[test]
    fn test_twiddle_table_small_sizes() {
        assert!(twiddle_table(1, false).unwrap().is_empty());
        assert!(twiddle_table(2, false).unwrap().is_empty());
        assert_eq!(twiddle_table(4, false).unwrap().len(), 1);
    }

    #[test]
    fn test_fft_impulse() {
        let mut ctx = TransformContext::new();

        for m in 0..=10 {
            let n = 1 << m;
            let mut x = vec![Complex64::new(0.0, 0.0); n];
            x[0] = Complex64::new(1.0, 0.0);

            ctx.fft(&mut x, m).unwrap();

            for bin in &x {
                assert!((bin - Complex64::new(1.0, 0.0)).norm() < TOL);
            }
        }
    }

    #[test]
    fn test_fft_dc_signal() {
        let mut ctx = TransformContext::new();
        let c = 0.75;
        let mut x = vec![Complex64::new(c, 0.0); 128];

        ctx.fft(&mut x, 7).unwrap();

        assert!((x[0] - Complex64::new(128.0 * c, 0.0)).norm() < TOL);
        for bin in &x[1..] {
            assert!(bin.norm() < TOL);
        }
    }

    #[test]
    fn test_fft_single_tone_lands_in_its_bin() {
        let mut ctx = TransformContext::new();
        let n = 256;
        let tone = 19;
        let mut x: Vec<Complex64> = (0..n)
            .map(|i| Complex64::from_polar(1.0, 2.0 * PI * tone as f64 * i as f64 / n as f64))
            .collect();

        ctx.fft(&mut x, 8).unwrap();

        for (k, bin) in x.iter().enumerate() {
            let expected = if k == tone { n as f64 } else { 0.0 };
            assert!((bin.norm() - expected).abs() < 1e-8, "bin {}: {}", k, bin);
        }
    }

    #[test]
    fn test_fft_matches_rustfft() {
        let mut ctx = TransformContext::new();
        let mut planner = FftPlanner::<f64>::new();

        for m in 1..=12 {
            let n = 1 << m;
            let signal = random_signal(n, m as u64);

            let mut ours = signal.clone();
            ctx.fft(&mut ours, m).unwrap();

            let mut reference = signal;
            planner.plan_fft_forward(n).process(&mut reference);

            assert_close(&ours, &reference, 1e-9 * n as f64);
        }
    }

    #[test]
    fn test_ifft_round_trip() {
        let mut ctx = TransformContext::new();

        for m in 0..=12 {
            let n = 1 << m;
            let signal = random_signal(n, 100 + m as u64);

            let mut x = signal.clone();
            ctx.fft(&mut x, m).unwrap();
            ctx.ifft(&mut x, m).unwrap();

            assert_close(&x, &signal, 1e-10);
        }
    }

    #[test]
    fn test_ifft_scales_by_n() {
        let mut ctx = TransformContext::new();
        let mut x = vec![Complex64::new(1.0, 0.0); 16];

        // Flat spectrum -> impulse of height 1
        ctx.ifft(&mut x, 4).unwrap();

        assert!((x[0] - Complex64::new(1.0, 0.0)).norm() < TOL);
        for v in &x[1..] {
            assert!(v.norm() < TOL);
        }
    }

    #[test]
    fn test_cache_under_size_churn() {
        let mut churned = TransformContext::new();
        for (round, m) in [4u32, 6, 4, 6, 4].into_iter().enumerate() {
            let n = 1 << m;
            let signal = random_signal(n, round as u64);

            let mut a = signal.clone();
            churned.fft(&mut a, m).unwrap();
            assert_eq!(churned.fft_size(), Some(n));

            let mut b = signal;
            TransformContext::new().fft(&mut b, m).unwrap();

            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_fft_and_ifft_caches_are_independent() {
        let mut ctx = TransformContext::new();
        let mut a = random_signal(32, 1);
        let mut b = random_signal(8, 2);

        ctx.fft(&mut a, 5).unwrap();
        ctx.ifft(&mut b, 3).unwrap();

        assert_eq!(ctx.fft_size(), Some(32));
        assert_eq!(ctx.ifft_size(), Some(8));
    }

    #[test]
    fn test_invalid_length_leaves_buffer_untouched() {
        let mut ctx = TransformContext::new();
        let signal = random_signal(12, 3);

        let mut x = signal.clone();
        let err = ctx.fft(&mut x, 4).unwrap_err();
        assert_eq!(err, DspError::InvalidLength { expected: 16, actual: 12 });
        assert_eq!(x, signal);

        let err = ctx.ifft(&mut x, 3).unwrap_err();
        assert!(err.is_invalid_length());
        assert_eq!(x, signal);

        assert_eq!(ctx.fft_size(), None);
        assert_eq!(ctx.ifft_size(), None);
    }

    #[test]
    fn test_order_too_large() {
        let mut ctx = TransformContext::new();
        let mut x = vec![Complex64::new(0.0, 0.0); 4];
        assert_eq!(ctx.fft(&mut x, 200), Err(DspError::OrderTooLarge(200)));
    }

    #[test]
    fn test_order_zero_is_identity() {
        let mut ctx = TransformContext::new();
        let mut x = vec![Complex64::new(3.0, -2.0)];

        ctx.fft(&mut x, 0).unwrap();
        assert_eq!(x[0], Complex64::new(3.0, -2.0));

        ctx.ifft(&mut x, 0).unwrap();
        assert_eq!(x[0], Complex64::new(3.0, -2.0));
    }

    #[test]
    fn test_bit_reverse_permutation() {
        let mut x: Vec<Complex64> = (0..8).map(|i| Complex64::new(i as f64, 0.0)).collect();
        bit_reverse(&mut x);
        let order: Vec<usize> = x.iter().map(|c| c.re as usize).collect();
        assert_eq!(order, vec![0, 4, 2, 6, 1, 5, 3, 7]);
    }

    #[test]
    fn test_prepare_fft() {
        let mut ctx = TransformContext::new();
        ctx.prepare_fft(9).unwrap();
        assert_eq!(ctx.fft_size(), Some(512));
        assert_eq!(ctx.ifft_size(), Some(512));
    }
}
