//! Windowing of complex sample buffers before a transform
//!
//! Every window scales the real and imaginary parts of each sample by the same
//! weight, in place, in a single pass.

use num_complex::Complex64;

use crate::filters::windows::{generate_window, WindowType};

/// Apply window in-place to a complex buffer
pub fn apply_window(buffer: &mut [Complex64], window_type: WindowType) {
    if window_type == WindowType::Rectangular {
        return;
    }
    let length = buffer.len();
    for (n, sample) in buffer.iter_mut().enumerate() {
        *sample *= window_type.weight(n, length);
    }
}

/// Apply window in-place to a real buffer
pub fn apply_window_real(signal: &mut [f64], window_type: WindowType) {
    if window_type == WindowType::Rectangular {
        return;
    }
    let length = signal.len();
    for (n, sample) in signal.iter_mut().enumerate() {
        *sample *= window_type.weight(n, length);
    }
}

/// Hamming window
pub fn ham(buffer: &mut [Complex64]) {
    apply_window(buffer, WindowType::Hamming);
}

/// Hanning window
pub fn han(buffer: &mut [Complex64]) {
    apply_window(buffer, WindowType::Hanning);
}

/// Triangle window
pub fn triang(buffer: &mut [Complex64]) {
    apply_window(buffer, WindowType::Triangular);
}

/// Blackman window
pub fn black(buffer: &mut [Complex64]) {
    apply_window(buffer, WindowType::Blackman);
}

/// 4-term Blackman-Harris window
pub fn harris(buffer: &mut [Complex64]) {
    apply_window(buffer, WindowType::BlackmanHarris);
}

/// Calculate window correction factor
///
/// When applying windows, the signal amplitude is reduced. This factor
/// can be used to correct the FFT magnitude.
///
/// # Returns
/// Correction factor N/Σw (multiply FFT magnitude by this)
pub fn window_correction_factor(window_type: WindowType, length: usize) -> f64 {
    let window = generate_window(window_type, length);
    let sum: f64 = window.iter().sum();
    length as f64 / sum
}

/// Calculate window power correction factor N/Σw² (for power spectral density)
pub fn window_power_correction_factor(window_type: WindowType, length: usize) -> f64 {
    let window = generate_window(window_type, length);
    let sum_sq: f64 = window.iter().map(|&w| w * w).sum();
    length as f64 / sum_sq
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ones(n: usize) -> Vec<Complex64> {
        vec![Complex64::new(1.0, -2.0); n]
    }

    #[test]
    fn test_apply_window_scales_both_parts() {
        let mut buffer = ones(100);
        apply_window(&mut buffer, WindowType::Hamming);

        let w = generate_window(WindowType::Hamming, 100);
        for (sample, &weight) in buffer.iter().zip(w.iter()) {
            assert!((sample.re - weight).abs() < 1e-12);
            assert!((sample.im + 2.0 * weight).abs() < 1e-12);
        }

        // Edges reduced to 0.08
        assert!((buffer[0].re - 0.08).abs() < 1e-12);
        assert!((buffer[99].re - 0.08).abs() < 1e-12);
    }

    #[test]
    fn test_named_windows_match_window_type() {
        let cases: [(fn(&mut [Complex64]), WindowType); 5] = [
            (ham, WindowType::Hamming),
            (han, WindowType::Hanning),
            (triang, WindowType::Triangular),
            (black, WindowType::Blackman),
            (harris, WindowType::BlackmanHarris),
        ];

        for (window_fn, window_type) in cases {
            let mut a = ones(33);
            let mut b = ones(33);
            window_fn(&mut a);
            apply_window(&mut b, window_type);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_hanning_endpoints_are_zero() {
        let mut buffer = ones(64);
        han(&mut buffer);
        assert!(buffer[0].norm() < 1e-12);
        assert!(buffer[63].norm() < 1e-12);
    }

    #[test]
    fn test_triangle_peaks_at_center() {
        let mut buffer = vec![Complex64::new(1.0, 1.0); 21];
        triang(&mut buffer);
        assert!((buffer[10] - Complex64::new(1.0, 1.0)).norm() < 1e-12);
        assert!(buffer[0].norm() < 1e-12);
    }

    #[test]
    fn test_rectangular_is_identity() {
        let mut buffer = ones(16);
        apply_window(&mut buffer, WindowType::Rectangular);
        assert_eq!(buffer, ones(16));

        let mut real = vec![0.5; 8];
        apply_window_real(&mut real, WindowType::Rectangular);
        assert_eq!(real, vec![0.5; 8]);
    }

    #[test]
    fn test_real_and_complex_agree() {
        let mut real = vec![1.0; 50];
        let mut complex = vec![Complex64::new(1.0, 0.0); 50];
        apply_window_real(&mut real, WindowType::Blackman);
        apply_window(&mut complex, WindowType::Blackman);
        for (r, c) in real.iter().zip(complex.iter()) {
            assert_eq!(*r, c.re);
        }
    }

    #[test]
    fn test_empty_buffer() {
        let mut buffer: Vec<Complex64> = Vec::new();
        harris(&mut buffer);
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_correction_factor() {
        let factor_rect = window_correction_factor(WindowType::Rectangular, 100);
        let factor_hamming = window_correction_factor(WindowType::Hamming, 100);

        // Rectangular window has no correction needed
        assert!((factor_rect - 1.0).abs() < 0.01);

        // Hamming window reduces amplitude, so correction > 1
        assert!(factor_hamming > 1.5 && factor_hamming < 2.5);

        let power_hann = window_power_correction_factor(WindowType::Hanning, 1000);
        // Σw² ≈ 3N/8 for Hann
        assert!((power_hann - 8.0 / 3.0).abs() < 0.01);
    }
}
