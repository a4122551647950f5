//! Window functions for spectral analysis
//!
//! Closed-form weights, computed on the fly. Nothing here is cached: a window is
//! applied once per buffer.

use std::f64::consts::PI;

/// Window function types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowType {
    /// Rectangular window (no windowing)
    #[default]
    Rectangular,

    /// Hamming window: w[n] = 0.54 - 0.46*cos(2πn/(N-1))
    /// Endpoints at 0.08
    Hamming,

    /// Hanning window: w[n] = 0.5 - 0.5*cos(2πn/(N-1))
    /// Endpoints at 0
    Hanning,

    /// Triangular window rising to 1.0 at the center index
    Triangular,

    /// Blackman window: w[n] = 0.42 - 0.5*cos(2πn/(N-1)) + 0.08*cos(4πn/(N-1))
    Blackman,

    /// 4-term Blackman-Harris window (periodic, denominator N)
    /// Sidelobes below -92 dB
    BlackmanHarris,
}

impl WindowType {
    pub const ALL: [WindowType; 6] = [
        WindowType::Rectangular,
        WindowType::Hamming,
        WindowType::Hanning,
        WindowType::Triangular,
        WindowType::Blackman,
        WindowType::BlackmanHarris,
    ];

    /// Weight of sample `n` in a window of `length` samples
    pub fn weight(&self, n: usize, length: usize) -> f64 {
        // Symmetric windows divide by N-1; a single sample passes through
        if length <= 1 && *self != WindowType::BlackmanHarris {
            return 1.0;
        }
        let span = length.saturating_sub(1) as f64;

        match self {
            WindowType::Rectangular => 1.0,

            WindowType::Hamming => {
                let angle = 2.0 * PI * n as f64 / span;
                0.54 - 0.46 * angle.cos()
            }

            WindowType::Hanning => {
                let angle = 2.0 * PI * n as f64 / span;
                0.5 - 0.5 * angle.cos()
            }

            WindowType::Triangular => {
                // Midpoint belongs to the rising half
                let a = 2.0 / span;
                if n <= (length - 1) / 2 {
                    n as f64 * a
                } else {
                    2.0 - n as f64 * a
                }
            }

            WindowType::Blackman => {
                let angle = 2.0 * PI * n as f64 / span;
                0.42 - 0.5 * angle.cos() + 0.08 * (2.0 * angle).cos()
            }

            WindowType::BlackmanHarris => {
                let arg = 2.0 * PI * n as f64 / length as f64;
                0.35875 - 0.48829 * arg.cos() + 0.14128 * (2.0 * arg).cos()
                    - 0.01168 * (3.0 * arg).cos()
            }
        }
    }
}

/// Generate window coefficients
///
/// # Arguments
/// * `window_type` - Type of window function
/// * `length` - Number of samples (N)
///
/// # Returns
/// Vector of window coefficients w[n] for n = 0..N-1
pub fn generate_window(window_type: WindowType, length: usize) -> Vec<f64> {
    (0..length).map(|n| window_type.weight(n, length)).collect()
}
