//! Spectrum analyzer
//!
//! Combines windowing with the complex or real FFT and log-power scaling

use num_complex::Complex64;

use super::power::{power_db, DEFAULT_DB_FLOOR};
use super::windowing::{apply_window, apply_window_real};
use crate::error::{try_zeroed, DspError, Result};
use crate::filters::windows::WindowType;
use crate::transform::log2::{exact_order, order_len};
use crate::transform::{log2, TransformContext};

/// Spectrum analyzer configuration
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// FFT order m (transform length 2^m); `None` sizes it from the record
    pub order: Option<u32>,

    /// Window type for spectral analysis
    pub window_type: WindowType,

    /// Lower clamp for normalized power before the log
    pub db_floor: f64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            order: None,
            window_type: WindowType::Rectangular,
            db_floor: DEFAULT_DB_FLOOR,
        }
    }
}

/// Log-magnitude spectrum analyzer
pub struct SpectrumAnalyzer {
    config: AnalyzerConfig,
    context: TransformContext,
}

impl SpectrumAnalyzer {
    /// Create new spectrum analyzer
    pub fn new(config: AnalyzerConfig) -> Self {
        Self {
            config,
            context: TransformContext::new(),
        }
    }

    /// Windowed complex FFT of a record, in dB
    ///
    /// The record is windowed over its own length, zero-padded to `2^m` and
    /// normalized by `4/len²`, so a full-scale sinusoid reads about 0 dB.
    ///
    /// # Returns
    /// All `2^m` bins
    pub fn analyze(&mut self, signal: &[f64]) -> Result<Vec<f64>> {
        let length = signal.len();
        let m = self.fft_order(length)?;
        let fft_length = order_len(m)?;

        let mut samp: Vec<Complex64> = try_zeroed("analyzer buffer", fft_length)?;
        for (s, &x) in samp.iter_mut().zip(signal.iter()) {
            *s = Complex64::new(x, 0.0);
        }
        apply_window(&mut samp[..length], self.config.window_type);

        self.context.fft(&mut samp, m)?;

        let scale = 4.0 / (length as f64 * length as f64);
        Ok(power_db(&samp, scale, self.config.db_floor))
    }

    /// Windowed real FFT of a power-of-two record, in dB
    ///
    /// Normalized by `1/len²`.
    ///
    /// # Returns
    /// The lower `len/2` bins
    pub fn analyze_real(&mut self, signal: &[f64]) -> Result<Vec<f64>> {
        let length = signal.len();
        let m = exact_order(length)?;

        let mut windowed = signal.to_vec();
        apply_window_real(&mut windowed, self.config.window_type);

        let bins = self.context.rfft_vec(&windowed, m)?;

        let scale = 1.0 / (length as f64 * length as f64);
        Ok(power_db(&bins[..length / 2], scale, self.config.db_floor))
    }

    fn fft_order(&self, length: usize) -> Result<u32> {
        let needed = log2(length)?;
        match self.config.order {
            None => Ok(needed),
            Some(m) if m >= needed => Ok(m),
            Some(m) => Err(DspError::BufferTooShort {
                required: length,
                actual: order_len(m)?,
            }),
        }
    }

    /// Update configuration
    pub fn update_config(&mut self, config: AnalyzerConfig) {
        self.config = config;
    }

    /// Get current configuration
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }
}
