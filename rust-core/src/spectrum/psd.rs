//! Power spectral estimation by averaged, overlapped FFT snapshots
//!
//! Each estimate averages `averages` windowed FFT power spectra of `slice`
//! samples, consecutive snapshots advancing by `slice - overlap` samples.

use log::trace;
use num_complex::Complex64;

use super::power::{to_db, DEFAULT_DB_FLOOR};
use super::windowing::apply_window;
use crate::error::{try_zeroed, DspError, Result};
use crate::filters::windows::WindowType;
use crate::transform::log2::exact_order;
use crate::transform::TransformContext;

/// Largest snapshot length accepted
pub const MAX_SLICE: usize = 1024;

/// Largest number of snapshots per estimate
pub const MAX_AVERAGES: usize = 256;

/// Power spectral estimation parameters
#[derive(Debug, Clone)]
pub struct PsdConfig {
    /// Length of each FFT snapshot (power of two, 2..=1024)
    pub slice: usize,

    /// Number of snapshots averaged per estimate (1..=256)
    pub averages: usize,

    /// Samples shared by consecutive snapshots (0..slice)
    pub overlap: usize,

    /// Window applied to every snapshot
    pub window_type: WindowType,

    /// Lower clamp for averaged power before the log
    pub db_floor: f64,
}

impl Default for PsdConfig {
    fn default() -> Self {
        Self {
            slice: 64,
            averages: 16,
            overlap: 60,
            window_type: WindowType::Hamming,
            db_floor: DEFAULT_DB_FLOOR,
        }
    }
}

impl PsdConfig {
    /// Check every parameter is in range
    pub fn validate(&self) -> Result<()> {
        if !(2..=MAX_SLICE).contains(&self.slice) || !self.slice.is_power_of_two() {
            return Err(DspError::InvalidParameter(format!(
                "slice must be a power of two in 2..={MAX_SLICE}, got {}",
                self.slice
            )));
        }
        if !(1..=MAX_AVERAGES).contains(&self.averages) {
            return Err(DspError::InvalidParameter(format!(
                "averages must be in 1..={MAX_AVERAGES}, got {}",
                self.averages
            )));
        }
        if self.overlap >= self.slice {
            return Err(DspError::InvalidParameter(format!(
                "overlap must be below the slice length {}, got {}",
                self.slice, self.overlap
            )));
        }
        Ok(())
    }

    /// Samples consumed by one estimate
    pub fn estimate_size(&self) -> usize {
        (self.slice - self.overlap) * (self.averages - 1) + self.slice
    }

    /// Number of whole estimates in a record of `len` samples
    pub fn estimates(&self, len: usize) -> usize {
        len / self.estimate_size()
    }
}

/// Averaged power spectrum estimator
pub struct PowerSpectrumEstimator {
    config: PsdConfig,
    order: u32,
    context: TransformContext,
}

impl PowerSpectrumEstimator {
    /// Create an estimator, validating the configuration
    pub fn new(config: PsdConfig) -> Result<Self> {
        config.validate()?;
        let order = exact_order(config.slice)?;
        let mut context = TransformContext::new();
        context.prepare_fft(order)?;

        Ok(Self {
            config,
            order,
            context,
        })
    }

    /// Power spectral estimates of a real record, in dB
    ///
    /// # Returns
    /// One row of `slice/2` bins per whole estimate in the record
    pub fn estimate(&mut self, signal: &[f64]) -> Result<Vec<Vec<f64>>> {
        let slice = self.config.slice;
        let averages = self.config.averages;
        let hop = slice - self.config.overlap;
        let estimate_size = self.config.estimate_size();
        let count = self.config.estimates(signal.len());

        let mut samp: Vec<Complex64> = try_zeroed("psd snapshot", slice)?;
        let mut mag: Vec<f64> = try_zeroed("psd accumulator", slice)?;
        let norm = 1.0 / (slice as f64 * slice as f64);
        let mut rows = Vec::with_capacity(count);

        for i in 0..count {
            mag.fill(0.0);

            for j in 0..averages {
                let start = i * estimate_size + j * hop;
                for (s, &x) in samp.iter_mut().zip(&signal[start..start + slice]) {
                    *s = Complex64::new(x, 0.0);
                }
                apply_window(&mut samp, self.config.window_type);
                self.context.fft(&mut samp, self.order)?;

                for (acc, bin) in mag.iter_mut().zip(samp.iter()) {
                    *acc += bin.norm_sqr() * norm;
                }
            }

            // Log after averaging
            let row: Vec<f64> = mag[..slice / 2]
                .iter()
                .map(|&p| to_db(p / averages as f64, self.config.db_floor))
                .collect();
            rows.push(row);

            trace!("psd estimate {}/{} complete", i + 1, count);
        }

        Ok(rows)
    }

    /// Get current configuration
    pub fn config(&self) -> &PsdConfig {
        &self.config
    }
}
