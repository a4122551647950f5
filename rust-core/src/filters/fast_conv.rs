//! FFT-based fast convolution of a record with an FIR impulse response
//!
//! The filter spectrum is computed once; each record is transformed, multiplied
//! bin by bin and transformed back. Complexity: O(N log N) vs O(N*M) for time-domain

use num_complex::Complex64;

use crate::error::{try_zeroed, DspError, Result};
use crate::spectrum::power::power_db;
use crate::transform::log2::order_len;
use crate::transform::{log2, TransformContext};

/// FFT convolver for records of a fixed maximum length
pub struct FastConvolver {
    /// Filter coefficients in frequency domain
    h_fft: Vec<Complex64>,

    /// FFT order (fft_size = 2^order)
    order: u32,

    /// Record length the FFT size was chosen for
    record_len: usize,

    /// Filter length
    filter_length: usize,

    context: TransformContext,

    /// Reusable buffer
    buffer: Vec<Complex64>,
}

impl FastConvolver {
    /// Create new FFT-based convolver
    ///
    /// # Arguments
    /// * `coefficients` - Filter coefficients h[n]
    /// * `record_len` - Length of the records to be filtered
    ///
    /// # Note
    /// FFT size is the next power of 2 >= max(record_len, filter length). Samples
    /// that would land past the FFT size wrap around (circular convolution); pad
    /// the record if the full linear tail is needed.
    pub fn new(coefficients: &[f64], record_len: usize) -> Result<Self> {
        if coefficients.is_empty() {
            return Err(DspError::ZeroLength);
        }
        let filter_length = coefficients.len();
        let order = log2(record_len.max(filter_length))?;
        let fft_size = order_len(order)?;

        let mut context = TransformContext::new();

        // Transform the zero-padded impulse response once
        let mut h_fft: Vec<Complex64> = try_zeroed("filter spectrum", fft_size)?;
        for (h, &coeff) in h_fft.iter_mut().zip(coefficients.iter()) {
            *h = Complex64::new(coeff, 0.0);
        }
        context.fft(&mut h_fft, order)?;
        context.prepare_fft(order)?;

        let buffer = try_zeroed("convolution buffer", fft_size)?;

        Ok(Self {
            h_fft,
            order,
            record_len,
            filter_length,
            context,
            buffer,
        })
    }

    /// Filter a record
    ///
    /// # Arguments
    /// * `signal` - Input record (length <= record_len)
    ///
    /// # Returns
    /// Filtered output (same length as input)
    pub fn filter(&mut self, signal: &[f64]) -> Result<Vec<f64>> {
        if signal.len() > self.record_len {
            return Err(DspError::BufferTooShort {
                required: signal.len(),
                actual: self.record_len,
            });
        }

        // 1. Copy input to complex buffer and zero-pad
        self.buffer.fill(Complex64::new(0.0, 0.0));
        for (b, &x) in self.buffer.iter_mut().zip(signal.iter()) {
            *b = Complex64::new(x, 0.0);
        }

        // 2. Forward FFT of input
        self.context.fft(&mut self.buffer, self.order)?;

        // 3. Multiply in frequency domain (convolution in time domain)
        for (b, h) in self.buffer.iter_mut().zip(self.h_fft.iter()) {
            *b *= *h;
        }

        // 4. Inverse FFT (scaled by 1/N)
        self.context.ifft(&mut self.buffer, self.order)?;

        Ok(self.buffer[..signal.len()].iter().map(|c| c.re).collect())
    }

    /// Filter magnitude transfer function in dB, normalized by the filter length
    ///
    /// # Returns
    /// All `fft_size` bins
    pub fn spectrum_db(&self, floor: f64) -> Vec<f64> {
        let len = self.filter_length as f64;
        power_db(&self.h_fft, 1.0 / (len * len), floor)
    }

    /// Get filter length
    pub fn filter_length(&self) -> usize {
        self.filter_length
    }

    /// Get FFT size
    pub fn fft_size(&self) -> usize {
        self.h_fft.len()
    }
}
