//! Transform context owning the per-kind coefficient caches
//!
//! One context per thread. Every transform takes `&mut self`, so a table is never
//! rebuilt while another call is reading it.

use num_complex::Complex64;

use super::cache::CoefficientCache;
use crate::error::Result;

/// Context configuration
#[derive(Debug, Clone, Default)]
pub struct TransformConfig {
    /// Build FFT and IFFT tables for `2^fft_order` points up front
    pub fft_order: Option<u32>,

    /// Build real-FFT tables for `2^rfft_order` real samples up front
    pub rfft_order: Option<u32>,
}

/// Owner of the DFT, IDFT, FFT, IFFT and real-FFT coefficient tables
///
/// Tables are built lazily and rebuilt whenever a call requests a different size
/// than the previous call of the same kind.
#[derive(Debug, Default)]
pub struct TransformContext {
    pub(crate) dft: CoefficientCache,
    pub(crate) idft: CoefficientCache,
    pub(crate) fft: CoefficientCache,
    pub(crate) ifft: CoefficientCache,
    pub(crate) rfft: CoefficientCache,

    /// Packed half-length complex buffer for the real FFT
    pub(crate) rfft_scratch: Vec<Complex64>,
}

impl TransformContext {
    /// Create an empty context (all tables built on first use)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context with tables prepared for the configured sizes
    ///
    /// When both orders are set the FFT cache ends up holding `fft_order`.
    pub fn with_config(config: &TransformConfig) -> Result<Self> {
        let mut ctx = Self::new();

        if let Some(m) = config.rfft_order {
            ctx.prepare_rfft(m)?;
        }
        if let Some(m) = config.fft_order {
            ctx.prepare_fft(m)?;
        }

        Ok(ctx)
    }

    /// Size of the cached forward FFT table (transform length), if any
    pub fn fft_size(&self) -> Option<usize> {
        self.fft.size()
    }

    /// Size of the cached inverse FFT table (transform length), if any
    pub fn ifft_size(&self) -> Option<usize> {
        self.ifft.size()
    }

    /// Size of the cached DFT kernel, if any
    pub fn dft_size(&self) -> Option<usize> {
        self.dft.size()
    }

    /// Size of the cached IDFT kernel, if any
    pub fn idft_size(&self) -> Option<usize> {
        self.idft.size()
    }

    /// Half-length of the cached real-FFT recombination table, if any
    pub fn rfft_size(&self) -> Option<usize> {
        self.rfft.size()
    }
}
