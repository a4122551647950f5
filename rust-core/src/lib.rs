//! Spectral Engine - Discrete Fourier Transform Core
//! 
//! DFT, radix-2 FFT/IFFT, real-input FFT and spectral windows with per-size
//! coefficient caching, plus the spectrum, convolution and interpolation
//! helpers built on them.

pub mod error;
pub mod filters;
pub mod spectrum;
pub mod transform;

pub use error::{DspError, Result};
pub use filters::{FastConvolver, WindowType};
pub use spectrum::{PowerSpectrumEstimator, SpectrumAnalyzer};
pub use transform::{log2, TransformConfig, TransformContext};

pub use num_complex::Complex64;
