//! Discrete Fourier transforms with per-size coefficient caching

pub mod cache;
pub mod context;
pub mod dft;
pub mod fft;
pub mod log2;
pub mod rfft;

pub use cache::TransformKind;
pub use context::{TransformConfig, TransformContext};
pub use log2::log2;
pub use rfft::rfft_bins;
