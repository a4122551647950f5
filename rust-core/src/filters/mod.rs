//! Window functions and FFT-based filtering

pub mod windows;
pub mod fast_conv;
pub mod interpolate;

pub use windows::{WindowType, generate_window};
pub use fast_conv::FastConvolver;
pub use interpolate::interpolate_2x;
