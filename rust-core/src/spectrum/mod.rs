//! Spectral analysis on top of the transform engine

pub mod windowing;
pub mod power;
pub mod analysis;
pub mod psd;

pub use windowing::{apply_window, black, ham, han, harris, triang};
pub use power::power_db;
pub use analysis::{AnalyzerConfig, SpectrumAnalyzer};
pub use psd::{PowerSpectrumEstimator, PsdConfig};
