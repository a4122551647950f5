//! Magnitude and log-power helpers for displaying transform output

use num_complex::Complex64;

/// Smallest normalized power reported before taking the log (-140 dB)
pub const DEFAULT_DB_FLOOR: f64 = 1e-14;

/// Magnitude |X[k]| of each bin
pub fn magnitude(bins: &[Complex64]) -> Vec<f64> {
    bins.iter().map(|c| c.norm()).collect()
}

/// Power |X[k]|² · `scale` of each bin
pub fn power(bins: &[Complex64], scale: f64) -> Vec<f64> {
    bins.iter().map(|c| c.norm_sqr() * scale).collect()
}

/// Power spectrum in dB: 10*log10(max(|X[k]|² · scale, floor))
///
/// Callers normalize with `scale = 1/N²` (or `4/N²` for a one-sided
/// amplitude reading of a real record).
pub fn power_db(bins: &[Complex64], scale: f64, floor: f64) -> Vec<f64> {
    bins.iter()
        .map(|c| to_db(c.norm_sqr() * scale, floor))
        .collect()
}

/// 10*log10 of an already normalized power value, clamped at `floor`
#[inline]
pub fn to_db(power: f64, floor: f64) -> f64 {
    10.0 * power.max(floor).log10()
}

/// Close-up view of `len` values centered on `center`
///
/// Indices falling outside the spectrum repeat the nearest edge value.
pub fn view(spectrum: &[f64], center: usize, len: usize) -> Vec<f64> {
    if spectrum.is_empty() {
        return Vec::new();
    }
    let last = spectrum.len() - 1;
    let begin = center as isize - (len / 2) as isize;

    (0..len)
        .map(|k| {
            let i = (begin + k as isize).clamp(0, last as isize) as usize;
            spectrum[i]
        })
        .collect()
}

/// Frequency in Hz of each of the first `bins` bins of an `fft_len`-point transform
pub fn frequency_axis(fft_len: usize, bins: usize, sample_rate: f64) -> Vec<f64> {
    (0..bins)
        .map(|k| k as f64 * sample_rate / fft_len as f64)
        .collect()
}
