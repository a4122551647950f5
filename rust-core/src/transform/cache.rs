//! Single-entry coefficient cache
//!
//! Each transform kind keeps exactly one table, valid for exactly one size.
//! Requesting a different size discards the old table and synthesizes a new one.

use log::debug;
use num_complex::Complex64;
use std::fmt;

use crate::error::Result;

/// Transform kinds that own a coefficient table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformKind {
    Dft,
    Idft,
    Fft,
    Ifft,
    RealFft,
}

impl fmt::Display for TransformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TransformKind::Dft => "dft",
            TransformKind::Idft => "idft",
            TransformKind::Fft => "fft",
            TransformKind::Ifft => "ifft",
            TransformKind::RealFft => "rfft",
        };
        f.write_str(name)
    }
}

/// Coefficient table tagged with the size it was built for
#[derive(Debug, Default)]
pub(crate) enum CoefficientCache {
    #[default]
    Empty,
    ValidFor {
        size: usize,
        table: Vec<Complex64>,
    },
}

impl CoefficientCache {
    /// Size the current table was built for, if any
    pub fn size(&self) -> Option<usize> {
        match self {
            CoefficientCache::Empty => None,
            CoefficientCache::ValidFor { size, .. } => Some(*size),
        }
    }

    /// Return the table for `size`, rebuilding it first if the cached one is for another size
    ///
    /// On a failed build the cache is left `Empty`.
    pub fn get_or_build<F>(&mut self, kind: TransformKind, size: usize, build: F) -> Result<&[Complex64]>
    where
        F: FnOnce(usize) -> Result<Vec<Complex64>>,
    {
        if self.size() != Some(size) {
            debug!("{kind}: rebuilding coefficients for size {size} (previous: {:?})", self.size());
            *self = CoefficientCache::Empty;
            let table = build(size)?;
            *self = CoefficientCache::ValidFor { size, table };
        }
        Ok(self.table())
    }

    fn table(&self) -> &[Complex64] {
        match self {
            CoefficientCache::Empty => &[],
            CoefficientCache::ValidFor { table, .. } => table,
        }
    }
}
