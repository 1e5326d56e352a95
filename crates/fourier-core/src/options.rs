//! Convolution options and configuration.

use crate::constants::{DEFAULT_PRECISION, MAX_PRECISION};

/// Options for FFT-based polynomial multiplication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvolutionOptions {
    /// Decimal digits kept when rounding product coefficients.
    pub precision: u32,
}

impl Default for ConvolutionOptions {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
        }
    }
}

impl ConvolutionOptions {
    /// Options with an explicit rounding precision.
    #[must_use]
    pub fn with_precision(precision: u32) -> Self {
        Self { precision }.normalize()
    }

    /// Normalize options, clamping the precision to what an `f64` can hold.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.precision > MAX_PRECISION {
            self.precision = MAX_PRECISION;
        }
        self
    }
}
