//! Constants for convolution rounding, tolerances, and exit codes.

/// Default number of decimal digits kept when rounding convolution output.
pub const DEFAULT_PRECISION: u32 = 10;

/// Largest supported rounding precision.
///
/// An `f64` carries about 15-16 significant decimal digits; rounding beyond
/// that only reintroduces noise.
pub const MAX_PRECISION: u32 = 15;

/// Absolute tolerance used when comparing floating-point results.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Largest signal the spectrum command will sample.
pub const MAX_SIGNAL_SAMPLES: usize = 1 << 20;

/// Exit codes for the command-line binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Invalid input values (unparseable numbers, empty polynomials).
    pub const ERROR_INPUT: i32 = 2;
    /// Multiplication strategies disagreed during cross-validation.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}
