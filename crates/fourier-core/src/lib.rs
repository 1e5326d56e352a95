//! # fourier-core
//!
//! Complex arithmetic, a recursive radix-2 Cooley-Tukey FFT with
//! power-of-two padding, its inverse, and polynomial multiplication
//! through the convolution theorem.
//!
//! Every operation is a pure function over immutable inputs.

pub mod complex;
pub mod constants;
pub mod convolution;
pub mod error;
pub mod options;
pub mod spectrum;
pub mod strategy;
pub mod transform;

// Re-exports
pub use complex::Complex;
pub use constants::{
    exit_codes, DEFAULT_PRECISION, DEFAULT_TOLERANCE, MAX_PRECISION, MAX_SIGNAL_SAMPLES,
};
pub use convolution::{multiply, multiply_with, schoolbook_multiply};
pub use error::FourierError;
pub use options::ConvolutionOptions;
pub use spectrum::{magnitude_spectrum, sample_signal, SignalComponent};
pub use strategy::{FftMultiplier, PolynomialMultiplier, SchoolbookMultiplier};
pub use transform::{fft, fft_real, ifft, padded_len};
