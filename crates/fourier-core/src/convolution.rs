//! Polynomial multiplication through the convolution theorem.
//!
//! Coefficients are ordered low-to-high: index `i` holds the coefficient of
//! `x^i`. Both operands are zero-padded to a power of two `M >= n`, where
//! `n = |p| + |q| - 1` is the coefficient count of the product. Because
//! `M >= n`, the circular convolution computed in the frequency domain equals
//! the linear one.

use tracing::debug;

use crate::complex::Complex;
use crate::constants::MAX_PRECISION;
use crate::error::FourierError;
use crate::options::ConvolutionOptions;
use crate::transform::{fft, ifft, padded_len};

/// Multiply two polynomials with the FFT, rounding to the default precision.
///
/// # Example
/// ```
/// let product = fourier_core::convolution::multiply(&[2.0, 3.0, 1.0], &[1.0, 2.0, 4.0]).unwrap();
/// assert_eq!(product, vec![2.0, 7.0, 15.0, 14.0, 4.0]);
/// ```
pub fn multiply(p: &[f64], q: &[f64]) -> Result<Vec<f64>, FourierError> {
    multiply_with(p, q, &ConvolutionOptions::default())
}

/// Multiply two polynomials with the FFT using explicit options.
pub fn multiply_with(
    p: &[f64],
    q: &[f64],
    opts: &ConvolutionOptions,
) -> Result<Vec<f64>, FourierError> {
    ensure_non_empty(p, "first")?;
    ensure_non_empty(q, "second")?;

    let n = product_len(p, q);
    let m = padded_len(n);
    debug!(lhs = p.len(), rhs = q.len(), product = n, transform = m, "fft multiply");

    let spectrum_p = fft(&lift_padded(p, m));
    let spectrum_q = fft(&lift_padded(q, m));

    let spectrum: Vec<Complex> = spectrum_p
        .iter()
        .zip(&spectrum_q)
        .map(|(&a, &b)| a * b)
        .collect();

    let precision = opts.precision.min(MAX_PRECISION);
    Ok(ifft(&spectrum)
        .into_iter()
        .take(n)
        .map(|z| round_to(z.re(), precision))
        .collect())
}

/// Direct O(|p|·|q|) convolution.
pub fn schoolbook_multiply(p: &[f64], q: &[f64]) -> Result<Vec<f64>, FourierError> {
    ensure_non_empty(p, "first")?;
    ensure_non_empty(q, "second")?;

    let mut product = vec![0.0; product_len(p, q)];
    for (i, &a) in p.iter().enumerate() {
        for (j, &b) in q.iter().enumerate() {
            product[i + j] += a * b;
        }
    }
    Ok(product)
}

/// Round to `decimals` digits after the decimal point (at most 15).
///
/// Values too large to scale without overflow are returned unchanged.
/// Negative zero is normalized to `0.0`.
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals.min(MAX_PRECISION) as i32);
    let scaled = value * scale;
    if !scaled.is_finite() {
        return value;
    }
    // -0.0 + 0.0 == 0.0
    scaled.round() / scale + 0.0
}

fn product_len(p: &[f64], q: &[f64]) -> usize {
    p.len() + q.len() - 1
}

fn ensure_non_empty(coeffs: &[f64], which: &str) -> Result<(), FourierError> {
    if coeffs.is_empty() {
        return Err(FourierError::InvalidArgument(format!(
            "{which} polynomial has no coefficients"
        )));
    }
    Ok(())
}

fn lift_padded(coeffs: &[f64], len: usize) -> Vec<Complex> {
    let mut lifted: Vec<Complex> = coeffs.iter().copied().map(Complex::from_real).collect();
    lifted.resize(len, Complex::ZERO);
    lifted
}
