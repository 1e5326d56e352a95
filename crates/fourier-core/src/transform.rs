//! Forward and inverse discrete Fourier transforms.
//!
//! The forward transform is a recursive radix-2 decimation-in-time
//! Cooley-Tukey FFT. Inputs whose length is not a power of two are padded
//! with `0 + 0i` up to the next power of two, so the output may be longer
//! than the input. Callers that care about the original length must track it.
//!
//! The inverse transform reuses the forward one through the conjugation
//! identity `ifft(X) = conj(fft(conj(X))) / N`.

use std::f64::consts::PI;

use tracing::{debug, trace};

use crate::complex::Complex;

/// Length of the transform of a sequence of `len` values.
///
/// The next power of two `>= len`; an empty sequence stays empty.
#[must_use]
pub fn padded_len(len: usize) -> usize {
    if len == 0 {
        0
    } else {
        len.next_power_of_two()
    }
}

/// Forward FFT of a complex sequence.
///
/// Returns `padded_len(input.len())` frequency bins.
#[must_use]
pub fn fft(input: &[Complex]) -> Vec<Complex> {
    let n = padded_len(input.len());
    debug!(len = input.len(), padded = n, "forward transform");

    if n == input.len() {
        return fft_recursive(input);
    }

    trace!(zeros = n - input.len(), "padding to power of two");
    let mut padded = Vec::with_capacity(n);
    padded.extend_from_slice(input);
    padded.resize(n, Complex::ZERO);
    fft_recursive(&padded)
}

/// Forward FFT of a real-valued signal.
#[must_use]
pub fn fft_real(signal: &[f64]) -> Vec<Complex> {
    let lifted: Vec<Complex> = signal.iter().copied().map(Complex::from_real).collect();
    fft(&lifted)
}

/// Inverse FFT.
///
/// Conjugates the input, runs the forward transform, conjugates the result
/// and divides by `N = spectrum.len()`. The output has the same length as
/// the input. A non-power-of-two input is padded by the forward transform;
/// only the first `N` values are kept, so the round trip is exact only for
/// power-of-two lengths.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn ifft(spectrum: &[Complex]) -> Vec<Complex> {
    let len = spectrum.len();
    debug!(len, "inverse transform");

    let conjugated: Vec<Complex> = spectrum.iter().map(|z| z.conjugate()).collect();
    let transformed = fft(&conjugated);

    let n = len as f64;
    transformed
        .into_iter()
        .take(len)
        .map(|z| {
            let z = z.conjugate();
            Complex::new(z.re() / n, z.im() / n)
        })
        .collect()
}

/// Recursive radix-2 step. `x.len()` must be zero or a power of two.
fn fft_recursive(x: &[Complex]) -> Vec<Complex> {
    let n = x.len();
    if n <= 1 {
        return x.to_vec();
    }

    let even: Vec<Complex> = x.iter().step_by(2).copied().collect();
    let odd: Vec<Complex> = x.iter().skip(1).step_by(2).copied().collect();
    let fft_even = fft_recursive(&even);
    let fft_odd = fft_recursive(&odd);

    let half = n / 2;
    let mut result = vec![Complex::ZERO; n];
    for k in 0..half {
        let t = twiddle(k, n) * fft_odd[k];
        result[k] = fft_even[k] + t;
        result[k + half] = fft_even[k] - t;
    }
    result
}

/// `e^{-2πik/n}`.
#[allow(clippy::cast_precision_loss)]
fn twiddle(k: usize, n: usize) -> Complex {
    Complex::cis(-2.0 * PI * k as f64 / n as f64)
}
