#![no_main]

use libfuzzer_sys::fuzz_target;

use fourier_core::complex::Complex;
use fourier_core::transform::{fft, ifft};

fuzz_target!(|data: &[u8]| {
    // Two bytes per complex value, mapped into [-128, 127], capped at 512 values
    let input: Vec<Complex> = data
        .chunks_exact(2)
        .take(512)
        .map(|c| Complex::new(f64::from(c[0] as i8), f64::from(c[1] as i8)))
        .collect();

    let spectrum = fft(&input);
    assert_eq!(spectrum.len(), if input.is_empty() { 0 } else { input.len().next_power_of_two() });

    let recovered = ifft(&spectrum);
    assert_eq!(recovered.len(), spectrum.len());
    for (got, want) in recovered.iter().zip(&input) {
        assert!(got.approx_eq(*want, 1e-6), "{got} != {want}");
    }

    assert_eq!(ifft(&input).len(), input.len());
});
