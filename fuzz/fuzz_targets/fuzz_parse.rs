#![no_main]

use libfuzzer_sys::fuzz_target;

use fourier_core::complex::Complex;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Should not panic
        let _ = s.parse::<Complex>();
    }
});
