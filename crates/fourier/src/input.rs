//! Parsing of comma-separated command-line values.

use fourier_core::complex::Complex;
use fourier_core::error::FourierError;

/// Parse `"1, 2+i, -3i"` into complex values. An empty string is an empty list.
pub fn parse_complex_list(s: &str) -> Result<Vec<Complex>, FourierError> {
    split_values(s).map(str::parse::<Complex>).collect()
}

/// Parse `"2, 3, 1"` into real coefficients. An empty string is an empty list.
pub fn parse_real_list(s: &str) -> Result<Vec<f64>, FourierError> {
    split_values(s)
        .map(|v| {
            v.parse::<f64>()
                .map_err(|e| FourierError::Parse(format!("invalid number {v:?}: {e}")))
        })
        .collect()
}

fn split_values(s: &str) -> impl Iterator<Item = &str> {
    let trimmed = s.trim();
    // "".split(',') yields one empty item; treat blank input as no values.
    let source = if trimmed.is_empty() { None } else { Some(trimmed) };
    source
        .into_iter()
        .flat_map(|t| t.split(','))
        .map(str::trim)
}
