//! CLI output formatting.

use std::fmt::Display;

use fourier_core::complex::Complex;

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// One JSON document per command.
    Json,
}

/// Format a list as `[a, b, c]`.
#[must_use]
pub fn format_list<T: Display>(items: &[T]) -> String {
    let body: Vec<String> = items.iter().map(ToString::to_string).collect();
    format!("[{}]", body.join(", "))
}

/// Format complex values with a fixed number of decimals.
#[must_use]
pub fn format_complex_list(values: &[Complex], decimals: usize) -> String {
    let body: Vec<String> = values.iter().map(|z| format!("{z:.decimals$}")).collect();
    format!("[{}]", body.join(", "))
}

/// Format real values with a fixed number of decimals.
#[must_use]
pub fn format_real_list(values: &[f64], decimals: usize) -> String {
    let body: Vec<String> = values.iter().map(|x| format!("{x:.decimals$}")).collect();
    format!("[{}]", body.join(", "))
}

/// Render low-to-high coefficients as a polynomial, highest degree first.
///
/// `[4, 14, 15, 7, 2]` renders as `2x^4 + 7x^3 + 15x^2 + 14x + 4`.
#[must_use]
pub fn format_polynomial(coeffs: &[f64]) -> String {
    let mut out = String::new();
    for (degree, &c) in coeffs.iter().enumerate().rev() {
        if c == 0.0 {
            continue;
        }
        if out.is_empty() {
            if c < 0.0 {
                out.push('-');
            }
        } else {
            out.push_str(if c < 0.0 { " - " } else { " + " });
        }

        let magnitude = c.abs();
        if magnitude != 1.0 || degree == 0 {
            out.push_str(&magnitude.to_string());
        }
        match degree {
            0 => {}
            1 => out.push('x'),
            _ => out.push_str(&format!("x^{degree}")),
        }
    }

    if out.is_empty() {
        "0".to_string()
    } else {
        out
    }
}
