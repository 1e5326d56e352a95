//! Polynomial multiplication strategies and cross-validation.
//!
//! `PolynomialMultiplier` is the narrow interface consumed by the CLI.
//! `FftMultiplier` is the production path; `SchoolbookMultiplier` is the
//! direct convolution used as a reference when validating FFT products.

use tracing::warn;

use crate::constants::DEFAULT_TOLERANCE;
use crate::convolution::{multiply_with, schoolbook_multiply};
use crate::error::FourierError;
use crate::options::ConvolutionOptions;

/// Narrow interface for polynomial multiplication.
pub trait PolynomialMultiplier: Send + Sync {
    /// Multiply two low-to-high coefficient sequences.
    fn multiply(&self, p: &[f64], q: &[f64]) -> Result<Vec<f64>, FourierError>;

    /// Get the name of this multiplication strategy.
    fn name(&self) -> &str;
}

/// FFT convolution with rounding.
#[derive(Debug, Clone, Default)]
pub struct FftMultiplier {
    options: ConvolutionOptions,
}

impl FftMultiplier {
    #[must_use]
    pub fn new(options: ConvolutionOptions) -> Self {
        Self {
            options: options.normalize(),
        }
    }
}

impl PolynomialMultiplier for FftMultiplier {
    fn multiply(&self, p: &[f64], q: &[f64]) -> Result<Vec<f64>, FourierError> {
        multiply_with(p, q, &self.options)
    }

    fn name(&self) -> &'static str {
        "FFT"
    }
}

/// Direct O(n·m) convolution.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchoolbookMultiplier;

impl SchoolbookMultiplier {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl PolynomialMultiplier for SchoolbookMultiplier {
    fn multiply(&self, p: &[f64], q: &[f64]) -> Result<Vec<f64>, FourierError> {
        schoolbook_multiply(p, q)
    }

    fn name(&self) -> &'static str {
        "Schoolbook"
    }
}

/// Names accepted by [`multiplier_by_name`].
#[must_use]
pub fn available() -> Vec<&'static str> {
    vec!["fft", "schoolbook"]
}

/// Create a multiplier by name.
pub fn multiplier_by_name(
    name: &str,
    options: &ConvolutionOptions,
) -> Result<Box<dyn PolynomialMultiplier>, FourierError> {
    match name.to_ascii_lowercase().as_str() {
        "fft" => Ok(Box::new(FftMultiplier::new(options.clone()))),
        "schoolbook" | "naive" => Ok(Box::new(SchoolbookMultiplier::new())),
        other => Err(FourierError::Config(format!("unknown multiplier: {other}"))),
    }
}

/// Resolve the `--algo` selection: a single name, or `all`.
pub fn multipliers_to_run(
    algo: &str,
    options: &ConvolutionOptions,
) -> Result<Vec<Box<dyn PolynomialMultiplier>>, FourierError> {
    if algo.eq_ignore_ascii_case("all") {
        available()
            .into_iter()
            .map(|name| multiplier_by_name(name, options))
            .collect()
    } else {
        Ok(vec![multiplier_by_name(algo, options)?])
    }
}

/// A product computed by one strategy.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ProductResult {
    pub algorithm: String,
    pub coefficients: Vec<f64>,
}

/// Check that every product agrees with the first one.
///
/// Coefficients are compared with a tolerance relative to their magnitude:
/// `|a - b| <= tolerance * max(1, |a|, |b|)`.
pub fn compare_products(results: &[ProductResult], tolerance: f64) -> Result<(), FourierError> {
    let Some((first, rest)) = results.split_first() else {
        return Err(FourierError::InvalidArgument("no products to compare".into()));
    };

    for other in rest {
        let agrees = first.coefficients.len() == other.coefficients.len()
            && first
                .coefficients
                .iter()
                .zip(&other.coefficients)
                .all(|(&a, &b)| (a - b).abs() <= tolerance * a.abs().max(b.abs()).max(1.0));
        if !agrees {
            warn!(
                first = %first.algorithm,
                other = %other.algorithm,
                "product mismatch"
            );
            return Err(FourierError::Mismatch);
        }
    }
    Ok(())
}

/// [`compare_products`] with the default tolerance.
pub fn compare_products_default(results: &[ProductResult]) -> Result<(), FourierError> {
    compare_products(results, DEFAULT_TOLERANCE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(algorithm: &str, coefficients: &[f64]) -> ProductResult {
        ProductResult {
            algorithm: algorithm.to_string(),
            coefficients: coefficients.to_vec(),
        }
    }

    #[test]
    fn strategy_names() {
        assert_eq!(FftMultiplier::default().name(), "FFT");
        assert_eq!(SchoolbookMultiplier::new().name(), "Schoolbook");
    }

    #[test]
    fn strategies_agree() {
        let p = [2.0, 3.0, 1.0];
        let q = [1.0, 2.0, 4.0];
        let fast = FftMultiplier::default().multiply(&p, &q).unwrap();
        let slow = SchoolbookMultiplier.multiply(&p, &q).unwrap();
        assert_eq!(fast, slow);
    }

    #[test]
    fn factory_known_and_unknown() {
        let opts = ConvolutionOptions::default();
        assert_eq!(multiplier_by_name("fft", &opts).unwrap().name(), "FFT");
        assert_eq!(multiplier_by_name("NAIVE", &opts).unwrap().name(), "Schoolbook");
        assert!(matches!(
            multiplier_by_name("karatsuba", &opts),
            Err(FourierError::Config(_))
        ));
    }

    #[test]
    fn all_selects_every_strategy() {
        let opts = ConvolutionOptions::default();
        let all = multipliers_to_run("all", &opts).unwrap();
        assert_eq!(all.len(), available().len());
        assert_eq!(multipliers_to_run("fft", &opts).unwrap().len(), 1);
    }

    #[test]
    fn compare_detects_mismatch() {
        let results = [product("FFT", &[1.0, 2.0]), product("Schoolbook", &[1.0, 2.5])];
        assert_eq!(
            compare_products_default(&results),
            Err(FourierError::Mismatch)
        );
    }

    #[test]
    fn compare_detects_length_mismatch() {
        let results = [product("FFT", &[1.0, 2.0]), product("Schoolbook", &[1.0])];
        assert_eq!(
            compare_products_default(&results),
            Err(FourierError::Mismatch)
        );
    }

    #[test]
    fn compare_tolerates_relative_noise() {
        let results = [
            product("FFT", &[1e12, 3.0]),
            product("Schoolbook", &[1e12 + 1e-4, 3.0]),
        ];
        assert!(compare_products_default(&results).is_ok());
    }

    #[test]
    fn compare_empty_is_invalid() {
        assert!(matches!(
            compare_products_default(&[]),
            Err(FourierError::InvalidArgument(_))
        ));
    }
}
