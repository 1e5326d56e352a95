//! Immutable complex value used by the transforms.
//!
//! `Complex` is a plain `Copy` pair of `f64` components. Fields are private
//! and no method mutates in place: every operation returns a new value.
//! Addition, subtraction, multiplication and negation are exposed through the
//! `std::ops` operators; division is fallible and lives in [`Complex::try_div`].

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

use crate::error::FourierError;

/// A complex number `re + im·i` in double precision.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Complex {
    re: f64,
    im: f64,
}

impl Complex {
    /// The additive identity `0 + 0i`.
    pub const ZERO: Self = Self::new(0.0, 0.0);
    /// The multiplicative identity `1 + 0i`.
    pub const ONE: Self = Self::new(1.0, 0.0);
    /// The imaginary unit `0 + 1i`.
    pub const I: Self = Self::new(0.0, 1.0);

    /// Create a complex value from its components.
    #[must_use]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Lift a real number to a complex value with zero imaginary part.
    #[must_use]
    pub const fn from_real(re: f64) -> Self {
        Self { re, im: 0.0 }
    }

    /// Real component.
    #[must_use]
    pub const fn re(self) -> f64 {
        self.re
    }

    /// Imaginary component.
    #[must_use]
    pub const fn im(self) -> f64 {
        self.im
    }

    /// Complex conjugate (imaginary part negated).
    #[must_use]
    pub fn conjugate(self) -> Self {
        Self::new(self.re, -self.im)
    }

    /// Squared magnitude `re² + im²`.
    #[must_use]
    pub fn norm_sqr(self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// Magnitude (absolute value) `sqrt(re² + im²)`.
    #[must_use]
    pub fn magnitude(self) -> f64 {
        self.norm_sqr().sqrt()
    }

    /// Phase (argument) in radians, in `(-π, π]`.
    #[must_use]
    pub fn phase(self) -> f64 {
        self.im.atan2(self.re)
    }

    /// Polar form `(magnitude, phase)`.
    #[must_use]
    pub fn to_polar(self) -> (f64, f64) {
        (self.magnitude(), self.phase())
    }

    /// Build a complex value from polar coordinates.
    #[must_use]
    pub fn from_polar(magnitude: f64, phase: f64) -> Self {
        Self::new(magnitude * phase.cos(), magnitude * phase.sin())
    }

    /// `e^{iθ} = cos θ + i·sin θ`.
    #[must_use]
    pub fn cis(theta: f64) -> Self {
        Self::new(theta.cos(), theta.sin())
    }

    /// Euler's formula for a purely imaginary exponent.
    ///
    /// `exponent` must be `0 + θi`; the result is `(cos θ, sin θ)`.
    /// General complex exponentiation is not supported, so any non-zero
    /// real component is rejected.
    pub fn unit_exponential(exponent: Self) -> Result<Self, FourierError> {
        if exponent.re != 0.0 {
            return Err(FourierError::InvalidArgument(format!(
                "unit exponential requires a purely imaginary exponent, got real part {}",
                exponent.re
            )));
        }
        Ok(Self::cis(exponent.im))
    }

    /// Multiply both components by a real scalar.
    #[must_use]
    pub fn scale(self, factor: f64) -> Self {
        Self::new(self.re * factor, self.im * factor)
    }

    /// Divide by another complex value.
    ///
    /// `(a + bi) / (c + di) = ((ac + bd) + (bc - ad)i) / (c² + d²)`
    pub fn try_div(self, rhs: Self) -> Result<Self, FourierError> {
        let denominator = rhs.norm_sqr();
        if denominator == 0.0 {
            return Err(FourierError::DivisionByZero);
        }
        Ok(Self::new(
            (self.re * rhs.re + self.im * rhs.im) / denominator,
            (self.im * rhs.re - self.re * rhs.im) / denominator,
        ))
    }

    /// Divide both components by a real scalar.
    pub fn try_div_scalar(self, divisor: f64) -> Result<Self, FourierError> {
        if divisor == 0.0 {
            return Err(FourierError::DivisionByZero);
        }
        Ok(Self::new(self.re / divisor, self.im / divisor))
    }

    /// Component-wise comparison within an absolute tolerance.
    #[must_use]
    pub fn approx_eq(self, other: Self, tolerance: f64) -> bool {
        (self.re - other.re).abs() <= tolerance && (self.im - other.im).abs() <= tolerance
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl Sub for Complex {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl Mul for Complex {
    type Output = Self;

    // (a + bi)(c + di) = (ac - bd) + (ad + bc)i
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

impl Mul<f64> for Complex {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        self.scale(rhs)
    }
}

impl Neg for Complex {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.re, -self.im)
    }
}

impl Sum for Complex {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Complex> for Complex {
    fn sum<I: Iterator<Item = &'a Complex>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Zero for Complex {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        self.re == 0.0 && self.im == 0.0
    }
}

impl One for Complex {
    fn one() -> Self {
        Self::ONE
    }
}

impl From<f64> for Complex {
    fn from(re: f64) -> Self {
        Self::from_real(re)
    }
}

impl From<(f64, f64)> for Complex {
    fn from((re, im): (f64, f64)) -> Self {
        Self::new(re, im)
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.im < 0.0 { '-' } else { '+' };
        let im = self.im.abs();
        match f.precision() {
            Some(p) => write!(f, "{:.*} {sign} {:.*}i", p, self.re, p, im),
            None => write!(f, "{} {sign} {}i", self.re, im),
        }
    }
}

impl FromStr for Complex {
    type Err = FourierError;

    /// Parse `"3"`, `"-2i"`, `"1.5-0.5i"`, `"i"` or `"3+4j"`.
    /// Whitespace anywhere in the input is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        if compact.is_empty() {
            return Err(FourierError::Parse("empty complex value".into()));
        }

        let Some(body) = compact
            .strip_suffix('i')
            .or_else(|| compact.strip_suffix('j'))
        else {
            return parse_real(&compact).map(Self::from_real);
        };

        // Split before the last sign that is not part of an exponent.
        let bytes = body.as_bytes();
        let split = (1..bytes.len())
            .rev()
            .find(|&i| matches!(bytes[i], b'+' | b'-') && !matches!(bytes[i - 1], b'e' | b'E'));

        let (re, im) = match split {
            Some(idx) => (parse_real(&body[..idx])?, parse_imaginary(&body[idx..])?),
            None => (0.0, parse_imaginary(body)?),
        };
        Ok(Self::new(re, im))
    }
}

fn parse_real(s: &str) -> Result<f64, FourierError> {
    s.parse::<f64>()
        .map_err(|e| FourierError::Parse(format!("invalid number {s:?}: {e}")))
}

// A bare sign means a unit coefficient: "i", "+i", "-i".
fn parse_imaginary(s: &str) -> Result<f64, FourierError> {
    match s {
        "" | "+" => Ok(1.0),
        "-" => Ok(-1.0),
        _ => parse_real(s),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const EPS: f64 = 1e-12;

    #[test]
    fn add_sub_component_wise() {
        let a = Complex::new(3.0, 4.0);
        let b = Complex::new(1.0, -2.0);
        assert_eq!(a + b, Complex::new(4.0, 2.0));
        assert_eq!(a - b, Complex::new(2.0, 6.0));
    }

    #[test]
    fn multiply_formula() {
        // (3 + 4i)(1 - 2i) = 3 - 6i + 4i + 8 = 11 - 2i
        let a = Complex::new(3.0, 4.0);
        let b = Complex::new(1.0, -2.0);
        assert_eq!(a * b, Complex::new(11.0, -2.0));
        assert_eq!(Complex::I * Complex::I, Complex::new(-1.0, 0.0));
    }

    #[test]
    fn divide_formula() {
        // (3 + 4i) / (1 - 2i) = (-5 + 10i) / 5 = -1 + 2i
        let q = Complex::new(3.0, 4.0)
            .try_div(Complex::new(1.0, -2.0))
            .unwrap();
        assert!(q.approx_eq(Complex::new(-1.0, 2.0), EPS));
    }

    #[test]
    fn divide_by_zero() {
        let err = Complex::new(1.0, 1.0).try_div(Complex::ZERO).unwrap_err();
        assert_eq!(err, FourierError::DivisionByZero);
        assert_eq!(
            Complex::ONE.try_div_scalar(0.0),
            Err(FourierError::DivisionByZero)
        );
    }

    #[test]
    fn divide_then_multiply_roundtrip() {
        let a = Complex::new(-2.5, 7.0);
        let b = Complex::new(0.3, -1.1);
        let q = a.try_div(b).unwrap();
        assert!((q * b).approx_eq(a, EPS));
    }

    #[test]
    fn conjugate_and_magnitude() {
        let z = Complex::new(3.0, 4.0);
        assert_eq!(z.conjugate(), Complex::new(3.0, -4.0));
        assert!((z.magnitude() - 5.0).abs() < EPS);
        assert!(((z * z.conjugate()).re() - 25.0).abs() < EPS);
    }

    #[test]
    fn unit_exponential_euler() {
        let w = Complex::unit_exponential(Complex::new(0.0, PI / 2.0)).unwrap();
        assert!(w.approx_eq(Complex::I, EPS));
        let w = Complex::unit_exponential(Complex::new(0.0, PI)).unwrap();
        assert!(w.approx_eq(Complex::new(-1.0, 0.0), EPS));
        assert!((w.magnitude() - 1.0).abs() < EPS);
    }

    #[test]
    fn unit_exponential_rejects_real_part() {
        let err = Complex::unit_exponential(Complex::new(0.5, 1.0)).unwrap_err();
        assert!(matches!(err, FourierError::InvalidArgument(_)));
    }

    #[test]
    fn polar_roundtrip() {
        let z = Complex::new(3.0, 4.0);
        let (r, theta) = z.to_polar();
        assert!(Complex::from_polar(r, theta).approx_eq(z, EPS));
        assert!((Complex::new(-1.0, 0.0).phase() - PI).abs() < EPS);
    }

    #[test]
    fn zero_and_one() {
        assert!(Complex::zero().is_zero());
        assert!(Complex::one().is_one());
        let z = Complex::new(2.0, -3.0);
        assert_eq!(z + Complex::zero(), z);
        assert_eq!(z * Complex::one(), z);
    }

    #[test]
    fn sum_of_values() {
        let values = [Complex::new(1.0, 1.0), Complex::new(2.0, -3.0), Complex::I];
        let total: Complex = values.iter().sum();
        assert_eq!(total, Complex::new(3.0, -1.0));
    }

    #[test]
    fn display_signs() {
        assert_eq!(Complex::new(3.0, 4.0).to_string(), "3 + 4i");
        assert_eq!(Complex::new(1.0, -2.0).to_string(), "1 - 2i");
        assert_eq!(format!("{:.2}", Complex::new(0.5, -0.25)), "0.50 - 0.25i");
    }

    #[test]
    fn parse_forms() {
        assert_eq!("3".parse::<Complex>().unwrap(), Complex::new(3.0, 0.0));
        assert_eq!("-2i".parse::<Complex>().unwrap(), Complex::new(0.0, -2.0));
        assert_eq!("1.5-0.5i".parse::<Complex>().unwrap(), Complex::new(1.5, -0.5));
        assert_eq!("3 + 4j".parse::<Complex>().unwrap(), Complex::new(3.0, 4.0));
        assert_eq!("i".parse::<Complex>().unwrap(), Complex::I);
        assert_eq!("2-i".parse::<Complex>().unwrap(), Complex::new(2.0, -1.0));
        assert_eq!("1e-3+2i".parse::<Complex>().unwrap(), Complex::new(1e-3, 2.0));
        assert_eq!("1e+2i".parse::<Complex>().unwrap(), Complex::new(0.0, 100.0));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!("".parse::<Complex>(), Err(FourierError::Parse(_))));
        assert!(matches!("abc".parse::<Complex>(), Err(FourierError::Parse(_))));
        assert!(matches!("1+xi".parse::<Complex>(), Err(FourierError::Parse(_))));
    }

    #[test]
    fn serde_shape() {
        let json = serde_json::to_string(&Complex::new(1.0, -2.0)).unwrap();
        assert_eq!(json, r#"{"re":1.0,"im":-2.0}"#);
        let back: Complex = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Complex::new(1.0, -2.0));
    }
}
