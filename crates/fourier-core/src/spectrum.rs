//! Frequency analysis of real signals.

use std::f64::consts::PI;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FourierError;
use crate::transform::fft_real;

/// One sine component `amplitude · sin(2π · frequency · t)` of a test signal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignalComponent {
    /// Cycles per unit interval.
    pub frequency: f64,
    pub amplitude: f64,
}

impl SignalComponent {
    #[must_use]
    pub fn new(frequency: f64, amplitude: f64) -> Self {
        Self {
            frequency,
            amplitude,
        }
    }
}

impl FromStr for SignalComponent {
    type Err = FourierError;

    /// Parse `"frequency:amplitude"`; a bare `"frequency"` has amplitude 1.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse = |v: &str| {
            v.trim()
                .parse::<f64>()
                .map_err(|e| FourierError::Parse(format!("invalid signal component {s:?}: {e}")))
        };
        match s.split_once(':') {
            Some((freq, amp)) => Ok(Self::new(parse(freq)?, parse(amp)?)),
            None => Ok(Self::new(parse(s)?, 1.0)),
        }
    }
}

/// Sample a sum of sines at `samples` uniform points `t = i / samples`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn sample_signal(samples: usize, components: &[SignalComponent]) -> Vec<f64> {
    (0..samples)
        .map(|i| {
            let t = i as f64 / samples as f64;
            components
                .iter()
                .map(|c| c.amplitude * (2.0 * PI * c.frequency * t).sin())
                .sum::<f64>()
        })
        .collect()
}

/// Magnitude of every frequency bin of a real signal.
///
/// The signal is padded to a power of two, so the result may have more bins
/// than the signal has samples.
#[must_use]
pub fn magnitude_spectrum(signal: &[f64]) -> Vec<f64> {
    fft_real(signal).into_iter().map(|z| z.magnitude()).collect()
}
