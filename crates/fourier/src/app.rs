//! Application entry point and dispatch.

use std::io::{self, Write};

use anyhow::{Context, Result};

use fourier_cli::completion::generate_completion;
use fourier_cli::Presenter;
use fourier_core::complex::Complex;
use fourier_core::constants::MAX_SIGNAL_SAMPLES;
use fourier_core::convolution::multiply;
use fourier_core::error::FourierError;
use fourier_core::options::ConvolutionOptions;
use fourier_core::spectrum::{magnitude_spectrum, sample_signal, SignalComponent};
use fourier_core::strategy::{compare_products_default, multipliers_to_run, ProductResult};
use fourier_core::transform::{fft, ifft};

use crate::config::{AppConfig, Command};
use crate::input::{parse_complex_list, parse_real_list};

/// Run the application, writing results to stdout.
pub fn run(config: &AppConfig) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with(config, &mut out)
}

/// Run the application against an arbitrary writer.
pub fn run_with(config: &AppConfig, out: &mut dyn Write) -> Result<()> {
    let presenter = Presenter::new(config.format, config.quiet, config.decimals);

    match &config.command {
        Command::Fft { values } => {
            let input = parse_complex_list(values).context("parsing transform input")?;
            let output = fft(&input);
            presenter.present_transform(out, "FFT", &input, &output)?;
        }
        Command::Ifft { values } => {
            let input = parse_complex_list(values).context("parsing transform input")?;
            let output = ifft(&input);
            presenter.present_transform(out, "IFFT", &input, &output)?;
        }
        Command::Multiply {
            first,
            second,
            algo,
            precision,
        } => run_multiply(&presenter, out, first, second, algo, *precision)?,
        Command::Spectrum {
            samples,
            components,
        } => run_spectrum(&presenter, out, *samples, components)?,
        Command::Demo => run_demo(&presenter, out)?,
        Command::Completion { shell } => {
            let mut cmd = <AppConfig as clap::CommandFactory>::command();
            generate_completion(&mut cmd, *shell, out);
        }
    }

    Ok(())
}

fn run_multiply(
    presenter: &Presenter,
    out: &mut dyn Write,
    first: &str,
    second: &str,
    algo: &str,
    precision: u32,
) -> Result<()> {
    let p = parse_real_list(first).context("parsing first polynomial")?;
    let q = parse_real_list(second).context("parsing second polynomial")?;

    let opts = ConvolutionOptions::with_precision(precision);
    let multipliers = multipliers_to_run(algo, &opts)?;

    let results = multipliers
        .iter()
        .map(|m| {
            tracing::debug!(algorithm = m.name(), "multiplying polynomials");
            Ok(ProductResult {
                algorithm: m.name().to_string(),
                coefficients: m.multiply(&p, &q)?,
            })
        })
        .collect::<Result<Vec<_>, FourierError>>()?;

    presenter.present_products(out, &p, &q, &results)?;

    if results.len() > 1 {
        compare_products_default(&results).context("cross-validating products")?;
    }
    Ok(())
}

fn run_spectrum(
    presenter: &Presenter,
    out: &mut dyn Write,
    samples: usize,
    components: &[String],
) -> Result<()> {
    if samples == 0 {
        return Err(FourierError::InvalidArgument("sample count must be positive".into()).into());
    }
    if samples > MAX_SIGNAL_SAMPLES {
        return Err(FourierError::InvalidArgument(format!(
            "sample count {samples} exceeds the maximum of {MAX_SIGNAL_SAMPLES}"
        ))
        .into());
    }
    let components = components
        .iter()
        .map(|c| c.parse::<SignalComponent>())
        .collect::<Result<Vec<_>, _>>()?;

    let signal = sample_signal(samples, &components);
    let magnitudes = magnitude_spectrum(&signal);
    presenter.present_spectrum(out, &signal, &magnitudes)?;
    Ok(())
}

/// The three walkthroughs: a small transform and its inverse, a polynomial
/// product, and the spectrum of a two-tone signal.
fn run_demo(presenter: &Presenter, out: &mut dyn Write) -> Result<()> {
    let input: Vec<Complex> = [1.0, 2.0, 3.0, 4.0].map(Complex::from_real).to_vec();
    let spectrum = fft(&input);
    presenter.present_transform(out, "FFT", &input, &spectrum)?;
    let recovered = ifft(&spectrum);
    presenter.present_transform(out, "IFFT", &spectrum, &recovered)?;

    let p = [2.0, 3.0, 1.0];
    let q = [1.0, 2.0, 4.0];
    let product = ProductResult {
        algorithm: "FFT".to_string(),
        coefficients: multiply(&p, &q)?,
    };
    presenter.present_products(out, &p, &q, &[product])?;

    let components = [SignalComponent::new(1.0, 1.0), SignalComponent::new(3.0, 0.5)];
    let signal = sample_signal(8, &components);
    presenter.present_spectrum(out, &signal, &magnitude_spectrum(&signal))?;
    Ok(())
}
