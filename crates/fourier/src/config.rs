//! Application configuration from CLI flags and environment.

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use fourier_cli::OutputFormat;
use fourier_core::constants::DEFAULT_PRECISION;

/// Fourier-rs: recursive radix-2 FFT and FFT-based polynomial multiplication.
#[derive(Parser, Debug)]
#[command(name = "fourier", version, about)]
pub struct AppConfig {
    #[command(subcommand)]
    pub command: Command,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, env = "FOURIER_FORMAT", global = true)]
    pub format: OutputFormat,

    /// Quiet mode (only output the values).
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose output (debug logging on stderr).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Decimal places used when printing transform and spectrum values.
    #[arg(long, default_value = "5", global = true)]
    pub decimals: usize,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Forward FFT of comma-separated complex values (e.g. "1,2+i,-3i").
    Fft {
        #[arg(allow_hyphen_values = true)]
        values: String,
    },

    /// Inverse FFT of comma-separated complex values.
    Ifft {
        #[arg(allow_hyphen_values = true)]
        values: String,
    },

    /// Multiply two polynomials given as comma-separated coefficients, lowest degree first.
    Multiply {
        #[arg(allow_hyphen_values = true)]
        first: String,

        #[arg(allow_hyphen_values = true)]
        second: String,

        /// Multiplication strategy: fft, schoolbook, or all.
        #[arg(long, default_value = "fft")]
        algo: String,

        /// Decimal digits kept when rounding FFT products.
        #[arg(long, default_value_t = DEFAULT_PRECISION, env = "FOURIER_PRECISION")]
        precision: u32,
    },

    /// Magnitude spectrum of a sampled sum of sines.
    Spectrum {
        /// Number of samples over the unit interval.
        #[arg(long, default_value = "8")]
        samples: usize,

        /// Sine component as FREQ[:AMP]; may be repeated.
        #[arg(long = "component", value_name = "FREQ[:AMP]", default_values = ["1:1", "3:0.5"])]
        components: Vec<String>,
    },

    /// Run the built-in demonstrations.
    Demo,

    /// Generate shell completion.
    Completion {
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
