//! Error type shared by every fourier operation.

/// Error type for complex arithmetic, transforms, and convolution.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FourierError {
    /// Complex division by a value of zero magnitude.
    #[error("division by zero complex number")]
    DivisionByZero,

    /// An argument outside the operation's domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Textual input that could not be parsed as a number.
    #[error("parse error: {0}")]
    Parse(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Products from different multiplication strategies don't match.
    #[error("result mismatch between multiplication strategies")]
    Mismatch,
}
