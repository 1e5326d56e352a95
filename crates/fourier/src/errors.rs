//! Error handling and exit codes.

use fourier_core::constants::exit_codes;
use fourier_core::error::FourierError;

/// Map a library error to the appropriate exit code.
pub fn handle_error(err: &FourierError) -> i32 {
    match err {
        FourierError::DivisionByZero => exit_codes::ERROR_GENERIC,
        FourierError::InvalidArgument(_) | FourierError::Parse(_) => exit_codes::ERROR_INPUT,
        FourierError::Config(_) => exit_codes::ERROR_CONFIG,
        FourierError::Mismatch => exit_codes::ERROR_MISMATCH,
    }
}

/// Exit code for any application error.
///
/// Errors that wrap a `FourierError` (possibly under added context) map
/// through [`handle_error`]; everything else, such as I/O failures, is generic.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<FourierError>()
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}
