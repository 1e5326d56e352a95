//! Fourier-rs library: application logic for the `fourier` binary.

pub mod app;
pub mod config;
pub mod errors;
pub mod input;
pub mod logging;
