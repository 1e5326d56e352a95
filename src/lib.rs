//! Workspace-level integration tests for fourier-rs.
//!
//! The tests live in `tests/`; golden data lives in `tests/testdata/`.
