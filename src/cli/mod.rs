//! CLI module for the `carprice-predict` and `carprice-inspect` binaries.
//!
//! Argument parsing, logging setup, and the logic behind each command. The
//! binaries themselves only print what these functions return.

/// CLI arguments.
pub mod args;

/// Category listings and schema reports.
pub mod inspect;

/// Subscriber setup.
pub mod logging;

/// Prediction and output formatting.
pub mod predict;
