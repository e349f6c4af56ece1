//! a11ycheck-cli - command-line interface library
//!
//! Command logic lives here so it can be driven from tests as well as from
//! the `a11ycheck` binary.

pub mod app;

pub use app::{lint_command, plan_command, run_cli, standards_command, OutputFormat};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
