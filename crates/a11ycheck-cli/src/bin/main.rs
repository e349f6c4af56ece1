//! a11ycheck - accessibility checks for web pages
//!
//! Binary entry point. All command logic lives in the library crate.

use anyhow::Result;

fn main() -> Result<()> {
    a11ycheck_cli::run_cli()
}
