//! # dist-github-meta CLI
//!
//! This is the binary entry point for the `dist-github-meta` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Building the resources record through the library crate.
//! - Translating errors into a message on stderr and a non-zero exit status.
//!
//! All metadata logic lives in the `lib.rs` library crate; the binary is a
//! thin wrapper around it.

mod cli;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
