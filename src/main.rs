//! weightsplice CLI entry point
//!
//! Parses arguments, runs the generator over stdin/stdout and turns any
//! failure into a colored report on stderr with exit status 1.

use anyhow::Result;
use clap::Parser;
use weightsplice::cli;
use weightsplice::core::user_friendly_error;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    match cli.execute() {
        Ok(()) => Ok(()),
        Err(e) => {
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            std::process::exit(1);
        }
    }
}
