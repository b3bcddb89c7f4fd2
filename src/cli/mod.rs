//! Command-line interface for weightsplice.
//!
//! The tool is a one-shot filter: it reads a weight table from standard input
//! and writes the spliced template to standard output.
//!
//! ```bash
//! # Template next to the executable (binary.py), default Python syntax
//! weightsplice < model.tsv > classifier.py
//!
//! # Explicit template and a custom syntax profile
//! weightsplice --template weights.rs.in --syntax rust.toml < model.tsv > weights.rs
//! ```
//!
//! Diagnostics go to stderr only; stdout carries nothing but the generated
//! module.


use anyhow::{Context, Result};
use clap::Parser;
use std::io::{BufRead, BufWriter, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::config::MappingSyntax;
use crate::constants::DEFAULT_TEMPLATE_NAME;
use crate::templating::{SpliceReport, generate};

/// Runtime configuration derived from the global flags.
///
/// Kept separate from [`Cli`] so tests can run the generator without
/// installing a global subscriber.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Default log filter when `RUST_LOG` is unset.
    ///
    /// `None` disables logging entirely (used by `--quiet`).
    pub log_level: Option<String>,
}

impl CliConfig {
    /// Install the stderr tracing subscriber.
    ///
    /// `RUST_LOG` takes precedence over [`log_level`](Self::log_level). Calling
    /// this more than once is harmless.
    pub fn init_logging(&self) {
        let Some(level) = &self.log_level else {
            return;
        };

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }
}

/// Splice a tab-separated weight table into a source template.
#[derive(Parser, Debug)]
#[command(
    name = "weightsplice",
    about = "Embed a weight table in a source template as a mapping literal",
    version,
    long_about = "Reads `<weight>\\t<token>` lines from stdin (the first line is a header \
                  and is skipped), renders them as a mapping literal and writes the template \
                  to stdout with the marker line replaced by that mapping."
)]
pub struct Cli {
    /// Template to splice into.
    ///
    /// Defaults to `binary.py` in the directory of the weightsplice executable.
    #[arg(short, long, value_name = "FILE")]
    template: Option<PathBuf>,

    /// TOML syntax profile overriding `marker`, `open`, `entry` and `close`.
    ///
    /// Without it the mapping is rendered as a Python dict replacing the
    /// line that starts with `weights = {}`.
    #[arg(short, long, value_name = "FILE")]
    syntax: Option<PathBuf>,

    /// Enable debug logging on stderr.
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all logging; errors are still reported.
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    /// Run against the process's stdin and stdout.
    ///
    /// # Errors
    ///
    /// Returns any failure of [`Cli::execute_with_io`].
    pub fn execute(self) -> Result<()> {
        let config = self.build_config();
        config.init_logging();

        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        let report = self.execute_with_io(stdin.lock(), BufWriter::new(stdout.lock()))?;

        tracing::info!(
            "Generated mapping with {} entr(ies), {} marker line(s) replaced",
            report.records,
            report.markers_replaced
        );
        Ok(())
    }

    /// Build a [`CliConfig`] from the parsed flags.
    ///
    /// `--verbose` maps to `debug`, `--quiet` disables logging, and the
    /// default is `warn` so that only missing or repeated markers are reported.
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            Some("debug".to_string())
        } else if self.quiet {
            None
        } else {
            Some("warn".to_string())
        };

        CliConfig {
            log_level,
        }
    }

    /// Run the generator with explicit input and output streams.
    ///
    /// # Errors
    ///
    /// Fails if the syntax profile is invalid, the template cannot be located
    /// or read, the input is malformed, or the output cannot be written.
    pub fn execute_with_io<R: BufRead, W: Write>(self, input: R, output: W) -> Result<SpliceReport> {
        let syntax = match &self.syntax {
            Some(path) => MappingSyntax::load(path)?,
            None => MappingSyntax::default(),
        };
        let template = self.resolve_template()?;
        tracing::debug!("Using template {}", template.display());

        let report = generate(input, &template, &syntax, output)
            .with_context(|| format!("Failed to generate module from {}", template.display()))?;
        Ok(report)
    }

    /// The template given with `--template`, or the default next to the
    /// executable.
    ///
    /// # Errors
    ///
    /// Fails if no template was given and the executable's location cannot be
    /// determined.
    pub fn resolve_template(&self) -> Result<PathBuf> {
        match &self.template {
            Some(path) => Ok(path.clone()),
            None => default_template_path(),
        }
    }
}

/// `binary.py` in the directory of the running executable.
///
/// # Errors
///
/// Fails if the executable path cannot be read or has no parent directory.
pub fn default_template_path() -> Result<PathBuf> {
    let current_exe = std::env::current_exe().context("Failed to get current executable path")?;
    let dir = current_exe
        .parent()
        .with_context(|| format!("Executable path has no parent: {}", current_exe.display()))?;
    Ok(dir.join(DEFAULT_TEMPLATE_NAME))
}
