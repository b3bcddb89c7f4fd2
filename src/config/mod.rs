//! Mapping syntax configuration
//!
//! A [`MappingSyntax`] decides what the generated mapping looks like and which
//! template line it replaces. The built-in default produces a Python dict:
//!
//! ```text
//! weights = {
//!     "foo": 0.5,
//!     "bar\"baz": 1,
//! }
//! ```
//!
//! # Syntax Profiles
//!
//! Other target languages are supported through a TOML profile passed with
//! `--syntax`. Every key is optional and falls back to the default; unknown
//! keys are rejected.
//!
//! ```toml
//! marker = "static WEIGHTS"
//! open = "static WEIGHTS: &[(&str, f64)] = &["
//! entry = "    (\"{{ key }}\", {{ value }}),"
//! close = "];"
//! ```
//!
//! `entry` is a Tera template that receives `key` (the escaped token) and
//! `value` (the raw weight literal). Autoescaping is off.

mod parser;

pub use parser::parse_config;

use serde::Deserialize;
use std::path::Path;

use crate::constants::{DEFAULT_CLOSE, DEFAULT_ENTRY, DEFAULT_MARKER, DEFAULT_OPEN};
use crate::core::SpliceError;

/// Marker sentinel plus the opening, per-entry and closing forms of the mapping.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MappingSyntax {
    /// Prefix identifying the template line to replace
    pub marker: String,
    /// Line emitted before the entries
    pub open: String,
    /// Tera template for one entry, with `key` and `value` in scope
    pub entry: String,
    /// Line emitted after the entries
    pub close: String,
}

impl Default for MappingSyntax {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
            open: DEFAULT_OPEN.to_string(),
            entry: DEFAULT_ENTRY.to_string(),
            close: DEFAULT_CLOSE.to_string(),
        }
    }
}

impl MappingSyntax {
    /// Load and validate a syntax profile.
    ///
    /// # Errors
    ///
    /// - [`SpliceError::ConfigError`] if the file is unreadable or not a valid profile
    /// - [`SpliceError::SyntaxError`] if the profile fails [`validate`](Self::validate)
    pub fn load(path: &Path) -> Result<Self, SpliceError> {
        let syntax: Self = parse_config(path)?;
        syntax.validate()?;
        tracing::debug!("Loaded syntax profile from {}", path.display());
        Ok(syntax)
    }

    /// Reject syntaxes the splicer cannot use.
    ///
    /// An empty marker would match every template line.
    ///
    /// # Errors
    ///
    /// Returns [`SpliceError::SyntaxError`] for an empty marker.
    pub fn validate(&self) -> Result<(), SpliceError> {
        if self.marker.is_empty() {
            return Err(SpliceError::SyntaxError {
                reason: "marker must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
