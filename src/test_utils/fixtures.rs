//! Test fixtures for weight tables and templates
//!
//! The `SAMPLE_*` constants form one complete run: feeding [`SAMPLE_INPUT`]
//! through [`SAMPLE_TEMPLATE`] with the default syntax yields
//! [`SAMPLE_OUTPUT`].

use std::fs;
use std::path::{Path, PathBuf};

/// Header plus two records, one token containing a double quote.
pub const SAMPLE_INPUT: &str = "header\n0.5\tfoo\n1\tbar\"baz\n";

/// Minimal template with the default marker between two comment lines.
pub const SAMPLE_TEMPLATE: &str = "# generated\nweights = {}\n# end\n";

/// Expected result of splicing [`SAMPLE_INPUT`] into [`SAMPLE_TEMPLATE`].
pub const SAMPLE_OUTPUT: &str = "# generated\nweights = {\n    \"foo\": 0.5,\n    \"bar\\\"baz\": 1,\n}\n# end\n";

/// A template file written into a directory for a test.
#[derive(Clone, Debug)]
pub struct TemplateFixture {
    pub name: String,
    pub content: String,
}

impl TemplateFixture {
    /// The three-line sample template.
    pub fn sample() -> Self {
        Self {
            name: "binary.py".to_string(),
            content: SAMPLE_TEMPLATE.to_string(),
        }
    }

    /// A template with no marker line.
    pub fn without_marker() -> Self {
        Self {
            name: "plain.py".to_string(),
            content: "# nothing to replace\nx = 1\n".to_string(),
        }
    }

    /// Write the fixture into `dir` and return the file path.
    pub fn write_to(&self, dir: &Path) -> std::io::Result<PathBuf> {
        let path = dir.join(&self.name);
        fs::write(&path, &self.content)?;
        Ok(path)
    }
}
