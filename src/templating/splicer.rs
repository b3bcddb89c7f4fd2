//! Line-based template splicing.
//!
//! The splicer streams a template line by line. A line that starts with the
//! marker is replaced by the rendered mapping block; every other line is
//! written byte-for-byte, terminator included. Matching is a plain prefix
//! test, so every marker-prefixed line is replaced, and a template with no
//! marker passes through unchanged.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use crate::core::SpliceError;

/// Replaces marker lines of a template with a pre-rendered block.
#[derive(Debug, Clone)]
pub struct TemplateSplicer {
    marker: String,
    block: Vec<String>,
}

impl TemplateSplicer {
    /// Create a splicer for `marker` that emits `block`, one `\n`-terminated
    /// line per element, in place of each marker line.
    pub fn new(marker: impl Into<String>, block: Vec<String>) -> Self {
        Self {
            marker: marker.into(),
            block,
        }
    }

    /// Open the template at `path` and splice it into `output`.
    ///
    /// The file handle lives only for the duration of this call and is closed
    /// on every return path.
    ///
    /// # Errors
    ///
    /// - [`SpliceError::ResourceError`] if the template cannot be opened or read
    /// - [`SpliceError::Io`] if writing to `output` fails
    pub fn splice_file<W: Write>(&self, path: &Path, output: &mut W) -> Result<usize, SpliceError> {
        let file = File::open(path).map_err(|e| SpliceError::ResourceError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        tracing::debug!("Opened template {}", path.display());

        self.splice(BufReader::new(file), output, &path.display().to_string())
    }

    /// Splice `template` into `output` and return the number of marker lines
    /// replaced.
    ///
    /// `source` names the template in errors and log messages.
    ///
    /// # Errors
    ///
    /// - [`SpliceError::ResourceError`] if reading `template` fails or it is not UTF-8
    /// - [`SpliceError::Io`] if writing to `output` fails
    pub fn splice<R: BufRead, W: Write>(
        &self,
        mut template: R,
        output: &mut W,
        source: &str,
    ) -> Result<usize, SpliceError> {
        let mut line = String::new();
        let mut markers = 0;

        loop {
            line.clear();
            let read = template.read_line(&mut line).map_err(|e| SpliceError::ResourceError {
                path: source.to_string(),
                reason: e.to_string(),
            })?;
            if read == 0 {
                break;
            }

            if line.starts_with(&self.marker) {
                markers += 1;
                if markers > 1 {
                    tracing::warn!(
                        "Marker {:?} found again in {} (occurrence {}), replacing it too",
                        self.marker,
                        source,
                        markers
                    );
                }
                self.write_block(output)?;
            } else {
                output.write_all(line.as_bytes())?;
            }
        }

        if markers == 0 {
            tracing::warn!(
                "No line starting with {:?} in {}; template copied without the mapping",
                self.marker,
                source
            );
        }

        Ok(markers)
    }

    fn write_block<W: Write>(&self, output: &mut W) -> Result<(), SpliceError> {
        for line in &self.block {
            output.write_all(line.as_bytes())?;
            output.write_all(b"\n")?;
        }
        Ok(())
    }
}
