//! Mapping generation and template splicing.
//!
//! This module turns a parsed [`WeightTable`](crate::table::WeightTable) into a mapping literal and
//! splices it into a template at the marker line.
//!
//! # Pipeline
//!
//! ```text
//! input lines -> read_table -> WeightTable -> MappingRenderer -> lines
//!                                                                  |
//! template lines ------------------------------------------> TemplateSplicer -> output
//! ```
//!
//! The whole input is parsed before the template is opened, so a malformed
//! record aborts the run before anything is written.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::io::Cursor;
//! use std::path::Path;
//! use weightsplice::config::MappingSyntax;
//! use weightsplice::templating::generate;
//!
//! # fn example() -> Result<(), weightsplice::core::SpliceError> {
//! let input = Cursor::new("header\n0.5\tfoo\n1\tbar\"baz\n");
//! let mut output = Vec::new();
//! let report = generate(input, Path::new("binary.py"), &MappingSyntax::default(), &mut output)?;
//! assert_eq!(report.records, 2);
//! # Ok(())
//! # }
//! ```

pub mod escape;
pub mod renderer;
pub mod splicer;

pub use escape::escape_token;
pub use renderer::MappingRenderer;
pub use splicer::TemplateSplicer;

use std::io::{BufRead, Write};
use std::path::Path;

use crate::config::MappingSyntax;
use crate::core::SpliceError;
use crate::table::read_table;

/// Summary of one generation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpliceReport {
    /// Records parsed from the input (header excluded)
    pub records: usize,
    /// Template lines replaced by the mapping
    pub markers_replaced: usize,
}

/// Run the full generator: read the table from `input`, then splice it into
/// the template.
///
/// The syntax is validated and the entry template compiled before the input
/// is read.
///
/// # Errors
///
/// - [`SpliceError::SyntaxError`] for an unusable `syntax`
/// - [`SpliceError::FormatError`] for a malformed input line; nothing is written
/// - [`SpliceError::ResourceError`] if the template cannot be read
/// - [`SpliceError::Io`] if reading the input or writing the output fails
pub fn generate<R: BufRead, W: Write>(
    input: R,
    template: &Path,
    syntax: &MappingSyntax,
    mut output: W,
) -> Result<SpliceReport, SpliceError> {
    syntax.validate()?;
    let renderer = MappingRenderer::new(syntax)?;

    let table = read_table(input)?;
    let block = renderer.render(&table)?;

    let splicer = TemplateSplicer::new(syntax.marker.as_str(), block);
    let markers_replaced = splicer.splice_file(template, &mut output)?;
    output.flush()?;

    let report = SpliceReport {
        records: table.len(),
        markers_replaced,
    };

    tracing::debug!(
        "Spliced {} record(s) into {} ({} marker line(s))",
        report.records,
        template.display(),
        report.markers_replaced
    );
    Ok(report)
}
