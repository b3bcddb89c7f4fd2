//! Weight table parsing.
//!
//! The input is a tab-separated table: the first line is a header that is
//! skipped without inspection, and every following line is
//! `<weight>\t<token>[\t...]`. Weights are kept as opaque literal text because
//! they are copied verbatim into the generated mapping.
//!
//! The weight is never validated. Anything that is not a bare literal in the
//! target language (for example an already-quoted string) yields a
//! syntactically invalid module.

use std::io::BufRead;

use crate::constants::FIELD_SEPARATOR;
use crate::core::SpliceError;

/// One parsed `(weight, token)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Weight literal, emitted verbatim
    pub weight: String,
    /// Token, emitted quoted and escaped
    pub token: String,
}

impl Record {
    pub fn new(weight: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            weight: weight.into(),
            token: token.into(),
        }
    }
}

/// Records in the exact order they appeared in the input.
///
/// Duplicated tokens are kept; nothing is sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeightTable {
    records: Vec<Record>,
}

impl WeightTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }
}

impl FromIterator<Record> for WeightTable {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a WeightTable {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Remove one trailing `\n` or `\r\n`, and nothing else.
fn strip_line_terminator(line: &str) -> &str {
    match line.strip_suffix('\n') {
        Some(rest) => rest.strip_suffix('\r').unwrap_or(rest),
        None => line,
    }
}

/// Parse one input line into a [`Record`].
///
/// Only the trailing line terminator is removed; spaces and empty fields are
/// preserved. Field 0 is the weight, field 1 the token, extra fields are
/// ignored.
///
/// # Errors
///
/// Returns [`SpliceError::FormatError`] if the line has fewer than two
/// tab-separated fields. `line_number` is reported in the error.
pub fn parse_record(line: &str, line_number: usize) -> Result<Record, SpliceError> {
    let content = strip_line_terminator(line);
    let mut fields = content.split(FIELD_SEPARATOR);

    match (fields.next(), fields.next()) {
        (Some(weight), Some(token)) => Ok(Record::new(weight, token)),
        _ => Err(SpliceError::FormatError {
            line: line_number,
            found: content.split(FIELD_SEPARATOR).count(),
        }),
    }
}

/// Read a whole weight table from `input`.
///
/// The first line is discarded as a header. An empty stream yields an empty
/// table. The stream is consumed to completion before returning, so a
/// malformed line is reported before any output has been produced.
///
/// # Errors
///
/// - [`SpliceError::FormatError`] on the first malformed data line
/// - [`SpliceError::Io`] if reading fails or the input is not UTF-8
pub fn read_table<R: BufRead>(mut input: R) -> Result<WeightTable, SpliceError> {
    let mut table = WeightTable::new();
    let mut line = String::new();

    if input.read_line(&mut line)? == 0 {
        tracing::debug!("Input is empty, no header and no records");
        return Ok(table);
    }
    tracing::trace!("Skipped header: {:?}", strip_line_terminator(&line));

    let mut line_number = 1;
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        line_number += 1;

        let record = parse_record(&line, line_number)?;
        tracing::trace!(line = line_number, weight = %record.weight, token = %record.token, "Parsed record");
        table.push(record);
    }

    tracing::debug!("Parsed {} record(s) from input", table.len());
    Ok(table)
}
