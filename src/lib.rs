//! weightsplice - embed a weight table in a source template
//!
//! weightsplice reads a tab-separated table of `(weight, token)` pairs and
//! writes a source module in which that table appears as a mapping literal.
//! The mapping replaces the marker line of a template; every other template
//! line is copied unchanged.
//!
//! # Example
//!
//! Input (the first line is a header and is skipped):
//!
//! ```text
//! header
//! 0.5	foo
//! 1	bar"baz
//! ```
//!
//! Template:
//!
//! ```text
//! # generated
//! weights = {}
//! # end
//! ```
//!
//! Output:
//!
//! ```text
//! # generated
//! weights = {
//!     "foo": 0.5,
//!     "bar\"baz": 1,
//! }
//! # end
//! ```
//!
//! # Modules
//!
//! - [`table`] - Record parsing and the ordered [`table::WeightTable`]
//! - [`templating`] - Token escaping, mapping rendering and template splicing
//! - [`config`] - The pluggable [`config::MappingSyntax`] and TOML profiles
//! - [`core`] - Error types and user-facing error reports
//! - [`cli`] - Command-line entry point
//!
//! # Known Limitations
//!
//! - Only `"` is escaped in tokens; backslashes and control characters are not.
//! - Weights are emitted verbatim and never validated. A weight that is not a
//!   bare literal in the target language produces an invalid module.

pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod table;
pub mod templating;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
