//! Core types shared by every weightsplice module
//!
//! The core module holds the error taxonomy used by the parser, renderer and
//! splicer, and the user-facing error report printed by the CLI:
//! - [`SpliceError`] - Enumerated error types covering every failure of a run
//! - [`ErrorContext`] - User-friendly error wrapper with suggestions and details
//! - [`user_friendly_error`] - Convert any error to user-friendly format

pub mod error;

pub use error::{ErrorContext, SpliceError, user_friendly_error};
