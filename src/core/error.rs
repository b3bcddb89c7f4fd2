//! Error handling for weightsplice
//!
//! This module provides the error taxonomy of the generator and the user-facing
//! error report printed by the CLI. It follows two principles:
//! 1. **Strongly-typed errors** for precise handling in library code
//! 2. **User-friendly messages** with actionable suggestions for CLI users
//!
//! # Architecture
//!
//! - [`SpliceError`] - Enumerated error types for every failure of a run
//! - [`ErrorContext`] - Wrapper that adds details and suggestions for display
//!
//! Every error is fatal: a run either completes or aborts with a nonzero exit
//! status. There are no retries and no per-line recovery.
//!
//! A template without a marker line is deliberately *not* an error; the
//! template is copied through unchanged.
//!
//! # Examples
//!
//! ```rust,no_run
//! use weightsplice::core::{SpliceError, user_friendly_error};
//!
//! let error = SpliceError::FormatError {
//!     line: 3,
//!     found: 1,
//! };
//! let ctx = user_friendly_error(anyhow::Error::from(error));
//! ctx.display(); // Shows colored error with suggestions
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for weightsplice operations
///
/// # Error Categories
///
/// ## Input
/// - [`FormatError`] - A data line has fewer than two tab-separated fields
///
/// ## Template
/// - [`ResourceError`] - The template cannot be opened or read
///
/// ## Configuration
/// - [`SyntaxError`] - The mapping syntax is unusable (bad entry template, empty marker)
/// - [`ConfigError`] - A syntax profile file cannot be read or parsed
///
/// ## Other
/// - [`Io`] - Reading the input stream or writing the output stream failed
/// - [`Other`] - Anything else
///
/// [`FormatError`]: SpliceError::FormatError
/// [`ResourceError`]: SpliceError::ResourceError
/// [`SyntaxError`]: SpliceError::SyntaxError
/// [`ConfigError`]: SpliceError::ConfigError
/// [`Io`]: SpliceError::Io
/// [`Other`]: SpliceError::Other
#[derive(Error, Debug)]
pub enum SpliceError {
    /// An input line after the header does not split into at least two fields
    ///
    /// The run aborts on the first malformed line; nothing has been written to
    /// the output at that point.
    #[error("Malformed record on input line {line}: expected at least 2 tab-separated fields, found {found}")]
    FormatError {
        /// 1-based physical line number in the input (the header is line 1)
        line: usize,
        /// Number of fields actually present
        found: usize,
    },

    /// The template cannot be opened or read
    #[error("Failed to read template '{path}': {reason}")]
    ResourceError {
        /// Path of the template
        path: String,
        /// Underlying failure
        reason: String,
    },

    /// The mapping syntax cannot be used for rendering
    #[error("Invalid mapping syntax: {reason}")]
    SyntaxError {
        /// What is wrong with the syntax
        reason: String,
    },

    /// A syntax profile file cannot be read or parsed
    #[error("Invalid syntax profile '{file}': {reason}")]
    ConfigError {
        /// Path of the profile
        file: String,
        /// Underlying failure
        reason: String,
    },

    /// I/O failure on the input or output stream
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{message}")]
    Other {
        /// Generic error message
        message: String,
    },
}

impl Clone for SpliceError {
    fn clone(&self) -> Self {
        match self {
            Self::FormatError {
                line,
                found,
            } => Self::FormatError {
                line: *line,
                found: *found,
            },
            Self::ResourceError {
                path,
                reason,
            } => Self::ResourceError {
                path: path.clone(),
                reason: reason.clone(),
            },
            Self::SyntaxError {
                reason,
            } => Self::SyntaxError {
                reason: reason.clone(),
            },
            Self::ConfigError {
                file,
                reason,
            } => Self::ConfigError {
                file: file.clone(),
                reason: reason.clone(),
            },
            // io::Error is not Clone; keep kind and message
            Self::Io(e) => Self::Io(std::io::Error::new(e.kind(), e.to_string())),
            Self::Other {
                message,
            } => Self::Other {
                message: message.clone(),
            },
        }
    }
}

/// Error context wrapper that adds user-friendly details and suggestions
///
/// # Examples
///
/// ```rust,no_run
/// use weightsplice::core::{ErrorContext, SpliceError};
///
/// let context = ErrorContext::new(SpliceError::SyntaxError {
///     reason: "marker must not be empty".to_string(),
/// })
/// .with_suggestion("Set `marker` in the syntax profile");
///
/// context.display();
/// ```
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: SpliceError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details.
    #[must_use]
    pub const fn new(error: SpliceError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error (shown in green).
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add details explaining the error (shown in yellow).
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error, details and suggestion to stderr with terminal colors.
    ///
    /// Stdout is reserved for the generated module, so nothing is printed there.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error to a user-friendly [`ErrorContext`] with actionable suggestions
///
/// Recognizes [`SpliceError`], also when wrapped in `anyhow` context layers.
/// Anything else keeps its full cause chain in the message.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(splice_error) = error.downcast_ref::<SpliceError>() {
        return create_error_context(splice_error.clone());
    }

    let mut message = error.to_string();
    let chain: Vec<String> = error
        .chain()
        .skip(1) // Skip the root cause which is already in to_string()
        .map(std::string::ToString::to_string)
        .collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    ErrorContext::new(SpliceError::Other {
        message,
    })
}

/// Map each [`SpliceError`] variant to an [`ErrorContext`] with tailored hints.
fn create_error_context(error: SpliceError) -> ErrorContext {
    match error {
        e @ SpliceError::FormatError {
            ..
        } => ErrorContext::new(e)
            .with_details(
                "Every line after the header must be `<weight>\\t<token>`; no output was written",
            )
            .with_suggestion("Check the input for blank lines or fields separated by spaces"),
        e @ SpliceError::ResourceError {
            ..
        } => ErrorContext::new(e)
            .with_details("The template is looked up next to the weightsplice executable by default")
            .with_suggestion("Pass the template explicitly with --template <FILE>"),
        e @ SpliceError::SyntaxError {
            ..
        } => ErrorContext::new(e).with_suggestion(
            "The entry template receives `key` and `value`, e.g. `    \"{{ key }}\": {{ value }},`",
        ),
        e @ SpliceError::ConfigError {
            ..
        } => ErrorContext::new(e).with_suggestion(
            "A syntax profile accepts only the keys `marker`, `open`, `entry` and `close`",
        ),
        SpliceError::Io(io) if io.kind() == std::io::ErrorKind::BrokenPipe => {
            ErrorContext::new(SpliceError::Io(io))
                .with_details("The process reading the generated output exited early")
        }
        e => ErrorContext::new(e),
    }
}
