//! Integration test suite for weightsplice
//!
//! End-to-end tests that run the built binary with `assert_cmd`, feeding the
//! weight table on stdin and checking stdout, stderr and the exit status.
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **generate**: Successful runs, ordering, escaping and pass-through
//! - **errors**: Malformed input, missing template and bad profiles
//! - **syntax**: Custom syntax profiles


mod errors;
mod generate;
mod syntax;
