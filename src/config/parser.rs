//! Generic configuration parsing utilities.
//!
//! Reads a TOML file and deserializes it into any `DeserializeOwned` type.
//! Both read and parse failures are reported as
//! [`SpliceError::ConfigError`] carrying the file path.
//!
//! ```rust,no_run
//! use weightsplice::config::{MappingSyntax, parse_config};
//! use std::path::Path;
//!
//! # fn example() -> Result<(), weightsplice::core::SpliceError> {
//! let syntax: MappingSyntax = parse_config(Path::new("rust.toml"))?;
//! println!("marker: {}", syntax.marker);
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use crate::core::SpliceError;

/// Parse a TOML configuration file into the specified type.
///
/// # Errors
///
/// Returns [`SpliceError::ConfigError`] if the file cannot be read or its
/// content does not deserialize into `T`.
pub fn parse_config<T>(path: &Path) -> Result<T, SpliceError>
where
    T: serde::de::DeserializeOwned,
{
    let content = std::fs::read_to_string(path).map_err(|e| SpliceError::ConfigError {
        file: path.display().to_string(),
        reason: format!("failed to read file: {e}"),
    })?;

    toml::from_str(&content).map_err(|e| SpliceError::ConfigError {
        file: path.display().to_string(),
        reason: e.to_string(),
    })
}
