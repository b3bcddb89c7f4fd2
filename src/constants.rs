//! Global constants used throughout the weightsplice codebase.
//!
//! These are the built-in defaults for the mapping syntax and the template
//! lookup. Every syntax value can be overridden through a syntax profile
//! (see [`crate::config`]).

/// File name of the template looked up next to the running executable.
pub const DEFAULT_TEMPLATE_NAME: &str = "binary.py";

/// Prefix that marks the template line replaced by the rendered mapping.
pub const DEFAULT_MARKER: &str = "weights = {}";

/// Opening line of the rendered mapping.
pub const DEFAULT_OPEN: &str = "weights = {";

/// Tera template rendered once per record.
///
/// Receives `key` (the escaped token) and `value` (the raw weight literal).
pub const DEFAULT_ENTRY: &str = r#"    "{{ key }}": {{ value }},"#;

/// Closing line of the rendered mapping.
pub const DEFAULT_CLOSE: &str = "}";

/// Field separator of the input table.
pub const FIELD_SEPARATOR: char = '\t';

/// Name under which the entry template is registered with Tera.
pub(crate) const ENTRY_TEMPLATE_NAME: &str = "entry";
