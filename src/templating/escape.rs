//! Token escaping for quoted mapping keys.
//!
//! Only `"` is escaped (as `\"`). Backslashes, control characters and anything
//! else are passed through untouched, so a token ending in `\` or containing a
//! newline still breaks the generated literal. This is a known limitation kept
//! for compatibility with existing generated modules.

use std::borrow::Cow;

/// Escape every double quote in `token` with a backslash.
///
/// Tokens without quotes are returned borrowed and unchanged. The transform
/// runs a single pass: an already-escaped `\"` becomes `\\"`.
///
/// # Examples
///
/// ```
/// use weightsplice::templating::escape_token;
///
/// assert_eq!(escape_token(r#"bar"baz"#), r#"bar\"baz"#);
/// assert_eq!(escape_token("plain"), "plain");
/// ```
#[must_use]
pub fn escape_token(token: &str) -> Cow<'_, str> {
    if token.contains('"') {
        Cow::Owned(token.replace('"', "\\\""))
    } else {
        Cow::Borrowed(token)
    }
}
