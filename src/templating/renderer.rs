//! Mapping rendering engine with Tera.
//!
//! [`MappingRenderer`] turns a [`WeightTable`] into the lines of a mapping
//! literal: the opening line, one line per record in input order, and the
//! closing line. The per-entry form is a Tera template from the
//! [`MappingSyntax`]; the opening and closing lines are emitted as-is.

use tera::{Context as TeraContext, Tera};

use super::escape::escape_token;
use crate::config::MappingSyntax;
use crate::constants::ENTRY_TEMPLATE_NAME;
use crate::core::SpliceError;
use crate::table::{Record, WeightTable};

/// Renders weight tables with a fixed [`MappingSyntax`].
///
/// The entry template is compiled once in [`MappingRenderer::new`] and
/// reused for every record.
pub struct MappingRenderer {
    tera: Tera,
    open: String,
    close: String,
}

impl MappingRenderer {
    /// Compile the entry template of `syntax`.
    ///
    /// The template is test-rendered once with empty values so that
    /// references to unknown variables fail here rather than mid-render.
    ///
    /// # Errors
    ///
    /// Returns [`SpliceError::SyntaxError`] if the entry template does not
    /// parse or references anything besides `key` and `value`.
    pub fn new(syntax: &MappingSyntax) -> Result<Self, SpliceError> {
        let mut tera = Tera::default();
        // Tokens are escaped by escape_token only
        tera.autoescape_on(vec![]);
        tera.add_raw_template(ENTRY_TEMPLATE_NAME, &syntax.entry).map_err(|e| {
            SpliceError::SyntaxError {
                reason: format_tera_error(&e),
            }
        })?;

        let renderer = Self {
            tera,
            open: syntax.open.clone(),
            close: syntax.close.clone(),
        };
        renderer.render_entry(&Record::new("", ""))?;
        Ok(renderer)
    }

    /// Render one entry line for `record`.
    ///
    /// The token is escaped with [`escape_token`]; the weight is passed through
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns [`SpliceError::SyntaxError`] if Tera fails to render.
    pub fn render_entry(&self, record: &Record) -> Result<String, SpliceError> {
        let mut context = TeraContext::new();
        context.insert("key", &*escape_token(&record.token));
        context.insert("value", &record.weight);

        self.tera.render(ENTRY_TEMPLATE_NAME, &context).map_err(|e| SpliceError::SyntaxError {
            reason: format_tera_error(&e),
        })
    }

    /// Render the full mapping block, without line terminators.
    ///
    /// An empty table still yields the opening and closing lines.
    ///
    /// # Errors
    ///
    /// Returns [`SpliceError::SyntaxError`] if any entry fails to render.
    pub fn render(&self, table: &WeightTable) -> Result<Vec<String>, SpliceError> {
        let mut lines = Vec::with_capacity(table.len() + 2);
        lines.push(self.open.clone());
        for record in table {
            lines.push(self.render_entry(record)?);
        }
        lines.push(self.close.clone());

        tracing::debug!("Rendered mapping with {} entr(ies)", table.len());
        Ok(lines)
    }
}

/// Flatten a Tera error and its sources into one message.
fn format_tera_error(error: &tera::Error) -> String {
    use std::error::Error;

    let mut messages = vec![error.to_string()];
    let mut current_error: Option<&dyn Error> = error.source();
    while let Some(err) = current_error {
        messages.push(err.to_string());
        current_error = err.source();
    }

    messages
        .into_iter()
        .map(|msg| msg.replace(&format!("'{ENTRY_TEMPLATE_NAME}'"), "entry template"))
        .filter(|msg| !msg.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n  → ")
}
