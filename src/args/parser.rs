//! The `Args` facade: compile, scan, then answer queries over the frozen result.

use crate::args::error::{render, try_render, ErrorCode};
use crate::args::marshal::FlagValue;
use crate::args::scanner::{scan, ScanOutcome};
use crate::args::schema::{Schema, SchemaError};

/// Result of parsing one token list against one schema.
///
/// Construction does all the work; every query afterwards is a pure read.
/// Scan failures do not fail construction: check [`Args::is_valid`] and
/// read [`Args::error_message`]. Getters stay total in the invalid state and
/// return whatever was parsed before the failure, or defaults.
#[derive(Debug, Clone)]
pub struct Args {
    schema: Schema,
    outcome: ScanOutcome,
}

impl Args {
    /// Parse `tokens` against `schema`.
    ///
    /// Fails only when the schema itself is malformed.
    pub fn new<S: AsRef<str>>(schema: &str, tokens: &[S]) -> Result<Self, SchemaError> {
        let schema = Schema::compile(schema)?;
        let outcome = scan(tokens, &schema);

        tracing::debug!(
            schema = schema.text(),
            tokens = tokens.len(),
            found = outcome.found.len(),
            valid = outcome.is_valid(),
            "arguments parsed"
        );

        Ok(Self { schema, outcome })
    }

    /// Stored boolean, or `false`.
    pub fn get_boolean(&self, id: char) -> bool {
        self.outcome.values.boolean(id)
    }

    /// Stored integer, or `0`.
    pub fn get_int(&self, id: char) -> i32 {
        self.outcome.values.integer(id)
    }

    /// Stored text, or `""`.
    pub fn get_string(&self, id: char) -> &str {
        self.outcome.values.text(id)
    }

    /// Current value slot for a declared flag.
    pub fn get(&self, id: char) -> Option<&FlagValue> {
        self.outcome.values.get(id)
    }

    /// Whether `id` was parsed at least once.
    pub fn has(&self, id: char) -> bool {
        self.outcome.found.contains(&id)
    }

    /// Number of parsed flag occurrences (repeats included).
    pub fn cardinality(&self) -> usize {
        self.outcome.found.len()
    }

    pub fn is_valid(&self) -> bool {
        self.outcome.is_valid()
    }

    /// `-[schema]`, or empty for an empty schema text.
    pub fn usage(&self) -> String {
        if self.schema.text().is_empty() {
            String::new()
        } else {
            format!("-[{}]", self.schema.text())
        }
    }

    /// Human-readable message for the latched error.
    ///
    /// # Panics
    ///
    /// Panics when the parse is valid.
    pub fn error_message(&self) -> String {
        render(&self.outcome.error, &self.outcome.unexpected)
    }

    /// Like [`Args::error_message`], but `None` for a valid parse.
    pub fn try_error_message(&self) -> Option<String> {
        try_render(&self.outcome.error, &self.outcome.unexpected)
    }

    pub fn error_code(&self) -> ErrorCode {
        self.outcome.error.code()
    }

    pub fn error_argument_id(&self) -> Option<char> {
        self.outcome.error.argument_id()
    }

    pub fn error_parameter(&self) -> Option<&str> {
        self.outcome.error.parameter()
    }

    /// Parsed identifiers in input order.
    pub fn found(&self) -> &[char] {
        &self.outcome.found
    }

    /// Unschemaed identifiers in input order.
    pub fn unexpected(&self) -> &[char] {
        &self.outcome.unexpected
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }
}
