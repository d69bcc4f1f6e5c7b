//! SQLite dialect implementation.

use sqlnode_core::dialect::Dialect;
use sqlnode_core::{Literal, SqlWriter};

/// SQLite dialect.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SqliteDialect {
    version: Option<String>,
}

impl SqliteDialect {
    /// Creates a new SQLite dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self { version: None }
    }

    /// Sets the library version reported by the connection.
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// The library version, if known.
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }
}

impl Dialect for SqliteDialect {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    fn identifier_quote(&self) -> &str {
        "\"" // SQLite also accepts backticks, but double quotes are standard
    }

    /// Temporal values are ISO-8601 text in SQLite.
    fn unparse_date_time_literal(
        &self,
        writer: &mut dyn SqlWriter,
        literal: &Literal,
        _left_prec: u32,
        _right_prec: u32,
    ) {
        writer.literal(&format!("'{}'", literal.to_formatted_string()));
    }
}
