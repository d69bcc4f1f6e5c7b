//! SQL dialect support.
//!
//! Databases differ in how they spell date/time literals and quote
//! identifiers. A [`Dialect`] is a rendering strategy; the writer carries one
//! for each render pass, so a single tree can be unparsed for several
//! databases, including concurrently. Literal and operator types never branch
//! on dialect identity, so adding a dialect needs only a new implementation of
//! this trait.

mod factory;
mod generic;
mod product;

pub use factory::{ConnectionMetadata, DefaultDialectFactory, DialectFactory, MetadataSnapshot};
pub use generic::GenericDialect;
pub use product::{DatabaseProduct, ProductDialect};

use core::fmt;

use crate::literal::Literal;
use crate::writer::SqlWriter;

/// Trait for SQL dialect-specific rendering.
pub trait Dialect: fmt::Debug + Send + Sync {
    /// Returns the name of the dialect.
    fn name(&self) -> &'static str;

    /// Returns the opening identifier quote (e.g., `"` for standard SQL, `` ` `` for MySQL).
    fn identifier_quote(&self) -> &str {
        "\""
    }

    /// Returns the closing identifier quote.
    fn identifier_quote_end(&self) -> &str {
        self.identifier_quote()
    }

    /// Quotes an identifier, doubling any embedded closing quote.
    fn quote_identifier(&self, name: &str) -> String {
        let open = self.identifier_quote();
        let close = self.identifier_quote_end();
        if open.is_empty() {
            return name.to_string();
        }
        let doubled = format!("{close}{close}");
        format!("{open}{}{close}", name.replace(close, &doubled))
    }

    /// Writes a DATE, TIME or TIMESTAMP literal.
    ///
    /// The default writes the ANSI keyword form, e.g. `DATE '1969-07-21'`.
    fn unparse_date_time_literal(
        &self,
        writer: &mut dyn SqlWriter,
        literal: &Literal,
        _left_prec: u32,
        _right_prec: u32,
    ) {
        writer.literal(&literal.to_string());
    }
}
