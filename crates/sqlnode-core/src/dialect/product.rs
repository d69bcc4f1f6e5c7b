//! Dialects for well-known database products.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::Dialect;
use crate::literal::{Literal, LiteralKind};
use crate::writer::{FrameKind, SqlWriter};

/// Database products with built-in dialect support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseProduct {
    /// PostgreSQL.
    Postgresql,
    /// MySQL and MariaDB.
    Mysql,
    /// Microsoft SQL Server.
    Mssql,
    /// Oracle Database.
    Oracle,
    /// H2.
    H2,
    /// DuckDB.
    Duckdb,
}

impl DatabaseProduct {
    /// Maps a product name, as reported by a driver, to a product.
    ///
    /// Matching is case-insensitive on the name prefix.
    #[must_use]
    pub fn from_product_name(name: &str) -> Option<Self> {
        let upper = name.trim().to_uppercase();
        let product = if upper.starts_with("POSTGRES") {
            Self::Postgresql
        } else if upper.starts_with("MYSQL") || upper.starts_with("MARIADB") {
            Self::Mysql
        } else if upper.starts_with("MICROSOFT SQL SERVER") || upper.starts_with("SQL SERVER") {
            Self::Mssql
        } else if upper.starts_with("ORACLE") {
            Self::Oracle
        } else if upper == "H2" {
            Self::H2
        } else if upper.starts_with("DUCKDB") {
            Self::Duckdb
        } else {
            return None;
        };
        Some(product)
    }

    /// Dialect name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Postgresql => "postgresql",
            Self::Mysql => "mysql",
            Self::Mssql => "mssql",
            Self::Oracle => "oracle",
            Self::H2 => "h2",
            Self::Duckdb => "duckdb",
        }
    }

    /// Identifier quotes used when the connection does not report any.
    #[must_use]
    pub const fn default_identifier_quotes(&self) -> (&'static str, &'static str) {
        match self {
            Self::Mysql => ("`", "`"),
            Self::Mssql => ("[", "]"),
            Self::Postgresql | Self::Oracle | Self::H2 | Self::Duckdb => ("\"", "\""),
        }
    }
}

impl fmt::Display for DatabaseProduct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dialect for a [`DatabaseProduct`], configured from connection metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDialect {
    product: DatabaseProduct,
    version: Option<String>,
    quote_start: String,
    quote_end: String,
}

impl ProductDialect {
    /// Creates a dialect with the product's default settings.
    #[must_use]
    pub fn new(product: DatabaseProduct) -> Self {
        let (start, end) = product.default_identifier_quotes();
        Self {
            product,
            version: None,
            quote_start: start.to_string(),
            quote_end: end.to_string(),
        }
    }

    /// Sets the product version.
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Overrides the identifier quote. `[` implies a closing `]`.
    #[must_use]
    pub fn with_identifier_quote(mut self, quote: &str) -> Self {
        self.quote_end = if quote == "[" {
            String::from("]")
        } else {
            quote.to_string()
        };
        self.quote_start = quote.to_string();
        self
    }

    /// The product.
    #[must_use]
    pub const fn product(&self) -> DatabaseProduct {
        self.product
    }

    /// The product version, if known.
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }
}

impl Dialect for ProductDialect {
    fn name(&self) -> &'static str {
        self.product.as_str()
    }

    fn identifier_quote(&self) -> &str {
        &self.quote_start
    }

    fn identifier_quote_end(&self) -> &str {
        &self.quote_end
    }

    fn unparse_date_time_literal(
        &self,
        writer: &mut dyn SqlWriter,
        literal: &Literal,
        _left_prec: u32,
        _right_prec: u32,
    ) {
        let formatted = literal.to_formatted_string();
        match (self.product, literal.kind()) {
            // SQL Server has no typed literal syntax; strings convert implicitly.
            (DatabaseProduct::Mssql, _) => writer.literal(&format!("'{formatted}'")),
            (DatabaseProduct::Oracle, LiteralKind::Date) => {
                oracle_conversion(writer, "TO_DATE", &formatted, "YYYY-MM-DD");
            }
            (DatabaseProduct::Oracle, LiteralKind::Timestamp) => {
                oracle_conversion(
                    writer,
                    "TO_TIMESTAMP",
                    &formatted,
                    "YYYY-MM-DD HH24:MI:SS.FF",
                );
            }
            _ => writer.literal(&literal.to_string()),
        }
    }
}

fn oracle_conversion(writer: &mut dyn SqlWriter, function: &str, value: &str, format: &str) {
    writer.operator_name(function);
    let frame = writer.start_list(FrameKind::FunctionCall, "(", ")");
    writer.literal(&format!("'{value}'"));
    writer.sep(",");
    writer.literal(&format!("'{format}'"));
    writer.end_list(frame);
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{NaiveDate, NaiveTime};

    use super::*;
    use crate::position::ParserPos;
    use crate::writer::SqlStringWriter;

    fn render(dialect: ProductDialect, literal: &Literal) -> String {
        let dialect = Arc::new(dialect);
        let mut writer = SqlStringWriter::new(dialect.clone());
        dialect.unparse_date_time_literal(&mut writer, literal, 0, 0);
        writer.into_sql()
    }

    fn date() -> Literal {
        Literal::date(NaiveDate::from_ymd_opt(1969, 7, 21).unwrap(), ParserPos::ZERO)
    }

    fn timestamp() -> Literal {
        let ts = NaiveDate::from_ymd_opt(1969, 7, 21)
            .unwrap()
            .and_hms_opt(2, 56, 15)
            .unwrap();
        Literal::timestamp(ts, 0, ParserPos::ZERO).unwrap()
    }

    #[test]
    fn test_from_product_name() {
        assert_eq!(
            DatabaseProduct::from_product_name("PostgreSQL"),
            Some(DatabaseProduct::Postgresql)
        );
        assert_eq!(
            DatabaseProduct::from_product_name("MariaDB"),
            Some(DatabaseProduct::Mysql)
        );
        assert_eq!(
            DatabaseProduct::from_product_name("Microsoft SQL Server"),
            Some(DatabaseProduct::Mssql)
        );
        assert_eq!(DatabaseProduct::from_product_name("H2"), Some(DatabaseProduct::H2));
        assert_eq!(DatabaseProduct::from_product_name("Informix"), None);
    }

    #[test]
    fn test_default_quotes() {
        assert_eq!(
            ProductDialect::new(DatabaseProduct::Mysql).quote_identifier("a`b"),
            "`a``b`"
        );
        assert_eq!(
            ProductDialect::new(DatabaseProduct::Mssql).quote_identifier("emp"),
            "[emp]"
        );
    }

    #[test]
    fn test_quote_override() {
        let dialect = ProductDialect::new(DatabaseProduct::H2).with_identifier_quote("[");
        assert_eq!(dialect.quote_identifier("x"), "[x]");
    }

    #[test]
    fn test_postgres_keyword_form() {
        let dialect = ProductDialect::new(DatabaseProduct::Postgresql);
        assert_eq!(render(dialect.clone(), &date()), "DATE '1969-07-21'");
        assert_eq!(
            render(dialect, &timestamp()),
            "TIMESTAMP '1969-07-21 02:56:15'"
        );
    }

    #[test]
    fn test_mssql_string_form() {
        let dialect = ProductDialect::new(DatabaseProduct::Mssql);
        assert_eq!(render(dialect, &date()), "'1969-07-21'");
    }

    #[test]
    fn test_oracle_conversion_functions() {
        let dialect = ProductDialect::new(DatabaseProduct::Oracle);
        assert_eq!(
            render(dialect.clone(), &date()),
            "TO_DATE('1969-07-21', 'YYYY-MM-DD')"
        );
        assert_eq!(
            render(dialect.clone(), &timestamp()),
            "TO_TIMESTAMP('1969-07-21 02:56:15', 'YYYY-MM-DD HH24:MI:SS.FF')"
        );
        let time = Literal::time(NaiveTime::from_hms_opt(2, 56, 15).unwrap(), 0, ParserPos::ZERO)
            .unwrap();
        assert_eq!(render(dialect, &time), "TIME '02:56:15'");
    }
}
