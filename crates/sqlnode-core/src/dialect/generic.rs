//! ANSI dialect, for callers that render without a connection.

use super::Dialect;

/// ANSI SQL rendering.
///
/// Identifiers are double-quoted. Temporal literals keep the trait's keyword
/// form, `DATE '1969-07-21'` or `TIMESTAMP '1969-07-21 02:56:15'`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GenericDialect;

impl GenericDialect {
    /// Creates the ANSI dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for GenericDialect {
    fn name(&self) -> &'static str {
        "generic"
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::NaiveDate;

    use super::*;
    use crate::literal::Literal;
    use crate::node::Node;
    use crate::position::ParserPos;
    use crate::writer::{SqlStringWriter, SqlWriter};

    #[test]
    fn test_generic_dialect() {
        let dialect = GenericDialect::new();
        assert_eq!(dialect.name(), "generic");
        assert_eq!(dialect.identifier_quote(), "\"");
        assert_eq!(dialect.quote_identifier("emp"), "\"emp\"");
        assert_eq!(dialect.quote_identifier("a\"b"), "\"a\"\"b\"");
    }

    #[test]
    fn test_date_time_literal_uses_keyword_form() {
        let date = Literal::date(NaiveDate::from_ymd_opt(1969, 7, 21).unwrap(), ParserPos::ZERO);
        let dialect = Arc::new(GenericDialect::new());
        let mut writer = SqlStringWriter::new(dialect.clone());
        dialect.unparse_date_time_literal(&mut writer, &date, 0, 0);
        assert_eq!(writer.as_str(), "DATE '1969-07-21'");
        assert_eq!(writer.dialect().name(), "generic");
    }

    #[test]
    fn test_timestamp_literal_uses_keyword_form() {
        let ts = NaiveDate::from_ymd_opt(1969, 7, 21)
            .unwrap()
            .and_hms_opt(2, 56, 15)
            .unwrap();
        let node = Node::from(Literal::timestamp(ts, 0, ParserPos::ZERO).unwrap());
        assert_eq!(
            node.to_sql(Arc::new(GenericDialect::new())),
            "TIMESTAMP '1969-07-21 02:56:15'"
        );
    }
}
