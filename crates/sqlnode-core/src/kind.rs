//! Node kind discriminants.

use core::fmt;

/// Semantic kind of a node or operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SqlKind {
    /// A literal value.
    Literal,
    /// An identifier.
    Identifier,
    /// A SELECT query.
    Select,
    /// A VALUES table constructor.
    Values,
    /// A ROW value constructor.
    Row,
    /// `TABLE(f(x))`, a table-valued function invocation.
    CollectionTable,
    /// The LATERAL table modifier.
    Lateral,
    /// `CALL proc(...)`.
    ProcedureCall,
    /// RANK window function.
    Rank,
    /// DENSE_RANK window function.
    DenseRank,
    /// ROW_NUMBER window function.
    RowNumber,
    /// PERCENT_RANK window function.
    PercentRank,
    /// CUME_DIST window function.
    CumeDist,
    /// Any other function.
    OtherFunction,
    /// Any other operator.
    Other,
}

impl SqlKind {
    /// Returns the upper-case name of the kind, as used in operator names.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Literal => "LITERAL",
            Self::Identifier => "IDENTIFIER",
            Self::Select => "SELECT",
            Self::Values => "VALUES",
            Self::Row => "ROW",
            Self::CollectionTable => "COLLECTION_TABLE",
            Self::Lateral => "LATERAL",
            Self::ProcedureCall => "PROCEDURE_CALL",
            Self::Rank => "RANK",
            Self::DenseRank => "DENSE_RANK",
            Self::RowNumber => "ROW_NUMBER",
            Self::PercentRank => "PERCENT_RANK",
            Self::CumeDist => "CUME_DIST",
            Self::OtherFunction => "OTHER_FUNCTION",
            Self::Other => "OTHER",
        }
    }

    /// Returns true for kinds that produce a relation rather than a scalar.
    #[must_use]
    pub const fn is_query(&self) -> bool {
        matches!(self, Self::Select | Self::Values)
    }
}

impl fmt::Display for SqlKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
