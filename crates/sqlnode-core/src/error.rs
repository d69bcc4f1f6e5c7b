//! Error types for node construction, dialect resolution and rewriting.

use crate::kind::SqlKind;
use crate::literal::LiteralKind;

/// Errors raised by this crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A temporal literal was built with a negative fractional-second precision.
    #[error("precision of a {kind} literal must be non-negative, got {precision}")]
    NegativePrecision {
        /// The literal kind being built.
        kind: LiteralKind,
        /// The rejected precision.
        precision: i32,
    },

    /// The value payload does not match the requested literal kind.
    #[error("cannot build a {expected} literal from a {found} value")]
    KindMismatch {
        /// The requested kind.
        expected: LiteralKind,
        /// The kind implied by the value.
        found: LiteralKind,
    },

    /// A precision or time zone was given for a non-temporal literal.
    #[error("{0} literals take no precision or time zone")]
    NotTemporal(LiteralKind),

    /// Concatenation was attempted over literals of different kinds.
    #[error("cannot concatenate a {found} literal into a {expected} literal list")]
    HeterogeneousConcat {
        /// Kind of the first literal in the list.
        expected: LiteralKind,
        /// Offending kind.
        found: LiteralKind,
        /// Index of the offending element.
        index: usize,
    },

    /// Concatenation was attempted over an empty list.
    #[error("cannot concatenate an empty literal list")]
    EmptyConcat,

    /// Concatenation is not defined for this kind.
    #[error("{0} literals cannot be concatenated")]
    NotConcatenable(LiteralKind),

    /// A binary string contained a non-hexadecimal digit.
    #[error("invalid hex digit {digit:?} at offset {offset}")]
    InvalidHex {
        /// The offending character.
        digit: char,
        /// Character offset in the input.
        offset: usize,
    },

    /// A collation name did not have the `charset$locale$strength` shape.
    #[error("invalid collation name '{0}'")]
    InvalidCollation(String),

    /// Connection metadata did not identify a known dialect.
    #[error("no dialect known for database product '{product}'")]
    UnknownDialect {
        /// The product name reported by the metadata.
        product: String,
    },

    /// Reading connection metadata failed.
    #[error("failed to read connection metadata: {0}")]
    Metadata(String),

    /// A well-known operator was missing from the operator table.
    #[error("operator '{0}' is not registered in the operator table")]
    MissingOperator(&'static str),

    /// An operator was applied to the wrong number of operands.
    #[error("{operator} expects {expected} operand(s), got {actual}")]
    InvalidOperandCount {
        /// Operator name.
        operator: String,
        /// Human readable description of the accepted range.
        expected: String,
        /// Number of operands supplied.
        actual: usize,
    },

    /// A call node had an unexpected kind for the requested rewrite.
    #[error("expected a {expected} call, got {found}")]
    UnexpectedKind {
        /// Kind the operation accepts.
        expected: SqlKind,
        /// Kind that was supplied.
        found: SqlKind,
    },

    /// An operator has no rule to infer its return type, or the rule failed.
    #[error("cannot infer return type of {0}")]
    ReturnTypeInference(String),
}

/// Result type alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;
