//! SQL data types and the type factory used by type-inference rules.

use core::fmt;

/// SQL data types.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DataType {
    // Numeric
    /// Integer (4 bytes).
    Integer,
    /// Big integer (8 bytes).
    Bigint,
    /// Double precision (8-byte float).
    Double,

    // String types
    /// Fixed-length character string.
    Char(Option<u32>),
    /// Variable-length character string.
    Varchar(Option<u32>),

    // Binary types
    /// Fixed-length binary string.
    Binary(Option<u32>),
    /// Variable-length binary.
    Varbinary(Option<u32>),

    // Date/time types
    /// Date.
    Date,
    /// Time of day with optional fractional-second precision.
    Time {
        /// Fractional-second digits.
        precision: Option<u32>,
        /// WITH TIME ZONE.
        with_time_zone: bool,
    },
    /// Timestamp with optional fractional-second precision.
    Timestamp {
        /// Fractional-second digits.
        precision: Option<u32>,
        /// WITH TIME ZONE.
        with_time_zone: bool,
    },

    // Other
    /// Boolean.
    Boolean,
    /// Type of the NULL literal.
    Null,
    /// Any type, used where no constraint applies.
    Any,
}

impl DataType {
    /// Returns the SQL representation of the data type.
    #[must_use]
    pub fn to_sql(&self) -> String {
        fn sized(name: &str, len: Option<u32>) -> String {
            match len {
                Some(n) => format!("{name}({n})"),
                None => String::from(name),
            }
        }
        fn temporal(name: &str, precision: Option<u32>, with_time_zone: bool) -> String {
            let mut sql = sized(name, precision);
            if with_time_zone {
                sql.push_str(" WITH TIME ZONE");
            }
            sql
        }
        match self {
            Self::Integer => String::from("INTEGER"),
            Self::Bigint => String::from("BIGINT"),
            Self::Double => String::from("DOUBLE"),
            Self::Char(len) => sized("CHAR", *len),
            Self::Varchar(len) => sized("VARCHAR", *len),
            Self::Binary(len) => sized("BINARY", *len),
            Self::Varbinary(len) => sized("VARBINARY", *len),
            Self::Date => String::from("DATE"),
            Self::Time {
                precision,
                with_time_zone,
            } => temporal("TIME", *precision, *with_time_zone),
            Self::Timestamp {
                precision,
                with_time_zone,
            } => temporal("TIMESTAMP", *precision, *with_time_zone),
            Self::Boolean => String::from("BOOLEAN"),
            Self::Null => String::from("NULL"),
            Self::Any => String::from("ANY"),
        }
    }

    /// Returns true for exact and approximate numeric types.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer | Self::Bigint | Self::Double)
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sql())
    }
}

/// Creates canonical data types.
///
/// Return-type rules ask the factory for types rather than building them
/// directly, so that a type system can apply its own defaults and limits.
pub trait TypeFactory: Send + Sync {
    /// Returns the canonical form of `data_type`.
    fn create_sql_type(&self, data_type: DataType) -> DataType;

    /// Largest fractional-second precision the type system supports.
    fn max_fractional_precision(&self) -> u32 {
        9
    }
}

/// Type factory applying ANSI defaults.
///
/// Unsized character and binary types get length 1; temporal types without a
/// precision get precision 0. Precisions are capped at
/// [`TypeFactory::max_fractional_precision`].
#[derive(Debug, Default, Clone, Copy)]
pub struct BasicTypeFactory;

impl BasicTypeFactory {
    /// Creates a new type factory.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl TypeFactory for BasicTypeFactory {
    fn create_sql_type(&self, data_type: DataType) -> DataType {
        let max = self.max_fractional_precision();
        let clamp = |p: Option<u32>| Some(p.unwrap_or(0).min(max));
        match data_type {
            DataType::Char(len) => DataType::Char(Some(len.unwrap_or(1))),
            DataType::Binary(len) => DataType::Binary(Some(len.unwrap_or(1))),
            DataType::Time {
                precision,
                with_time_zone,
            } => DataType::Time {
                precision: clamp(precision),
                with_time_zone,
            },
            DataType::Timestamp {
                precision,
                with_time_zone,
            } => DataType::Timestamp {
                precision: clamp(precision),
                with_time_zone,
            },
            other => other,
        }
    }
}
