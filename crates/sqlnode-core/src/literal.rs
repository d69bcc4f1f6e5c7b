//! Literal AST leaves.
//!
//! A [`Literal`] pairs a [`LiteralValue`] payload with its [`LiteralKind`],
//! fractional-second precision and source position. Literals are immutable:
//! tree rewrites that need a new position call [`Literal::clone_at`].

use core::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::error::{Error, Result};
use crate::position::ParserPos;
use crate::types::{DataType, TypeFactory};
use crate::value::temporal::{format_date, format_time, format_timestamp};
use crate::value::{BitString, CharString, Collation};
use crate::writer::SqlWriter;

/// Discriminant of a literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LiteralKind {
    /// Character string.
    Char,
    /// Binary string.
    Binary,
    /// Date.
    Date,
    /// Time of day.
    Time,
    /// Timestamp.
    Timestamp,
    /// Exact integer.
    ExactNumeric,
    /// Boolean.
    Boolean,
    /// NULL.
    Null,
}

impl LiteralKind {
    /// Returns the SQL keyword naming the kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Char => "CHAR",
            Self::Binary => "BINARY",
            Self::Date => "DATE",
            Self::Time => "TIME",
            Self::Timestamp => "TIMESTAMP",
            Self::ExactNumeric => "EXACT_NUMERIC",
            Self::Boolean => "BOOLEAN",
            Self::Null => "NULL",
        }
    }

    /// Returns true for DATE, TIME and TIMESTAMP.
    #[must_use]
    pub const fn is_temporal(&self) -> bool {
        matches!(self, Self::Date | Self::Time | Self::Timestamp)
    }
}

impl fmt::Display for LiteralKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typed payload of a literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LiteralValue {
    /// Character string.
    Char(CharString),
    /// Binary string.
    Binary(BitString),
    /// Date.
    Date(NaiveDate),
    /// Time of day.
    Time(NaiveTime),
    /// Timestamp without time zone.
    Timestamp(NaiveDateTime),
    /// Exact integer.
    ExactNumeric(i64),
    /// Boolean.
    Boolean(bool),
    /// NULL.
    Null,
}

impl LiteralValue {
    /// The kind implied by the payload.
    #[must_use]
    pub const fn kind(&self) -> LiteralKind {
        match self {
            Self::Char(_) => LiteralKind::Char,
            Self::Binary(_) => LiteralKind::Binary,
            Self::Date(_) => LiteralKind::Date,
            Self::Time(_) => LiteralKind::Time,
            Self::Timestamp(_) => LiteralKind::Timestamp,
            Self::ExactNumeric(_) => LiteralKind::ExactNumeric,
            Self::Boolean(_) => LiteralKind::Boolean,
            Self::Null => LiteralKind::Null,
        }
    }
}

/// A literal value with its source position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Literal {
    value: LiteralValue,
    kind: LiteralKind,
    precision: u32,
    has_time_zone: bool,
    pos: ParserPos,
}

impl Literal {
    /// Creates a literal of the given kind.
    ///
    /// Temporal literals get precision 0 and no time zone; use
    /// [`Literal::new_temporal`] to set them.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KindMismatch`] if `value` is not of `kind`.
    pub fn new(value: LiteralValue, kind: LiteralKind, pos: ParserPos) -> Result<Self> {
        Self::new_temporal(value, kind, pos, 0, false)
    }

    /// Creates a literal with a fractional-second precision and time zone flag.
    ///
    /// Non-temporal kinds accept only precision 0 and no time zone.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KindMismatch`] if `value` is not of `kind`,
    /// [`Error::NegativePrecision`] if `precision` is negative, or
    /// [`Error::NotTemporal`] if a precision or time zone is given for a
    /// non-temporal kind.
    pub fn new_temporal(
        value: LiteralValue,
        kind: LiteralKind,
        pos: ParserPos,
        precision: i32,
        has_time_zone: bool,
    ) -> Result<Self> {
        let found = value.kind();
        if found != kind {
            return Err(Error::KindMismatch {
                expected: kind,
                found,
            });
        }
        let precision = u32::try_from(precision)
            .map_err(|_| Error::NegativePrecision { kind, precision })?;
        if !kind.is_temporal() && (precision != 0 || has_time_zone) {
            return Err(Error::NotTemporal(kind));
        }
        Ok(Self {
            value,
            kind,
            precision,
            has_time_zone,
            pos,
        })
    }

    fn from_value(value: LiteralValue, pos: ParserPos) -> Self {
        Self {
            kind: value.kind(),
            value,
            precision: 0,
            has_time_zone: false,
            pos,
        }
    }

    /// Creates a character string literal without a character set.
    #[must_use]
    pub fn char_string(value: impl Into<String>, pos: ParserPos) -> Self {
        Self::from_value(LiteralValue::Char(CharString::new(value)), pos)
    }

    /// Creates a character string literal from a [`CharString`].
    #[must_use]
    pub fn from_char_string(value: CharString, pos: ParserPos) -> Self {
        Self::from_value(LiteralValue::Char(value), pos)
    }

    /// Creates a binary string literal.
    #[must_use]
    pub fn binary(value: BitString, pos: ParserPos) -> Self {
        Self::from_value(LiteralValue::Binary(value), pos)
    }

    /// Creates a binary string literal from hex digits.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidHex`] if `hex` contains a non-hex character.
    pub fn binary_from_hex(hex: &str, pos: ParserPos) -> Result<Self> {
        Ok(Self::binary(BitString::from_hex(hex)?, pos))
    }

    /// Creates a DATE literal.
    #[must_use]
    pub fn date(value: NaiveDate, pos: ParserPos) -> Self {
        Self::from_value(LiteralValue::Date(value), pos)
    }

    /// Creates a TIME literal.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NegativePrecision`] if `precision < 0`.
    pub fn time(value: NaiveTime, precision: i32, pos: ParserPos) -> Result<Self> {
        Self::new_temporal(
            LiteralValue::Time(value),
            LiteralKind::Time,
            pos,
            precision,
            false,
        )
    }

    /// Creates a TIMESTAMP literal.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NegativePrecision`] if `precision < 0`.
    pub fn timestamp(value: NaiveDateTime, precision: i32, pos: ParserPos) -> Result<Self> {
        Self::new_temporal(
            LiteralValue::Timestamp(value),
            LiteralKind::Timestamp,
            pos,
            precision,
            false,
        )
    }

    /// Creates an exact numeric literal.
    #[must_use]
    pub fn exact_numeric(value: i64, pos: ParserPos) -> Self {
        Self::from_value(LiteralValue::ExactNumeric(value), pos)
    }

    /// Creates a boolean literal.
    #[must_use]
    pub fn boolean(value: bool, pos: ParserPos) -> Self {
        Self::from_value(LiteralValue::Boolean(value), pos)
    }

    /// Creates the NULL literal.
    #[must_use]
    pub fn null(pos: ParserPos) -> Self {
        Self::from_value(LiteralValue::Null, pos)
    }

    /// The payload.
    #[must_use]
    pub const fn value(&self) -> &LiteralValue {
        &self.value
    }

    /// The kind.
    #[must_use]
    pub const fn kind(&self) -> LiteralKind {
        self.kind
    }

    /// Fractional-second digits; 0 for non-temporal kinds.
    #[must_use]
    pub const fn precision(&self) -> u32 {
        self.precision
    }

    /// Whether a temporal literal carries a time zone.
    #[must_use]
    pub const fn has_time_zone(&self) -> bool {
        self.has_time_zone
    }

    /// Source position.
    #[must_use]
    pub const fn position(&self) -> ParserPos {
        self.pos
    }

    /// String content of a character literal.
    #[must_use]
    pub fn string_value(&self) -> Option<&str> {
        match &self.value {
            LiteralValue::Char(s) => Some(s.value()),
            _ => None,
        }
    }

    /// Collation of a character literal, derived from the active settings.
    #[must_use]
    pub fn collation(&self) -> Option<Collation> {
        match self.kind {
            LiteralKind::Char => Some(Collation::implicit_default()),
            _ => None,
        }
    }

    /// Character set of a character literal: its own, or else the active
    /// settings' default.
    #[must_use]
    pub fn charset(&self) -> Option<&str> {
        self.charset_with(Settings::global())
    }

    /// Character set of a character literal, defaulting to
    /// `settings.default_charset`.
    #[must_use]
    pub fn charset_with<'a>(&'a self, settings: &'a Settings) -> Option<&'a str> {
        match &self.value {
            LiteralValue::Char(s) => Some(s.charset().unwrap_or(settings.default_charset.as_str())),
            _ => None,
        }
    }

    /// Returns an equal literal at a new position.
    #[must_use]
    pub fn clone_at(&self, pos: ParserPos) -> Self {
        Self {
            pos,
            ..self.clone()
        }
    }

    /// Canonical text of the value, independent of any dialect.
    ///
    /// Dates are `YYYY-MM-DD`; years outside `0..=9999` take the ISO 8601
    /// expanded form, e.g. `+12345-01-02`. Times are `HH:MM:SS` with
    /// `precision` fractional digits when `precision > 0`. Timestamps are
    /// rounded to `precision` digits first.
    #[must_use]
    pub fn to_formatted_string(&self) -> String {
        match &self.value {
            LiteralValue::Char(s) => s.value().to_string(),
            LiteralValue::Binary(bits) => bits.to_hex_string(),
            LiteralValue::Date(d) => format_date(*d),
            LiteralValue::Time(t) => format_time(*t, self.precision),
            LiteralValue::Timestamp(ts) => format_timestamp(*ts, self.precision),
            LiteralValue::ExactNumeric(n) => n.to_string(),
            LiteralValue::Boolean(b) => String::from(if *b { "TRUE" } else { "FALSE" }),
            LiteralValue::Null => String::from("NULL"),
        }
    }

    /// Writes the literal.
    ///
    /// Temporal literals are delegated to the writer's dialect; the others
    /// have one spelling in every dialect.
    pub fn unparse(&self, writer: &mut dyn SqlWriter, left_prec: u32, right_prec: u32) {
        match &self.value {
            LiteralValue::Date(_) | LiteralValue::Time(_) | LiteralValue::Timestamp(_) => {
                let dialect = writer.dialect();
                dialect.unparse_date_time_literal(writer, self, left_prec, right_prec);
            }
            LiteralValue::Boolean(_) | LiteralValue::Null => {
                writer.keyword(&self.to_formatted_string());
            }
            LiteralValue::Char(_) | LiteralValue::Binary(_) | LiteralValue::ExactNumeric(_) => {
                writer.literal(&self.to_string());
            }
        }
    }

    /// Concatenates character or binary literals left to right.
    ///
    /// The result takes the first literal's position and, for character
    /// strings, its character set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyConcat`] for an empty list,
    /// [`Error::NotConcatenable`] if the first literal is neither CHAR nor
    /// BINARY, and [`Error::HeterogeneousConcat`] if any literal differs in
    /// kind from the first.
    pub fn concat(literals: &[Self]) -> Result<Self> {
        let (first, rest) = literals.split_first().ok_or(Error::EmptyConcat)?;
        if let Some((index, other)) = rest
            .iter()
            .enumerate()
            .find(|(_, lit)| lit.kind != first.kind)
        {
            return Err(Error::HeterogeneousConcat {
                expected: first.kind,
                found: other.kind,
                index: index + 1,
            });
        }
        let value = match &first.value {
            LiteralValue::Char(head) => {
                let tail: String = rest.iter().filter_map(Self::string_value).collect();
                LiteralValue::Char(head.append(&tail))
            }
            LiteralValue::Binary(_) => {
                LiteralValue::Binary(BitString::concat(literals.iter().filter_map(|lit| {
                    match &lit.value {
                        LiteralValue::Binary(bits) => Some(bits),
                        _ => None,
                    }
                })))
            }
            _ => return Err(Error::NotConcatenable(first.kind)),
        };
        Ok(Self::from_value(value, first.pos))
    }

    /// SQL type of the literal.
    #[must_use]
    pub fn data_type(&self, factory: &dyn TypeFactory) -> DataType {
        let data_type = match &self.value {
            LiteralValue::Char(s) => {
                DataType::Char(Some(u32::try_from(s.value().chars().count()).unwrap_or(u32::MAX)))
            }
            LiteralValue::Binary(bits) => {
                DataType::Binary(Some(u32::try_from(bits.byte_count()).unwrap_or(u32::MAX)))
            }
            LiteralValue::Date(_) => DataType::Date,
            LiteralValue::Time(_) => DataType::Time {
                precision: Some(self.precision),
                with_time_zone: self.has_time_zone,
            },
            LiteralValue::Timestamp(_) => DataType::Timestamp {
                precision: Some(self.precision),
                with_time_zone: self.has_time_zone,
            },
            LiteralValue::ExactNumeric(n) => {
                if i32::try_from(*n).is_ok() {
                    DataType::Integer
                } else {
                    DataType::Bigint
                }
            }
            LiteralValue::Boolean(_) => DataType::Boolean,
            LiteralValue::Null => DataType::Null,
        };
        factory.create_sql_type(data_type)
    }
}

impl fmt::Display for Literal {
    /// The SQL spelling independent of dialect: `'abc'`, `X'0F'`,
    /// `DATE '1969-07-21'`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            LiteralValue::Char(s) => write!(f, "{s}"),
            LiteralValue::Binary(bits) => write!(f, "X'{}'", bits.to_hex_string()),
            LiteralValue::Date(_) | LiteralValue::Time(_) | LiteralValue::Timestamp(_) => {
                write!(f, "{} '{}'", self.kind, self.to_formatted_string())
            }
            LiteralValue::ExactNumeric(_) | LiteralValue::Boolean(_) | LiteralValue::Null => {
                f.write_str(&self.to_formatted_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BasicTypeFactory;

    fn pos() -> ParserPos {
        ParserPos::at(1, 8)
    }

    fn time_567() -> NaiveTime {
        NaiveTime::from_hms_milli_opt(14, 33, 44, 567).unwrap()
    }

    #[test]
    fn test_new_rejects_kind_mismatch() {
        let err = Literal::new(LiteralValue::Boolean(true), LiteralKind::Char, pos()).unwrap_err();
        assert_eq!(
            err,
            Error::KindMismatch {
                expected: LiteralKind::Char,
                found: LiteralKind::Boolean
            }
        );
    }

    #[test]
    fn test_negative_precision_fails() {
        assert_eq!(
            Literal::time(time_567(), -1, pos()),
            Err(Error::NegativePrecision {
                kind: LiteralKind::Time,
                precision: -1
            })
        );
        let ts = NaiveDate::from_ymd_opt(2020, 1, 1)
            .unwrap()
            .and_time(time_567());
        assert!(matches!(
            Literal::timestamp(ts, i32::MIN, pos()),
            Err(Error::NegativePrecision { .. })
        ));
    }

    #[test]
    fn test_precision_on_non_temporal_fails() {
        let value = LiteralValue::Char(CharString::new("x"));
        assert_eq!(
            Literal::new_temporal(value, LiteralKind::Char, pos(), 2, false),
            Err(Error::NotTemporal(LiteralKind::Char))
        );
    }

    #[test]
    fn test_time_formatted_string() {
        let lit = Literal::time(time_567(), 3, pos()).unwrap();
        assert_eq!(lit.to_formatted_string(), "14:33:44.567");
        assert_eq!(lit.to_string(), "TIME '14:33:44.567'");
        let lit = Literal::time(time_567(), 0, pos()).unwrap();
        assert_eq!(lit.to_formatted_string(), "14:33:44");
    }

    #[test]
    fn test_clone_at_keeps_value() {
        let lit = Literal::new_temporal(
            LiteralValue::Time(time_567()),
            LiteralKind::Time,
            pos(),
            3,
            true,
        )
        .unwrap();
        let moved = ParserPos::at(9, 2);
        let copy = lit.clone_at(moved);
        assert_eq!(copy.value(), lit.value());
        assert_eq!(copy.kind(), lit.kind());
        assert_eq!(copy.precision(), 3);
        assert!(copy.has_time_zone());
        assert_eq!(copy.position(), moved);
        assert_eq!(lit.position(), pos());
        assert_eq!(copy.clone_at(moved), copy);
    }

    #[test]
    fn test_to_string_forms() {
        assert_eq!(Literal::char_string("it's", pos()).to_string(), "'it''s'");
        assert_eq!(
            Literal::from_char_string(CharString::with_charset("x", "utf8"), pos()).to_string(),
            "_UTF8'x'"
        );
        assert_eq!(
            Literal::binary_from_hex("0aff", pos()).unwrap().to_string(),
            "X'0AFF'"
        );
        assert_eq!(Literal::exact_numeric(-42, pos()).to_string(), "-42");
        assert_eq!(Literal::boolean(false, pos()).to_string(), "FALSE");
        assert_eq!(Literal::null(pos()).to_string(), "NULL");
    }

    #[test]
    fn test_concat_char() {
        let lits = [
            Literal::char_string("foo", pos()),
            Literal::char_string("bar", ParserPos::at(2, 1)),
        ];
        let joined = Literal::concat(&lits).unwrap();
        assert_eq!(joined.string_value(), Some("foobar"));
        assert_eq!(joined.position(), pos());
    }

    #[test]
    fn test_concat_binary() {
        let lits = [
            Literal::binary_from_hex("AB", pos()).unwrap(),
            Literal::binary_from_hex("CD", pos()).unwrap(),
        ];
        assert_eq!(Literal::concat(&lits).unwrap().to_string(), "X'ABCD'");
    }

    #[test]
    fn test_concat_rejects_mixed_kinds() {
        let lits = [
            Literal::char_string("foo", pos()),
            Literal::char_string("bar", pos()),
            Literal::binary_from_hex("00", pos()).unwrap(),
        ];
        assert_eq!(
            Literal::concat(&lits),
            Err(Error::HeterogeneousConcat {
                expected: LiteralKind::Char,
                found: LiteralKind::Binary,
                index: 2
            })
        );
    }

    #[test]
    fn test_concat_rejects_empty_and_other_kinds() {
        assert_eq!(Literal::concat(&[]), Err(Error::EmptyConcat));
        assert_eq!(
            Literal::concat(&[Literal::boolean(true, pos())]),
            Err(Error::NotConcatenable(LiteralKind::Boolean))
        );
    }

    #[test]
    fn test_collation_only_for_char() {
        let c = Literal::char_string("x", pos()).collation().unwrap();
        assert_eq!(c.charset(), c.name().split('$').next().unwrap().to_uppercase());
        assert!(Literal::exact_numeric(1, pos()).collation().is_none());
    }

    #[test]
    fn test_charset_defaults_to_settings() {
        let settings = Settings {
            default_charset: String::from("UTF-16"),
            ..Settings::default()
        };
        let plain = Literal::char_string("x", pos());
        assert_eq!(plain.charset_with(&settings), Some("UTF-16"));
        assert_eq!(
            plain.charset_with(&Settings::default()),
            Some("ISO-8859-1")
        );
        let tagged = Literal::from_char_string(CharString::with_charset("x", "utf8"), pos());
        assert_eq!(tagged.charset_with(&settings), Some("UTF8"));
        assert_eq!(Literal::boolean(true, pos()).charset_with(&settings), None);
    }

    #[test]
    fn test_far_dates_use_expanded_years() {
        let date = NaiveDate::from_ymd_opt(12345, 1, 2).unwrap();
        assert_eq!(Literal::date(date, pos()).to_string(), "DATE '+12345-01-02'");
    }

    #[test]
    fn test_max_timestamp_formats() {
        let lit = Literal::timestamp(NaiveDateTime::MAX, 3, pos()).unwrap();
        assert_eq!(lit.to_formatted_string(), "+262142-12-31 23:59:59.999");
    }

    #[test]
    fn test_data_type() {
        let factory = BasicTypeFactory::new();
        assert_eq!(
            Literal::char_string("abc", pos()).data_type(&factory),
            DataType::Char(Some(3))
        );
        assert_eq!(
            Literal::exact_numeric(1 << 40, pos()).data_type(&factory),
            DataType::Bigint
        );
        let lit = Literal::new_temporal(
            LiteralValue::Time(time_567()),
            LiteralKind::Time,
            pos(),
            3,
            true,
        )
        .unwrap();
        assert_eq!(
            lit.data_type(&factory),
            DataType::Time {
                precision: Some(3),
                with_time_zone: true
            }
        );
    }
}
