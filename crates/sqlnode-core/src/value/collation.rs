//! Collations for character values.

use core::fmt;

use crate::config::Settings;
use crate::error::{Error, Result};

/// How strongly a collation was attached to a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Coercibility {
    /// Set by an explicit COLLATE clause.
    Explicit,
    /// Derived from a column or literal.
    Implicit,
    /// May be coerced freely.
    Coercible,
    /// Conflicting collations; no collation applies.
    None,
}

/// A named collation: `charset$locale$strength`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Collation {
    name: String,
    charset: String,
    locale: String,
    strength: String,
    coercibility: Coercibility,
}

impl Collation {
    /// Parses a collation name of the form `charset$locale$strength`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCollation`] if the name does not have three
    /// non-empty `$`-separated parts.
    pub fn parse(name: &str, coercibility: Coercibility) -> Result<Self> {
        let parts: Vec<&str> = name.split('$').collect();
        match parts.as_slice() {
            [charset, locale, strength]
                if !charset.is_empty() && !locale.is_empty() && !strength.is_empty() =>
            {
                Ok(Self {
                    name: name.to_string(),
                    charset: charset.to_uppercase(),
                    locale: (*locale).to_string(),
                    strength: strength.to_lowercase(),
                    coercibility,
                })
            }
            _ => Err(Error::InvalidCollation(name.to_string())),
        }
    }

    /// The implicit collation derived from the active [`Settings`].
    ///
    /// A malformed configured collation falls back to the built-in default.
    #[must_use]
    pub fn implicit_default() -> Self {
        Self::implicit_from(Settings::global())
    }

    /// The implicit collation derived from the given settings.
    #[must_use]
    pub fn implicit_from(settings: &Settings) -> Self {
        Self::parse(&settings.default_collation, Coercibility::Implicit).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "Ignoring configured collation");
            Self {
                name: String::from("ISO-8859-1$en_US$primary"),
                charset: String::from("ISO-8859-1"),
                locale: String::from("en_US"),
                strength: String::from("primary"),
                coercibility: Coercibility::Implicit,
            }
        })
    }

    /// Full collation name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Character set name, upper case.
    #[must_use]
    pub fn charset(&self) -> &str {
        &self.charset
    }

    /// Locale tag.
    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Comparison strength, lower case.
    #[must_use]
    pub fn strength(&self) -> &str {
        &self.strength
    }

    /// Coercibility tag.
    #[must_use]
    pub const fn coercibility(&self) -> Coercibility {
        self.coercibility
    }
}

impl fmt::Display for Collation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "COLLATE \"{}\"", self.name)
    }
}
