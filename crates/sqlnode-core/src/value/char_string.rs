//! Character string values with an optional character set.

use core::fmt;

/// A character string plus the character set it was written in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CharString {
    value: String,
    charset: Option<String>,
}

impl CharString {
    /// Creates a string with no explicit character set.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            charset: None,
        }
    }

    /// Creates a string tagged with a character set, e.g. `_UTF8'text'`.
    #[must_use]
    pub fn with_charset(value: impl Into<String>, charset: &str) -> Self {
        Self {
            value: value.into(),
            charset: Some(charset.to_uppercase()),
        }
    }

    /// The string content.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The character set name, upper case.
    #[must_use]
    pub fn charset(&self) -> Option<&str> {
        self.charset.as_deref()
    }

    /// Returns a copy with `suffix` appended, keeping this string's charset.
    #[must_use]
    pub fn append(&self, suffix: &str) -> Self {
        let mut value = String::with_capacity(self.value.len() + suffix.len());
        value.push_str(&self.value);
        value.push_str(suffix);
        Self {
            value,
            charset: self.charset.clone(),
        }
    }

    /// SQL form: `'it''s'`, prefixed with `_CHARSET` when a charset is set.
    #[must_use]
    pub fn to_sql(&self) -> String {
        let escaped = self.value.replace('\'', "''");
        match &self.charset {
            Some(charset) => format!("_{charset}'{escaped}'"),
            None => format!("'{escaped}'"),
        }
    }
}

impl fmt::Display for CharString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sql())
    }
}
