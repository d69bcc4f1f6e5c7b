//! Process-wide defaults for character literals.
//!
//! Character literals do not store their collation; they derive it from the
//! active [`Settings`]. The global settings are read once from the environment
//! and are immutable afterwards.

use std::env;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// Environment variable overriding [`Settings::default_charset`].
pub const CHARSET_ENV: &str = "SQLNODE_DEFAULT_CHARSET";

/// Environment variable overriding [`Settings::default_collation`].
pub const COLLATION_ENV: &str = "SQLNODE_DEFAULT_COLLATION";

/// Defaults used when a literal does not carry its own character set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Character set reported by character literals written without one.
    pub default_charset: String,
    /// Default collation, as `charset$locale$strength`.
    pub default_collation: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_charset: String::from("ISO-8859-1"),
            default_collation: String::from("ISO-8859-1$en_US$primary"),
        }
    }
}

impl Settings {
    /// Builds settings from the environment, falling back to defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds settings from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            default_charset: lookup(CHARSET_ENV)
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.default_charset),
            default_collation: lookup(COLLATION_ENV)
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.default_collation),
        }
    }

    /// Returns the process-wide settings, initializing them on first use.
    pub fn global() -> &'static Self {
        static GLOBAL: OnceLock<Settings> = OnceLock::new();
        GLOBAL.get_or_init(|| {
            let settings = Self::from_env();
            tracing::debug!(
                charset = %settings.default_charset,
                collation = %settings.default_collation,
                "Loaded literal settings"
            );
            settings
        })
    }
}
