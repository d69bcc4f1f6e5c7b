//! Dialect factory recognizing SQLite connections.

use std::sync::Arc;

use sqlnode_core::dialect::{ConnectionMetadata, DefaultDialectFactory, Dialect, DialectFactory};
use sqlnode_core::Result;

use crate::SqliteDialect;

/// Creates a [`SqliteDialect`] for SQLite connections and defers every other
/// product to an inner factory.
#[derive(Debug, Default, Clone, Copy)]
pub struct SqliteDialectFactory<F = DefaultDialectFactory> {
    inner: F,
}

impl SqliteDialectFactory {
    /// Creates a factory falling back to [`DefaultDialectFactory`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            inner: DefaultDialectFactory::new(),
        }
    }
}

impl<F: DialectFactory> SqliteDialectFactory<F> {
    /// Creates a factory falling back to `inner`.
    #[must_use]
    pub const fn with_fallback(inner: F) -> Self {
        Self { inner }
    }
}

impl<F: DialectFactory> DialectFactory for SqliteDialectFactory<F> {
    fn create(&self, metadata: &dyn ConnectionMetadata) -> Result<Arc<dyn Dialect>> {
        let name = metadata.product_name()?;
        if !name.trim().eq_ignore_ascii_case("sqlite") {
            return self.inner.create(metadata);
        }
        let mut dialect = SqliteDialect::new();
        match metadata.product_version() {
            Ok(Some(version)) => dialect = dialect.with_version(version),
            Ok(None) => {}
            Err(err) => tracing::warn!(error = %err, "Ignoring SQLite version"),
        }
        tracing::debug!(
            product = %name,
            version = dialect.version().unwrap_or("unknown"),
            "Resolved dialect"
        );
        Ok(Arc::new(dialect))
    }
}
