//! Resolving a dialect from connection metadata.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::product::{DatabaseProduct, ProductDialect};
use super::Dialect;
use crate::error::{Error, Result};

/// Descriptors a connection reports about its database.
///
/// Reads may fail, since they typically go through a live connection.
pub trait ConnectionMetadata {
    /// Database product name, e.g. `PostgreSQL`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Metadata`] if the name cannot be read.
    fn product_name(&self) -> Result<String>;

    /// Database product version.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Metadata`] if the version cannot be read.
    fn product_version(&self) -> Result<Option<String>> {
        Ok(None)
    }

    /// Identifier quote string; a blank string means quoting is unsupported.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Metadata`] if the quote string cannot be read.
    fn identifier_quote(&self) -> Result<Option<String>> {
        Ok(None)
    }
}

/// Owned copy of connection metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataSnapshot {
    /// Database product name.
    pub product_name: String,
    /// Database product version.
    pub product_version: Option<String>,
    /// Identifier quote string.
    pub identifier_quote: Option<String>,
}

impl MetadataSnapshot {
    /// Creates a snapshot with only a product name.
    #[must_use]
    pub fn new(product_name: impl Into<String>) -> Self {
        Self {
            product_name: product_name.into(),
            product_version: None,
            identifier_quote: None,
        }
    }

    /// Sets the product version.
    #[must_use]
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.product_version = Some(version.into());
        self
    }

    /// Sets the identifier quote string.
    #[must_use]
    pub fn identifier_quote(mut self, quote: impl Into<String>) -> Self {
        self.identifier_quote = Some(quote.into());
        self
    }
}

impl ConnectionMetadata for MetadataSnapshot {
    fn product_name(&self) -> Result<String> {
        Ok(self.product_name.clone())
    }

    fn product_version(&self) -> Result<Option<String>> {
        Ok(self.product_version.clone())
    }

    fn identifier_quote(&self) -> Result<Option<String>> {
        Ok(self.identifier_quote.clone())
    }
}

/// Creates dialects from connection metadata.
///
/// Implementations must not keep the metadata, or anything reachable from it,
/// after `create` returns; the returned dialect is an owned value.
pub trait DialectFactory: Send + Sync {
    /// Creates the dialect described by `metadata`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownDialect`] if the product is not recognized, or
    /// [`Error::Metadata`] if the product name cannot be read.
    fn create(&self, metadata: &dyn ConnectionMetadata) -> Result<Arc<dyn Dialect>>;
}

/// Factory for the built-in [`DatabaseProduct`] dialects.
///
/// Unknown products are an error rather than a silent fallback, since SQL
/// rendered for the wrong database may still parse but mean something else.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultDialectFactory;

impl DefaultDialectFactory {
    /// Creates a new factory.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Builds the product dialect, reading version and quoting from metadata.
    ///
    /// Failures reading the optional descriptors fall back to the product's
    /// defaults.
    #[must_use]
    pub fn product_dialect(
        product: DatabaseProduct,
        metadata: &dyn ConnectionMetadata,
    ) -> ProductDialect {
        let mut dialect = ProductDialect::new(product);
        match metadata.product_version() {
            Ok(Some(version)) => dialect = dialect.with_version(version),
            Ok(None) => {}
            Err(err) => tracing::warn!(%product, error = %err, "Ignoring product version"),
        }
        match metadata.identifier_quote() {
            Ok(Some(quote)) if !quote.trim().is_empty() => {
                dialect = dialect.with_identifier_quote(quote.trim());
            }
            Ok(_) => {}
            Err(err) => tracing::warn!(%product, error = %err, "Ignoring identifier quote"),
        }
        dialect
    }
}

impl DialectFactory for DefaultDialectFactory {
    fn create(&self, metadata: &dyn ConnectionMetadata) -> Result<Arc<dyn Dialect>> {
        let name = metadata.product_name()?;
        let Some(product) = DatabaseProduct::from_product_name(&name) else {
            tracing::warn!(product = %name, "No dialect for database product");
            return Err(Error::UnknownDialect { product: name });
        };
        let dialect = Self::product_dialect(product, metadata);
        tracing::debug!(
            product = %name,
            dialect = dialect.name(),
            version = dialect.version().unwrap_or("unknown"),
            "Resolved dialect"
        );
        Ok(Arc::new(dialect))
    }
}
