//! Resolving dialects from connection metadata and rendering with them.

mod common;

use std::sync::{Arc, Mutex};
use std::thread;

use common::{date, init_tracing, time, timestamp};
use pretty_assertions::assert_eq;
use sqlnode_core::dialect::{
    ConnectionMetadata, DefaultDialectFactory, Dialect, DialectFactory, MetadataSnapshot,
};
use sqlnode_core::{Error, Identifier, Literal, Node, ParserPos, Result};

/// Metadata backed by a resource that can be released after use.
struct PooledMetadata {
    connection: Mutex<Option<String>>,
}

impl PooledMetadata {
    fn open(product: &str) -> Self {
        Self {
            connection: Mutex::new(Some(product.to_string())),
        }
    }

    fn release(&self) {
        self.connection.lock().unwrap().take();
    }
}

impl ConnectionMetadata for PooledMetadata {
    fn product_name(&self) -> Result<String> {
        self.connection
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| Error::Metadata(String::from("connection released")))
    }
}

fn sample_nodes() -> Vec<Node> {
    vec![
        Literal::date(date(1969, 7, 21), ParserPos::ZERO).into(),
        Literal::time(time(14, 33, 44, 567), 3, ParserPos::ZERO)
            .unwrap()
            .into(),
        Literal::timestamp(
            timestamp(date(1969, 7, 21), time(2, 56, 15, 0)),
            0,
            ParserPos::ZERO,
        )
        .unwrap()
        .into(),
        Identifier::simple("order", ParserPos::ZERO).into(),
    ]
}

fn render_all(dialect: &Arc<dyn Dialect>) -> Vec<String> {
    sample_nodes()
        .iter()
        .map(|node| node.to_sql(Arc::clone(dialect)))
        .collect()
}

#[test]
fn same_product_formats_identically() {
    init_tracing();
    let factory = DefaultDialectFactory::new();
    for (a, b) in [
        ("PostgreSQL", "postgresql"),
        ("MySQL", "MariaDB"),
        ("Oracle", "Oracle Database 19c"),
        ("Microsoft SQL Server", "microsoft sql server"),
    ] {
        let first = factory.create(&MetadataSnapshot::new(a).version("1")).unwrap();
        let second = factory.create(&MetadataSnapshot::new(b)).unwrap();
        assert_eq!(first.name(), second.name());
        assert_eq!(render_all(&first), render_all(&second));
    }
}

#[test]
fn rendering_per_product() {
    let factory = DefaultDialectFactory::new();
    let render = |product: &str| render_all(&factory.create(&MetadataSnapshot::new(product)).unwrap());
    assert_eq!(
        render("PostgreSQL"),
        vec![
            "DATE '1969-07-21'",
            "TIME '14:33:44.567'",
            "TIMESTAMP '1969-07-21 02:56:15'",
            "\"order\"",
        ]
    );
    assert_eq!(
        render("Microsoft SQL Server"),
        vec!["'1969-07-21'", "'14:33:44.567'", "'1969-07-21 02:56:15'", "[order]"]
    );
    assert_eq!(
        render("Oracle"),
        vec![
            "TO_DATE('1969-07-21', 'YYYY-MM-DD')",
            "TIME '14:33:44.567'",
            "TO_TIMESTAMP('1969-07-21 02:56:15', 'YYYY-MM-DD HH24:MI:SS.FF')",
            "\"order\"",
        ]
    );
    assert_eq!(render("MySQL")[3], "`order`");
}

#[test]
fn dialect_outlives_metadata() {
    let factory = DefaultDialectFactory::new();
    let metadata = PooledMetadata::open("DuckDB");
    let dialect = factory.create(&metadata).unwrap();
    metadata.release();
    drop(metadata);
    assert_eq!(dialect.name(), "duckdb");
    assert_eq!(render_all(&dialect)[0], "DATE '1969-07-21'");
}

#[test]
fn released_metadata_is_an_error() {
    let metadata = PooledMetadata::open("H2");
    metadata.release();
    assert!(matches!(
        DefaultDialectFactory::new().create(&metadata),
        Err(Error::Metadata(_))
    ));
}

#[test]
fn unknown_product_is_not_defaulted() {
    let err = DefaultDialectFactory::new()
        .create(&MetadataSnapshot::new("Sybase"))
        .err()
        .unwrap();
    assert_eq!(err.to_string(), "no dialect known for database product 'Sybase'");
}

#[test]
fn one_tree_many_dialects_concurrently() {
    let factory = Arc::new(DefaultDialectFactory::new());
    let tree = Arc::new(sample_nodes());
    let handles: Vec<_> = ["PostgreSQL", "MySQL", "Oracle", "Microsoft SQL Server"]
        .into_iter()
        .map(|product| {
            let factory = Arc::clone(&factory);
            let tree = Arc::clone(&tree);
            thread::spawn(move || {
                let dialect = factory.create(&MetadataSnapshot::new(product)).unwrap();
                let rendered: Vec<String> = tree
                    .iter()
                    .map(|node| node.to_sql(Arc::clone(&dialect)))
                    .collect();
                (product, rendered)
            })
        })
        .collect();
    for handle in handles {
        let (product, rendered) = handle.join().unwrap();
        let dialect = DefaultDialectFactory::new()
            .create(&MetadataSnapshot::new(product))
            .unwrap();
        assert_eq!(rendered, render_all(&dialect), "{product}");
    }
}
