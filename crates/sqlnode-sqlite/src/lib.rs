//! # sqlnode-sqlite
//!
//! SQLite dialect strategy for `sqlnode-core`.
//!
//! # How SQLite differs from other dialects
//!
//! - **[Date and time]**: SQLite has no date/time storage class and no
//!   `DATE '...'` literal syntax. Dates, times and timestamps are stored as
//!   ISO-8601 text, so temporal literals are written as plain string
//!   literals such as `'1969-07-21'`.
//! - **Identifier quoting**: SQLite uses double quotes (`"`) as
//!   the standard quoting style, though it also accepts backticks
//!   and square brackets. See [SQLite keywords].
//!
//! [Date and time]: https://www.sqlite.org/lang_datefunc.html
//! [SQLite keywords]: https://www.sqlite.org/lang_keywords.html
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use chrono::NaiveDate;
//! use sqlnode_core::dialect::{DialectFactory, MetadataSnapshot};
//! use sqlnode_core::{Literal, Node, ParserPos};
//! use sqlnode_sqlite::SqliteDialectFactory;
//!
//! let dialect = SqliteDialectFactory::new()
//!     .create(&MetadataSnapshot::new("SQLite").version("3.45.1"))
//!     .unwrap();
//! let date = NaiveDate::from_ymd_opt(1969, 7, 21).unwrap();
//! let node = Node::from(Literal::date(date, ParserPos::ZERO));
//!
//! assert_eq!(node.to_sql(dialect), "'1969-07-21'");
//! ```

mod dialect;
mod factory;

pub use dialect::SqliteDialect;
pub use factory::SqliteDialectFactory;
