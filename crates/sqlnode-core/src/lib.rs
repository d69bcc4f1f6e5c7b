//! # sqlnode-core
//!
//! Immutable SQL syntax-tree nodes that render correctly for many databases.
//!
//! This crate provides:
//! - Typed literal nodes: character and binary strings, dates, times and
//!   timestamps with fractional-second precision
//! - Operator descriptors carrying precedence and type rules, including the
//!   rank window functions, `LATERAL` and `CALL`
//! - A dialect strategy, resolved from connection metadata, that the writer
//!   carries through each render pass
//!
//! ## Dialect-independent trees
//!
//! Nodes never hold a dialect. The same tree renders differently depending
//! on the dialect handed to the writer:
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use chrono::NaiveDate;
//! use sqlnode_core::dialect::{DatabaseProduct, GenericDialect, ProductDialect};
//! use sqlnode_core::{Literal, Node, ParserPos};
//!
//! let date = NaiveDate::from_ymd_opt(1969, 7, 21).unwrap();
//! let node = Node::from(Literal::date(date, ParserPos::ZERO));
//!
//! assert_eq!(node.to_sql(Arc::new(GenericDialect::new())), "DATE '1969-07-21'");
//! assert_eq!(
//!     node.to_sql(Arc::new(ProductDialect::new(DatabaseProduct::Mssql))),
//!     "'1969-07-21'"
//! );
//! ```
//!
//! ## Rewriting CALL
//!
//! Validation turns a procedure call into a query over a one-row table:
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use sqlnode_core::dialect::GenericDialect;
//! use sqlnode_core::operator::{FunctionCategory, OperatorDescriptor, StdOperatorTable};
//! use sqlnode_core::{Call, Literal, Node, ParserPos, ValidationSession};
//!
//! let proc = Arc::new(OperatorDescriptor::function("f", FunctionCategory::UserDefinedProcedure));
//! let invocation = Call::new(proc, vec![Literal::char_string("x", ParserPos::ZERO).into()], ParserPos::ZERO);
//! let call = Node::from(Call::new(
//!     StdOperatorTable::procedure_call(),
//!     vec![invocation.into()],
//!     ParserPos::ZERO,
//! ));
//!
//! let query = ValidationSession::default().rewrite(&call).unwrap();
//! assert_eq!(
//!     query.to_sql(Arc::new(GenericDialect::new())),
//!     "SELECT f('x') FROM (VALUES (0))"
//! );
//! ```

pub mod config;
pub mod dialect;
pub mod error;
pub mod kind;
pub mod literal;
pub mod node;
pub mod operator;
pub mod position;
pub mod types;
pub mod validate;
pub mod value;
pub mod writer;

pub use config::Settings;
pub use dialect::{Dialect, DialectFactory};
pub use error::{Error, Result};
pub use kind::SqlKind;
pub use literal::{Literal, LiteralKind, LiteralValue};
pub use node::{Call, Identifier, Node, Select};
pub use operator::{SqlOperator, StdOperatorTable};
pub use position::ParserPos;
pub use types::{BasicTypeFactory, DataType, TypeFactory};
pub use validate::{ValidationContext, ValidationSession};
pub use writer::{SqlStringWriter, SqlWriter};
