#![allow(dead_code)]

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use sqlnode_core::dialect::{Dialect, GenericDialect};
use sqlnode_core::operator::{FunctionCategory, OperatorDescriptor, StdOperatorTable};
use sqlnode_core::{Call, Literal, Node, ParserPos};

/// Routes crate logs to the test harness output.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

pub fn generic() -> Arc<dyn Dialect> {
    Arc::new(GenericDialect::new())
}

pub fn render(node: impl Into<Node>) -> String {
    node.into().to_sql(generic())
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_else(|| panic!("bad date {y}-{m}-{d}"))
}

pub fn time(h: u32, m: u32, s: u32, milli: u32) -> NaiveTime {
    NaiveTime::from_hms_milli_opt(h, m, s, milli)
        .unwrap_or_else(|| panic!("bad time {h}:{m}:{s}.{milli}"))
}

pub fn timestamp(date: NaiveDate, time: NaiveTime) -> NaiveDateTime {
    date.and_time(time)
}

pub fn int(n: i64) -> Node {
    Literal::exact_numeric(n, ParserPos::ZERO).into()
}

pub fn string(s: &str) -> Node {
    Literal::char_string(s, ParserPos::ZERO).into()
}

/// A call to a user-defined function `name(args)`.
pub fn function(name: &str, category: FunctionCategory, args: Vec<Node>, pos: ParserPos) -> Call {
    Call::new(
        Arc::new(OperatorDescriptor::function(name, category)),
        args,
        pos,
    )
}

/// `CALL name(args)`.
pub fn procedure_call(name: &str, args: Vec<Node>, pos: ParserPos) -> Call {
    let invocation = function(name, FunctionCategory::UserDefinedProcedure, args, pos);
    Call::new(StdOperatorTable::procedure_call(), vec![invocation.into()], pos)
}
