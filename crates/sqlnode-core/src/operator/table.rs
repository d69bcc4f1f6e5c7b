//! Operator registries.

use std::sync::{Arc, LazyLock};

use super::type_rules::return_types;
use super::{
    CollectionTableOperator, LateralOperator, ProcedureCallOperator, RankFunction, RowOperator,
    SqlOperator, ValuesOperator,
};
use crate::kind::SqlKind;

/// Looks up operators by name.
pub trait OperatorTable: Send + Sync {
    /// Returns the operator called `name`, ignoring ASCII case.
    fn lookup(&self, name: &str) -> Option<Arc<dyn SqlOperator>>;
}

static VALUES: LazyLock<Arc<dyn SqlOperator>> = LazyLock::new(|| Arc::new(ValuesOperator));
static ROW: LazyLock<Arc<dyn SqlOperator>> = LazyLock::new(|| Arc::new(RowOperator));
static COLLECTION_TABLE: LazyLock<Arc<dyn SqlOperator>> =
    LazyLock::new(|| Arc::new(CollectionTableOperator));
static LATERAL: LazyLock<Arc<dyn SqlOperator>> = LazyLock::new(|| Arc::new(LateralOperator::new()));
static PROCEDURE_CALL: LazyLock<Arc<dyn SqlOperator>> =
    LazyLock::new(|| Arc::new(ProcedureCallOperator));
static RANK: LazyLock<Arc<dyn SqlOperator>> = LazyLock::new(|| {
    Arc::new(RankFunction::new(SqlKind::Rank, Arc::new(return_types::RANK), true))
});
static DENSE_RANK: LazyLock<Arc<dyn SqlOperator>> = LazyLock::new(|| {
    Arc::new(RankFunction::new(SqlKind::DenseRank, Arc::new(return_types::RANK), true))
});
static ROW_NUMBER: LazyLock<Arc<dyn SqlOperator>> = LazyLock::new(|| {
    Arc::new(RankFunction::new(SqlKind::RowNumber, Arc::new(return_types::RANK), false))
});
static PERCENT_RANK: LazyLock<Arc<dyn SqlOperator>> = LazyLock::new(|| {
    Arc::new(RankFunction::new(
        SqlKind::PercentRank,
        Arc::new(return_types::FRACTIONAL_RANK),
        true,
    ))
});
static CUME_DIST: LazyLock<Arc<dyn SqlOperator>> = LazyLock::new(|| {
    Arc::new(RankFunction::new(
        SqlKind::CumeDist,
        Arc::new(return_types::FRACTIONAL_RANK),
        true,
    ))
});

/// The built-in operators.
///
/// Each operator is created once per process; the accessors hand out shared
/// handles to the same instance.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdOperatorTable;

impl StdOperatorTable {
    /// Creates a handle to the built-in table.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// `VALUES`.
    #[must_use]
    pub fn values() -> Arc<dyn SqlOperator> {
        Arc::clone(&VALUES)
    }

    /// `ROW`.
    #[must_use]
    pub fn row() -> Arc<dyn SqlOperator> {
        Arc::clone(&ROW)
    }

    /// `TABLE`.
    #[must_use]
    pub fn collection_table() -> Arc<dyn SqlOperator> {
        Arc::clone(&COLLECTION_TABLE)
    }

    /// `LATERAL`.
    #[must_use]
    pub fn lateral() -> Arc<dyn SqlOperator> {
        Arc::clone(&LATERAL)
    }

    /// `CALL`.
    #[must_use]
    pub fn procedure_call() -> Arc<dyn SqlOperator> {
        Arc::clone(&PROCEDURE_CALL)
    }

    /// `RANK`.
    #[must_use]
    pub fn rank() -> Arc<dyn SqlOperator> {
        Arc::clone(&RANK)
    }

    /// `DENSE_RANK`.
    #[must_use]
    pub fn dense_rank() -> Arc<dyn SqlOperator> {
        Arc::clone(&DENSE_RANK)
    }

    /// `ROW_NUMBER`; unlike the other rank functions it does not require
    /// ORDER BY.
    #[must_use]
    pub fn row_number() -> Arc<dyn SqlOperator> {
        Arc::clone(&ROW_NUMBER)
    }

    /// `PERCENT_RANK`.
    #[must_use]
    pub fn percent_rank() -> Arc<dyn SqlOperator> {
        Arc::clone(&PERCENT_RANK)
    }

    /// `CUME_DIST`.
    #[must_use]
    pub fn cume_dist() -> Arc<dyn SqlOperator> {
        Arc::clone(&CUME_DIST)
    }

    /// All built-in operators.
    #[must_use]
    pub fn operators() -> Vec<Arc<dyn SqlOperator>> {
        vec![
            Self::values(),
            Self::row(),
            Self::collection_table(),
            Self::lateral(),
            Self::procedure_call(),
            Self::rank(),
            Self::dense_rank(),
            Self::row_number(),
            Self::percent_rank(),
            Self::cume_dist(),
        ]
    }
}

impl OperatorTable for StdOperatorTable {
    fn lookup(&self, name: &str) -> Option<Arc<dyn SqlOperator>> {
        let op = match name.to_ascii_uppercase().as_str() {
            "VALUES" => &VALUES,
            "ROW" => &ROW,
            "TABLE" => &COLLECTION_TABLE,
            "LATERAL" => &LATERAL,
            "CALL" => &PROCEDURE_CALL,
            "RANK" => &RANK,
            "DENSE_RANK" => &DENSE_RANK,
            "ROW_NUMBER" => &ROW_NUMBER,
            "PERCENT_RANK" => &PERCENT_RANK,
            "CUME_DIST" => &CUME_DIST,
            _ => return None,
        };
        Some(Arc::clone(op))
    }
}

/// A table of registered operators, optionally falling back to another
/// table for names it does not define.
#[derive(Default, Clone)]
pub struct ListOperatorTable {
    operators: Vec<Arc<dyn SqlOperator>>,
    fallback: Option<Arc<dyn OperatorTable>>,
}

impl ListOperatorTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table that defers to `fallback` for unknown names.
    #[must_use]
    pub fn extending(fallback: Arc<dyn OperatorTable>) -> Self {
        Self {
            operators: Vec::new(),
            fallback: Some(fallback),
        }
    }

    /// Registers an operator. Later registrations shadow earlier ones with
    /// the same name.
    pub fn register(&mut self, operator: Arc<dyn SqlOperator>) {
        self.operators.push(operator);
    }

    /// Registers an operator, builder style.
    #[must_use]
    pub fn with(mut self, operator: Arc<dyn SqlOperator>) -> Self {
        self.register(operator);
        self
    }

    /// Number of operators registered directly in this table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.operators.len()
    }

    /// Whether no operator is registered directly in this table.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }
}

impl OperatorTable for ListOperatorTable {
    fn lookup(&self, name: &str) -> Option<Arc<dyn SqlOperator>> {
        self.operators
            .iter()
            .rev()
            .find(|op| op.name().eq_ignore_ascii_case(name))
            .map(Arc::clone)
            .or_else(|| self.fallback.as_ref().and_then(|table| table.lookup(name)))
    }
}
