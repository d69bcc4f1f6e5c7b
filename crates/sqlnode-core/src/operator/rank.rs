//! Rank window functions: `RANK`, `DENSE_RANK`, `ROW_NUMBER`,
//! `PERCENT_RANK` and `CUME_DIST`.

use std::sync::Arc;

use super::type_rules::{OperandTypeChecker, OperandTypes, ReturnTypeInference};
use super::{FunctionCategory, SqlOperator, Syntax, FUNCTION_PRECEDENCE};
use crate::kind::SqlKind;

/// A rank function.
///
/// Rank functions take no operands and are only valid over a window. They
/// number rows by position in the window's ordering, so a ROWS or RANGE frame
/// is never allowed, whatever the other settings.
#[derive(Debug, Clone)]
pub struct RankFunction {
    kind: SqlKind,
    return_type: Arc<dyn ReturnTypeInference>,
    requires_order: bool,
}

impl RankFunction {
    /// Creates a rank function of `kind`, named after the kind.
    #[must_use]
    pub fn new(
        kind: SqlKind,
        return_type: Arc<dyn ReturnTypeInference>,
        requires_order: bool,
    ) -> Self {
        Self {
            kind,
            return_type,
            requires_order,
        }
    }
}

impl SqlOperator for RankFunction {
    fn name(&self) -> &str {
        self.kind.as_str()
    }

    fn kind(&self) -> SqlKind {
        self.kind
    }

    fn syntax(&self) -> Syntax {
        Syntax::Function
    }

    fn left_prec(&self) -> u32 {
        FUNCTION_PRECEDENCE
    }

    fn return_type_inference(&self) -> Option<&dyn ReturnTypeInference> {
        Some(self.return_type.as_ref())
    }

    fn operand_type_checker(&self) -> Option<&dyn OperandTypeChecker> {
        Some(&OperandTypes::Niladic)
    }

    fn function_category(&self) -> Option<FunctionCategory> {
        Some(FunctionCategory::Numeric)
    }

    fn is_aggregator(&self) -> bool {
        true
    }

    fn requires_order(&self) -> bool {
        self.requires_order
    }

    fn allows_framing(&self) -> bool {
        false
    }
}
