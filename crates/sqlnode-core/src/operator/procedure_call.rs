//! The `CALL` statement.

use super::{SqlOperator, Syntax};
use crate::error::{Error, Result};
use crate::kind::SqlKind;
use crate::literal::Literal;
use crate::node::{Call, Node, Select};
use crate::position::ParserPos;
use crate::validate::ValidationContext;

/// `CALL proc(args)`.
///
/// Validation rewrites the statement into a query over a one-row table, see
/// [`rewrite_call`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcedureCallOperator;

impl SqlOperator for ProcedureCallOperator {
    fn name(&self) -> &str {
        "CALL"
    }

    fn kind(&self) -> SqlKind {
        SqlKind::ProcedureCall
    }

    fn syntax(&self) -> Syntax {
        Syntax::Prefix
    }

    fn left_prec(&self) -> u32 {
        0
    }

    fn rewrite_call(&self, ctx: &dyn ValidationContext, call: &Call) -> Result<Node> {
        rewrite_call(ctx, call)
    }
}

/// Rewrites `CALL f(x)` into `SELECT f(x) FROM (VALUES (0))`.
///
/// `VALUES` and `ROW` are taken from the context's operator table. The input
/// is not modified; the result is a new tree whose nodes all have
/// [`ParserPos::ZERO`], apart from the procedure invocation, which is shared
/// with the input.
///
/// # Errors
///
/// Returns [`Error::UnexpectedKind`] if `call` is not a `CALL`,
/// [`Error::InvalidOperandCount`] unless it has exactly one operand, and
/// [`Error::MissingOperator`] if the table lacks `VALUES` or `ROW`.
pub fn rewrite_call(ctx: &dyn ValidationContext, call: &Call) -> Result<Node> {
    if call.kind() != SqlKind::ProcedureCall {
        return Err(Error::UnexpectedKind {
            expected: SqlKind::ProcedureCall,
            found: call.kind(),
        });
    }
    let [procedure] = call.operands() else {
        return Err(Error::InvalidOperandCount {
            operator: call.operator().name().to_string(),
            expected: String::from("1"),
            actual: call.operand_count(),
        });
    };
    let table = ctx.operator_table();
    let values = table.lookup("VALUES").ok_or(Error::MissingOperator("VALUES"))?;
    let row = table.lookup("ROW").ok_or(Error::MissingOperator("ROW"))?;

    let zero = Literal::exact_numeric(0, ParserPos::ZERO);
    let row = Call::new(row, vec![zero.into()], ParserPos::ZERO);
    let source = Call::new(values, vec![row.into()], ParserPos::ZERO);
    tracing::debug!(
        procedure = procedure.kind().as_str(),
        line = call.position().line,
        "Rewriting CALL as SELECT"
    );
    Ok(Select::new(vec![procedure.clone()], Some(source.into()), ParserPos::ZERO).into())
}
