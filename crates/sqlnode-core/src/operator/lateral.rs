//! The LATERAL table modifier.

use super::type_rules::{return_types, OperandTypeChecker, OperandTypes, ReturnTypeInference};
use super::{unparse_function_syntax, SqlOperator, Syntax};
use crate::kind::SqlKind;
use crate::node::Call;
use crate::writer::SqlWriter;

/// `LATERAL`: lets a FROM item refer to columns of the items before it.
///
/// Over a single table function invocation it is written as a bare keyword,
/// `LATERAL TABLE(ramp(3))`; over anything else as a function,
/// `LATERAL(SELECT ...)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LateralOperator {
    kind: SqlKind,
}

impl LateralOperator {
    /// Precedence of `LATERAL`.
    pub const PRECEDENCE: u32 = 200;

    /// Creates the operator with kind [`SqlKind::Lateral`].
    #[must_use]
    pub const fn new() -> Self {
        Self::with_kind(SqlKind::Lateral)
    }

    /// Creates the operator with another kind.
    #[must_use]
    pub const fn with_kind(kind: SqlKind) -> Self {
        Self { kind }
    }
}

impl Default for LateralOperator {
    fn default() -> Self {
        Self::new()
    }
}

impl SqlOperator for LateralOperator {
    fn name(&self) -> &str {
        "LATERAL"
    }

    fn kind(&self) -> SqlKind {
        self.kind
    }

    fn syntax(&self) -> Syntax {
        Syntax::Special
    }

    fn left_prec(&self) -> u32 {
        Self::PRECEDENCE
    }

    fn return_type_inference(&self) -> Option<&dyn ReturnTypeInference> {
        Some(&return_types::ARG0)
    }

    fn operand_type_checker(&self) -> Option<&dyn OperandTypeChecker> {
        Some(&OperandTypes::Variadic)
    }

    fn unparse(&self, writer: &mut dyn SqlWriter, call: &Call, _left_prec: u32, _right_prec: u32) {
        match call.operands() {
            [operand] if operand.kind() == SqlKind::CollectionTable => {
                writer.keyword(self.name());
                operand.unparse(writer, 0, 0);
            }
            _ => unparse_function_syntax(Syntax::Function, self.name(), writer, call),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::dialect::GenericDialect;
    use crate::literal::Literal;
    use crate::node::{Identifier, Node, Select};
    use crate::operator::{FunctionCategory, OperatorDescriptor, StdOperatorTable};
    use crate::position::ParserPos;

    fn render(node: Node) -> String {
        node.to_sql(Arc::new(GenericDialect::new()))
    }

    fn ramp() -> Node {
        let f = Arc::new(OperatorDescriptor::function(
            "ramp",
            FunctionCategory::UserDefinedTableFunction,
        ));
        Call::new(f, vec![Literal::exact_numeric(3, ParserPos::ZERO).into()], ParserPos::ZERO).into()
    }

    #[test]
    fn test_lateral_table_has_no_parens() {
        let table = Call::new(StdOperatorTable::collection_table(), vec![ramp()], ParserPos::ZERO);
        let lateral = Call::new(StdOperatorTable::lateral(), vec![table.into()], ParserPos::ZERO);
        assert_eq!(render(lateral.into()), "LATERAL TABLE(ramp(3))");
    }

    #[test]
    fn test_lateral_subquery_uses_function_syntax() {
        let select = Select::new(
            vec![Identifier::simple("a", ParserPos::ZERO).into()],
            Some(Identifier::simple("t", ParserPos::ZERO).into()),
            ParserPos::ZERO,
        );
        let lateral = Call::new(StdOperatorTable::lateral(), vec![select.into()], ParserPos::ZERO);
        assert_eq!(render(lateral.into()), "LATERAL(SELECT \"a\" FROM \"t\")");
    }

    #[test]
    fn test_lateral_over_plain_call_uses_function_syntax() {
        let lateral = Call::new(StdOperatorTable::lateral(), vec![ramp()], ParserPos::ZERO);
        assert_eq!(render(lateral.into()), "LATERAL(ramp(3))");
    }

    #[test]
    fn test_lateral_accepts_any_arity() {
        let op = LateralOperator::new();
        assert!(op.validate_operand_count(0).is_ok());
        assert!(op.validate_operand_count(3).is_ok());
        assert_eq!(op.left_prec(), 200);
    }
}
