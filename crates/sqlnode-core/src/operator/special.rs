//! Table and row constructors: `VALUES`, `ROW` and `TABLE`.

use super::type_rules::{return_types, OperandTypeChecker, OperandTypes, ReturnTypeInference};
use super::{SqlOperator, Syntax};
use crate::kind::SqlKind;
use crate::node::{Call, Node};
use crate::writer::{FrameKind, SqlWriter};

/// `VALUES (1, 'a'), (2, 'b')`: a table built from row constructors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValuesOperator;

impl ValuesOperator {
    /// Precedence of `VALUES`.
    pub const PRECEDENCE: u32 = 2;
}

impl SqlOperator for ValuesOperator {
    fn name(&self) -> &str {
        "VALUES"
    }

    fn kind(&self) -> SqlKind {
        SqlKind::Values
    }

    fn syntax(&self) -> Syntax {
        Syntax::Special
    }

    fn left_prec(&self) -> u32 {
        Self::PRECEDENCE
    }

    fn operand_type_checker(&self) -> Option<&dyn OperandTypeChecker> {
        Some(&OperandTypes::Variadic)
    }

    /// Rows are written as bare parenthesized lists, without the `ROW`
    /// keyword.
    fn unparse(&self, writer: &mut dyn SqlWriter, call: &Call, _left_prec: u32, _right_prec: u32) {
        writer.keyword(self.name());
        for (i, row) in call.operands().iter().enumerate() {
            if i > 0 {
                writer.sep(",");
            }
            match row {
                Node::Call(row) if row.kind() == SqlKind::Row => {
                    let frame = writer.start_list(FrameKind::Parentheses, "(", ")");
                    for (j, field) in row.operands().iter().enumerate() {
                        if j > 0 {
                            writer.sep(",");
                        }
                        field.unparse(writer, 0, 0);
                    }
                    writer.end_list(frame);
                }
                other => other.unparse(writer, 0, 0),
            }
        }
    }
}

/// `ROW(a, b)`: a row value constructor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowOperator;

impl RowOperator {
    /// Precedence of `ROW`.
    pub const PRECEDENCE: u32 = 200;
}

impl SqlOperator for RowOperator {
    fn name(&self) -> &str {
        "ROW"
    }

    fn kind(&self) -> SqlKind {
        SqlKind::Row
    }

    fn syntax(&self) -> Syntax {
        Syntax::Function
    }

    fn left_prec(&self) -> u32 {
        Self::PRECEDENCE
    }

    fn operand_type_checker(&self) -> Option<&dyn OperandTypeChecker> {
        Some(&OperandTypes::Variadic)
    }
}

/// `TABLE(f(x))`: invokes a table function as a FROM item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollectionTableOperator;

impl CollectionTableOperator {
    /// Precedence of `TABLE`.
    pub const PRECEDENCE: u32 = 200;
}

impl SqlOperator for CollectionTableOperator {
    fn name(&self) -> &str {
        "TABLE"
    }

    fn kind(&self) -> SqlKind {
        SqlKind::CollectionTable
    }

    fn syntax(&self) -> Syntax {
        Syntax::Function
    }

    fn left_prec(&self) -> u32 {
        Self::PRECEDENCE
    }

    fn return_type_inference(&self) -> Option<&dyn ReturnTypeInference> {
        Some(&return_types::ARG0)
    }

    fn operand_type_checker(&self) -> Option<&dyn OperandTypeChecker> {
        Some(&OperandTypes::Any)
    }
}
