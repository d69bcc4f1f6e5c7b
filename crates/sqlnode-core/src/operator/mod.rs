//! Operator descriptors.
//!
//! An operator describes how a [`Call`] is typed and written: its name, kind,
//! precedence, syntax and type rules. Operators are created once, shared as
//! `Arc<dyn SqlOperator>` between every call that uses them, and never
//! change.

mod binding;
mod lateral;
mod procedure_call;
mod rank;
mod special;
mod table;
pub mod type_rules;

pub use binding::{CallBinding, ExplicitOperatorBinding, OperatorBinding};
pub use lateral::LateralOperator;
pub use procedure_call::{rewrite_call, ProcedureCallOperator};
pub use rank::RankFunction;
pub use special::{CollectionTableOperator, RowOperator, ValuesOperator};
pub use table::{ListOperatorTable, OperatorTable, StdOperatorTable};

use core::fmt;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::kind::SqlKind;
use crate::node::{Call, Node};
use crate::types::DataType;
use crate::validate::ValidationContext;
use crate::writer::{FrameKind, SqlWriter};
use type_rules::{OperandCountRange, OperandTypeChecker, ReturnTypeInference};

/// Precedence of function calls.
pub const FUNCTION_PRECEDENCE: u32 = 100;

/// How a call to an operator is spelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Syntax {
    /// `f(a, b)`.
    Function,
    /// `CURRENT_DATE`: a function written without parentheses when it has no
    /// operands.
    FunctionId,
    /// `op a`.
    Prefix,
    /// `a op`.
    Postfix,
    /// `a op b`.
    Binary,
    /// Operator-specific spelling.
    Special,
}

/// Category of a function, used by function lookup and documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionCategory {
    /// Numeric functions, including rank functions.
    Numeric,
    /// String functions.
    String,
    /// Date and time functions.
    TimeDate,
    /// System functions.
    System,
    /// User-defined scalar function.
    UserDefinedFunction,
    /// User-defined procedure.
    UserDefinedProcedure,
    /// User-defined table function.
    UserDefinedTableFunction,
}

/// An operator: the metadata that types and writes a [`Call`].
pub trait SqlOperator: fmt::Debug + Send + Sync {
    /// Name, as written in SQL.
    fn name(&self) -> &str;

    /// Semantic kind.
    fn kind(&self) -> SqlKind;

    /// Spelling of calls.
    fn syntax(&self) -> Syntax;

    /// Binding strength towards the left operand.
    fn left_prec(&self) -> u32;

    /// Binding strength towards the right operand.
    fn right_prec(&self) -> u32 {
        self.left_prec()
    }

    /// Rule deriving the result type, if the operator has one.
    fn return_type_inference(&self) -> Option<&dyn ReturnTypeInference> {
        None
    }

    /// Rule checking operand types, if the operator has one.
    fn operand_type_checker(&self) -> Option<&dyn OperandTypeChecker> {
        None
    }

    /// Accepted operand counts.
    fn operand_count_range(&self) -> OperandCountRange {
        self.operand_type_checker()
            .map_or(OperandCountRange::VARIADIC, |checker| {
                checker.operand_count_range()
            })
    }

    /// Function category, for functions.
    fn function_category(&self) -> Option<FunctionCategory> {
        None
    }

    /// Whether this is an aggregate function.
    fn is_aggregator(&self) -> bool {
        false
    }

    /// Whether a window using this function must have ORDER BY.
    fn requires_order(&self) -> bool {
        false
    }

    /// Whether a window using this function may have a ROWS/RANGE frame.
    fn allows_framing(&self) -> bool {
        true
    }

    /// Writes `call`. The default spells it according to [`Self::syntax`].
    fn unparse(&self, writer: &mut dyn SqlWriter, call: &Call, left_prec: u32, right_prec: u32) {
        match self.syntax() {
            Syntax::Function | Syntax::FunctionId | Syntax::Special => {
                unparse_function_syntax(self.syntax(), self.name(), writer, call);
            }
            Syntax::Prefix => {
                writer.keyword(self.name());
                if let Some(operand) = call.operand(0) {
                    operand.unparse(writer, self.left_prec(), self.right_prec());
                }
            }
            Syntax::Postfix => {
                if let Some(operand) = call.operand(0) {
                    operand.unparse(writer, left_prec, self.left_prec());
                }
                writer.keyword(self.name());
            }
            Syntax::Binary => {
                if let Some(left) = call.operand(0) {
                    left.unparse(writer, left_prec, self.left_prec());
                }
                writer.operator_name(self.name());
                if let Some(right) = call.operand(1) {
                    right.unparse(writer, self.right_prec(), right_prec);
                }
            }
        }
    }

    /// Rewrites `call` during validation. The default returns it unchanged.
    ///
    /// # Errors
    ///
    /// Operators that rewrite report malformed calls as errors.
    fn rewrite_call(&self, _ctx: &dyn ValidationContext, call: &Call) -> Result<Node> {
        Ok(Node::Call(call.clone()))
    }

    /// Checks an operand count against [`Self::operand_count_range`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOperandCount`] if the count is out of range.
    fn validate_operand_count(&self, count: usize) -> Result<()> {
        let range = self.operand_count_range();
        if range.contains(count) {
            Ok(())
        } else {
            Err(Error::InvalidOperandCount {
                operator: self.name().to_string(),
                expected: range.to_string(),
                actual: count,
            })
        }
    }

    /// Derives the result type of a call bound by `binding`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOperandCount`] for a bad operand count and
    /// [`Error::ReturnTypeInference`] if there is no rule or it cannot
    /// decide.
    fn infer_return_type(&self, binding: &dyn OperatorBinding) -> Result<DataType> {
        self.validate_operand_count(binding.operand_count())?;
        self.return_type_inference()
            .and_then(|rule| rule.infer_return_type(binding))
            .ok_or_else(|| Error::ReturnTypeInference(self.name().to_string()))
    }

    /// Checks operand count and types of a call bound by `binding`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOperandCount`] for a bad operand count.
    fn check_operand_types(&self, binding: &dyn OperatorBinding) -> Result<bool> {
        self.validate_operand_count(binding.operand_count())?;
        Ok(self
            .operand_type_checker()
            .map_or(true, |checker| checker.check_operand_types(binding)))
    }
}

/// Writes `name(a, b, ...)`.
///
/// With [`Syntax::FunctionId`] and no operands only the name is written.
pub fn unparse_function_syntax(
    syntax: Syntax,
    name: &str,
    writer: &mut dyn SqlWriter,
    call: &Call,
) {
    writer.operator_name(name);
    if syntax == Syntax::FunctionId && call.operand_count() == 0 {
        return;
    }
    let frame = writer.start_list(FrameKind::FunctionCall, "(", ")");
    for (i, operand) in call.operands().iter().enumerate() {
        if i > 0 {
            writer.sep(",");
        }
        operand.unparse(writer, 0, 0);
    }
    writer.end_list(frame);
}

/// A data-driven operator, used for functions and simple operators that
/// need no custom behavior.
#[derive(Debug, Clone)]
pub struct OperatorDescriptor {
    name: String,
    kind: SqlKind,
    syntax: Syntax,
    left_prec: u32,
    right_prec: u32,
    return_type: Option<Arc<dyn ReturnTypeInference>>,
    operand_types: Option<Arc<dyn OperandTypeChecker>>,
    category: Option<FunctionCategory>,
}

impl OperatorDescriptor {
    /// Creates a function `name(...)`.
    #[must_use]
    pub fn function(name: impl Into<String>, category: FunctionCategory) -> Self {
        Self {
            name: name.into(),
            kind: SqlKind::OtherFunction,
            syntax: Syntax::Function,
            left_prec: FUNCTION_PRECEDENCE,
            right_prec: FUNCTION_PRECEDENCE,
            return_type: None,
            operand_types: None,
            category: Some(category),
        }
    }

    /// Creates a prefix operator.
    #[must_use]
    pub fn prefix(name: impl Into<String>, kind: SqlKind, prec: u32) -> Self {
        Self {
            name: name.into(),
            kind,
            syntax: Syntax::Prefix,
            left_prec: prec,
            right_prec: prec,
            return_type: None,
            operand_types: None,
            category: None,
        }
    }

    /// Creates a postfix operator.
    #[must_use]
    pub fn postfix(name: impl Into<String>, kind: SqlKind, prec: u32) -> Self {
        Self {
            syntax: Syntax::Postfix,
            ..Self::prefix(name, kind, prec)
        }
    }

    /// Creates a binary operator. A left-associative operator binds one
    /// step tighter to its right, so `a - b - c` keeps its grouping.
    #[must_use]
    pub fn binary(name: impl Into<String>, kind: SqlKind, prec: u32, left_assoc: bool) -> Self {
        Self {
            syntax: Syntax::Binary,
            left_prec: if left_assoc { prec } else { prec + 1 },
            right_prec: if left_assoc { prec + 1 } else { prec },
            ..Self::prefix(name, kind, prec)
        }
    }

    /// Sets the kind.
    #[must_use]
    pub fn with_kind(mut self, kind: SqlKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the return type rule.
    #[must_use]
    pub fn with_return_type(mut self, rule: Arc<dyn ReturnTypeInference>) -> Self {
        self.return_type = Some(rule);
        self
    }

    /// Sets the operand type rule.
    #[must_use]
    pub fn with_operand_types(mut self, rule: Arc<dyn OperandTypeChecker>) -> Self {
        self.operand_types = Some(rule);
        self
    }
}

impl SqlOperator for OperatorDescriptor {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> SqlKind {
        self.kind
    }

    fn syntax(&self) -> Syntax {
        self.syntax
    }

    fn left_prec(&self) -> u32 {
        self.left_prec
    }

    fn right_prec(&self) -> u32 {
        self.right_prec
    }

    fn return_type_inference(&self) -> Option<&dyn ReturnTypeInference> {
        self.return_type.as_deref()
    }

    fn operand_type_checker(&self) -> Option<&dyn OperandTypeChecker> {
        self.operand_types.as_deref()
    }

    fn function_category(&self) -> Option<FunctionCategory> {
        self.category
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::GenericDialect;
    use crate::literal::Literal;
    use crate::node::Identifier;
    use crate::position::ParserPos;
    use type_rules::{return_types, OperandTypes};

    fn render(call: Call) -> String {
        Node::from(call).to_sql(Arc::new(GenericDialect::new()))
    }

    #[test]
    fn test_function_syntax() {
        let f = Arc::new(OperatorDescriptor::function("f", FunctionCategory::UserDefinedFunction));
        let call = Call::new(
            f,
            vec![
                Identifier::simple("x", ParserPos::ZERO).into(),
                Literal::char_string("y", ParserPos::ZERO).into(),
            ],
            ParserPos::ZERO,
        );
        assert_eq!(render(call), "f(\"x\", 'y')");
    }

    #[test]
    fn test_function_id_syntax() {
        let mut op = OperatorDescriptor::function("CURRENT_DATE", FunctionCategory::TimeDate);
        op.syntax = Syntax::FunctionId;
        assert_eq!(render(Call::new(Arc::new(op), vec![], ParserPos::ZERO)), "CURRENT_DATE");
    }

    #[test]
    fn test_prefix_and_postfix() {
        let not = Arc::new(OperatorDescriptor::prefix("NOT", SqlKind::Other, 26));
        let is_null = Arc::new(OperatorDescriptor::postfix("IS NULL", SqlKind::Other, 28));
        let x: Node = Identifier::simple("x", ParserPos::ZERO).into();
        let inner = Call::new(is_null, vec![x], ParserPos::ZERO);
        assert_eq!(
            render(Call::new(not, vec![inner.into()], ParserPos::ZERO)),
            "NOT \"x\" IS NULL"
        );
    }

    #[test]
    fn test_infer_return_type_checks_count() {
        let op = OperatorDescriptor::function("f", FunctionCategory::Numeric)
            .with_return_type(Arc::new(return_types::RANK))
            .with_operand_types(Arc::new(OperandTypes::Niladic));
        let factory = crate::types::BasicTypeFactory::new();
        let ok = ExplicitOperatorBinding::new(&op, &factory, vec![]);
        assert_eq!(op.infer_return_type(&ok), Ok(DataType::Bigint));
        let bad = ExplicitOperatorBinding::new(&op, &factory, vec![DataType::Integer]);
        assert_eq!(
            op.infer_return_type(&bad),
            Err(Error::InvalidOperandCount {
                operator: String::from("f"),
                expected: String::from("0"),
                actual: 1
            })
        );
    }

    #[test]
    fn test_infer_return_type_without_rule() {
        let op = OperatorDescriptor::function("g", FunctionCategory::System);
        let factory = crate::types::BasicTypeFactory::new();
        let binding = ExplicitOperatorBinding::new(&op, &factory, vec![]);
        assert_eq!(
            op.infer_return_type(&binding),
            Err(Error::ReturnTypeInference(String::from("g")))
        );
        assert_eq!(op.check_operand_types(&binding), Ok(true));
    }
}
