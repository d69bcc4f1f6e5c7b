//! Operator bindings: an operator together with the types of its operands.

use super::SqlOperator;
use crate::node::{Call, Node};
use crate::types::{DataType, TypeFactory};

/// An operator bound to operands, as seen by type rules.
pub trait OperatorBinding {
    /// The bound operator.
    fn operator(&self) -> &dyn SqlOperator;

    /// Factory used to build result types.
    fn type_factory(&self) -> &dyn TypeFactory;

    /// Number of operands.
    fn operand_count(&self) -> usize;

    /// Type of the operand at `ordinal`, if known.
    fn operand_type(&self, ordinal: usize) -> Option<DataType>;
}

/// Binding over operand types given up front.
#[derive(Clone)]
pub struct ExplicitOperatorBinding<'a> {
    operator: &'a dyn SqlOperator,
    type_factory: &'a dyn TypeFactory,
    operand_types: Vec<DataType>,
}

impl<'a> ExplicitOperatorBinding<'a> {
    /// Creates a binding.
    #[must_use]
    pub fn new(
        operator: &'a dyn SqlOperator,
        type_factory: &'a dyn TypeFactory,
        operand_types: Vec<DataType>,
    ) -> Self {
        Self {
            operator,
            type_factory,
            operand_types,
        }
    }
}

impl OperatorBinding for ExplicitOperatorBinding<'_> {
    fn operator(&self) -> &dyn SqlOperator {
        self.operator
    }

    fn type_factory(&self) -> &dyn TypeFactory {
        self.type_factory
    }

    fn operand_count(&self) -> usize {
        self.operand_types.len()
    }

    fn operand_type(&self, ordinal: usize) -> Option<DataType> {
        self.operand_types.get(ordinal).cloned()
    }
}

/// Binding over the operands of a [`Call`].
///
/// Literal operands are typed directly. Call operands are typed by inferring
/// their own return type. Identifiers and queries have no type without a
/// catalog, so they report `None`.
#[derive(Clone, Copy)]
pub struct CallBinding<'a> {
    call: &'a Call,
    type_factory: &'a dyn TypeFactory,
}

impl<'a> CallBinding<'a> {
    /// Creates a binding.
    #[must_use]
    pub fn new(call: &'a Call, type_factory: &'a dyn TypeFactory) -> Self {
        Self { call, type_factory }
    }

    /// The bound call.
    #[must_use]
    pub const fn call(&self) -> &'a Call {
        self.call
    }
}

impl OperatorBinding for CallBinding<'_> {
    fn operator(&self) -> &dyn SqlOperator {
        self.call.operator()
    }

    fn type_factory(&self) -> &dyn TypeFactory {
        self.type_factory
    }

    fn operand_count(&self) -> usize {
        self.call.operand_count()
    }

    fn operand_type(&self, ordinal: usize) -> Option<DataType> {
        match self.call.operand(ordinal)? {
            Node::Literal(lit) => Some(lit.data_type(self.type_factory)),
            Node::Call(inner) => inner
                .operator()
                .infer_return_type(&CallBinding::new(inner, self.type_factory))
                .ok(),
            Node::Identifier(_) | Node::Select(_) => None,
        }
    }
}
