//! Validation context handed to operator rewrites.

use std::sync::Arc;

use crate::error::Result;
use crate::node::Node;
use crate::operator::{OperatorTable, StdOperatorTable};
use crate::types::{BasicTypeFactory, TypeFactory};

/// What a rewrite may consult while validating a tree.
pub trait ValidationContext {
    /// Registry of well-known operators.
    fn operator_table(&self) -> &dyn OperatorTable;

    /// Factory for result types.
    fn type_factory(&self) -> &dyn TypeFactory;
}

/// A validation session over an operator table and a type factory.
///
/// The session holds no per-tree state, so one session can validate many
/// trees, from several threads at once.
#[derive(Clone)]
pub struct ValidationSession {
    operator_table: Arc<dyn OperatorTable>,
    type_factory: Arc<dyn TypeFactory>,
}

impl ValidationSession {
    /// Creates a session.
    #[must_use]
    pub fn new(operator_table: Arc<dyn OperatorTable>, type_factory: Arc<dyn TypeFactory>) -> Self {
        Self {
            operator_table,
            type_factory,
        }
    }

    /// Applies the operator rewrite of a call node. Other nodes are returned
    /// unchanged. Operands are not visited.
    ///
    /// # Errors
    ///
    /// Propagates the error of the operator's rewrite.
    pub fn rewrite(&self, node: &Node) -> Result<Node> {
        match node {
            Node::Call(call) => call.operator().rewrite_call(self, call),
            other => Ok(other.clone()),
        }
    }
}

impl Default for ValidationSession {
    fn default() -> Self {
        Self::new(
            Arc::new(StdOperatorTable::new()),
            Arc::new(BasicTypeFactory::new()),
        )
    }
}

impl ValidationContext for ValidationSession {
    fn operator_table(&self) -> &dyn OperatorTable {
        self.operator_table.as_ref()
    }

    fn type_factory(&self) -> &dyn TypeFactory {
        self.type_factory.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::SqlKind;
    use crate::literal::Literal;
    use crate::node::Call;
    use crate::position::ParserPos;

    #[test]
    fn test_rewrite_leaves_plain_nodes() {
        let session = ValidationSession::default();
        let lit: Node = Literal::exact_numeric(7, ParserPos::at(2, 3)).into();
        assert_eq!(session.rewrite(&lit).unwrap(), lit);
        let rank: Node = Call::new(StdOperatorTable::rank(), vec![], ParserPos::ZERO).into();
        assert_eq!(session.rewrite(&rank).unwrap(), rank);
    }

    #[test]
    fn test_rewrite_dispatches_to_operator() {
        let session = ValidationSession::default();
        let inner = Call::new(StdOperatorTable::rank(), vec![], ParserPos::ZERO);
        let call: Node = Call::new(
            StdOperatorTable::procedure_call(),
            vec![inner.into()],
            ParserPos::ZERO,
        )
        .into();
        assert_eq!(session.rewrite(&call).unwrap().kind(), SqlKind::Select);
    }

    #[test]
    fn test_session_exposes_type_factory() {
        let session = ValidationSession::default();
        assert_eq!(session.type_factory().max_fractional_precision(), 9);
    }
}
