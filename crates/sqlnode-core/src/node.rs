//! The node tree: literals, identifiers, operator calls and queries.

use std::sync::Arc;

use crate::dialect::Dialect;
use crate::kind::SqlKind;
use crate::literal::Literal;
use crate::operator::SqlOperator;
use crate::position::ParserPos;
use crate::writer::{FrameKind, SqlStringWriter, SqlWriter};

/// A node of a SQL syntax tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A literal value.
    Literal(Literal),
    /// A possibly qualified identifier.
    Identifier(Identifier),
    /// An operator applied to operands.
    Call(Call),
    /// A SELECT query.
    Select(Box<Select>),
}

impl Node {
    /// Semantic kind of the node; for calls, the operator's kind.
    #[must_use]
    pub fn kind(&self) -> SqlKind {
        match self {
            Self::Literal(_) => SqlKind::Literal,
            Self::Identifier(_) => SqlKind::Identifier,
            Self::Call(call) => call.kind(),
            Self::Select(_) => SqlKind::Select,
        }
    }

    /// Source position.
    #[must_use]
    pub fn position(&self) -> ParserPos {
        match self {
            Self::Literal(lit) => lit.position(),
            Self::Identifier(id) => id.pos,
            Self::Call(call) => call.pos,
            Self::Select(select) => select.pos,
        }
    }

    /// Writes the node, parenthesizing where the surrounding precedences
    /// bind tighter than the node.
    pub fn unparse(&self, writer: &mut dyn SqlWriter, left_prec: u32, right_prec: u32) {
        match self {
            Self::Literal(lit) => lit.unparse(writer, left_prec, right_prec),
            Self::Identifier(id) => id.unparse(writer),
            Self::Call(call) => call.unparse(writer, left_prec, right_prec),
            Self::Select(select) => select.unparse(writer, left_prec, right_prec),
        }
    }

    /// Renders the node as a single line of SQL for `dialect`.
    #[must_use]
    pub fn to_sql(&self, dialect: Arc<dyn Dialect>) -> String {
        let mut writer = SqlStringWriter::new(dialect);
        self.unparse(&mut writer, 0, 0);
        writer.into_sql()
    }

    /// Structural equality, ignoring source positions.
    #[must_use]
    pub fn equals_deep(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Literal(a), Self::Literal(b)) => a.clone_at(ParserPos::ZERO) == b.clone_at(ParserPos::ZERO),
            (Self::Identifier(a), Self::Identifier(b)) => a.names == b.names,
            (Self::Call(a), Self::Call(b)) => a.equals_deep(b),
            (Self::Select(a), Self::Select(b)) => a.equals_deep(b),
            _ => false,
        }
    }
}

impl From<Literal> for Node {
    fn from(literal: Literal) -> Self {
        Self::Literal(literal)
    }
}

impl From<Identifier> for Node {
    fn from(identifier: Identifier) -> Self {
        Self::Identifier(identifier)
    }
}

impl From<Call> for Node {
    fn from(call: Call) -> Self {
        Self::Call(call)
    }
}

impl From<Select> for Node {
    fn from(select: Select) -> Self {
        Self::Select(Box::new(select))
    }
}

fn all_equal_deep(a: &[Node], b: &[Node]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.equals_deep(y))
}

/// A simple or compound identifier such as `emp.name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    /// Name parts, outermost first.
    pub names: Vec<String>,
    /// Source position.
    pub pos: ParserPos,
}

impl Identifier {
    /// Creates a simple identifier.
    #[must_use]
    pub fn simple(name: impl Into<String>, pos: ParserPos) -> Self {
        Self {
            names: vec![name.into()],
            pos,
        }
    }

    /// Creates a compound identifier.
    #[must_use]
    pub fn compound<I, S>(names: I, pos: ParserPos) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            pos,
        }
    }

    fn unparse(&self, writer: &mut dyn SqlWriter) {
        if let [name] = self.names.as_slice() {
            writer.identifier(name);
            return;
        }
        let dialect = writer.dialect();
        let quoted: Vec<String> = self
            .names
            .iter()
            .map(|name| dialect.quote_identifier(name))
            .collect();
        writer.literal(&quoted.join("."));
    }
}

/// An operator applied to an ordered list of operands.
#[derive(Debug, Clone)]
pub struct Call {
    operator: Arc<dyn SqlOperator>,
    operands: Vec<Node>,
    pos: ParserPos,
}

impl Call {
    /// Creates a call.
    #[must_use]
    pub fn new(operator: Arc<dyn SqlOperator>, operands: Vec<Node>, pos: ParserPos) -> Self {
        Self {
            operator,
            operands,
            pos,
        }
    }

    /// The operator.
    #[must_use]
    pub fn operator(&self) -> &dyn SqlOperator {
        self.operator.as_ref()
    }

    /// The operator's kind.
    #[must_use]
    pub fn kind(&self) -> SqlKind {
        self.operator.kind()
    }

    /// The operands, in order.
    #[must_use]
    pub fn operands(&self) -> &[Node] {
        &self.operands
    }

    /// The operand at `ordinal`.
    #[must_use]
    pub fn operand(&self, ordinal: usize) -> Option<&Node> {
        self.operands.get(ordinal)
    }

    /// Number of operands.
    #[must_use]
    pub fn operand_count(&self) -> usize {
        self.operands.len()
    }

    /// Source position.
    #[must_use]
    pub const fn position(&self) -> ParserPos {
        self.pos
    }

    /// Returns an equal call at a new position; operands keep theirs.
    #[must_use]
    pub fn clone_at(&self, pos: ParserPos) -> Self {
        Self {
            pos,
            ..self.clone()
        }
    }

    /// Writes the call, wrapped in parentheses when the operator binds
    /// more loosely than its surroundings.
    pub fn unparse(&self, writer: &mut dyn SqlWriter, left_prec: u32, right_prec: u32) {
        let op = self.operator.as_ref();
        let needs_parens =
            left_prec > op.left_prec() || (op.right_prec() <= right_prec && right_prec != 0);
        if needs_parens {
            let frame = writer.start_list(FrameKind::Parentheses, "(", ")");
            op.unparse(writer, self, 0, 0);
            writer.end_list(frame);
        } else {
            op.unparse(writer, self, left_prec, right_prec);
        }
    }

    /// Structural equality, ignoring source positions.
    #[must_use]
    pub fn equals_deep(&self, other: &Self) -> bool {
        same_operator(self.operator(), other.operator())
            && all_equal_deep(&self.operands, &other.operands)
    }
}

impl PartialEq for Call {
    fn eq(&self, other: &Self) -> bool {
        same_operator(self.operator(), other.operator())
            && self.operands == other.operands
            && self.pos == other.pos
    }
}

fn same_operator(a: &dyn SqlOperator, b: &dyn SqlOperator) -> bool {
    a.kind() == b.kind() && a.name() == b.name() && a.syntax() == b.syntax()
}

/// A SELECT query.
#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    /// The selected expressions.
    pub select_list: Vec<Node>,
    /// The FROM item.
    pub from: Option<Node>,
    /// Source position.
    pub pos: ParserPos,
}

impl Select {
    /// Creates a query.
    #[must_use]
    pub const fn new(select_list: Vec<Node>, from: Option<Node>, pos: ParserPos) -> Self {
        Self {
            select_list,
            from,
            pos,
        }
    }

    /// Writes the query; nested inside an expression it is parenthesized.
    pub fn unparse(&self, writer: &mut dyn SqlWriter, left_prec: u32, right_prec: u32) {
        let outer = (left_prec > 0 || right_prec > 0)
            .then(|| writer.start_list(FrameKind::Parentheses, "(", ")"));
        writer.keyword("SELECT");
        for (i, item) in self.select_list.iter().enumerate() {
            if i > 0 {
                writer.sep(",");
            }
            item.unparse(writer, 0, 0);
        }
        if let Some(from) = &self.from {
            writer.keyword("FROM");
            if from.kind().is_query() {
                let frame = writer.start_list(FrameKind::Parentheses, "(", ")");
                from.unparse(writer, 0, 0);
                writer.end_list(frame);
            } else {
                from.unparse(writer, 0, 0);
            }
        }
        if let Some(frame) = outer {
            writer.end_list(frame);
        }
    }

    /// Structural equality, ignoring source positions.
    #[must_use]
    pub fn equals_deep(&self, other: &Self) -> bool {
        all_equal_deep(&self.select_list, &other.select_list)
            && match (&self.from, &other.from) {
                (Some(a), Some(b)) => a.equals_deep(b),
                (None, None) => true,
                _ => false,
            }
    }
}
