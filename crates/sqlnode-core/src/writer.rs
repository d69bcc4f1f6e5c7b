//! Text output for unparsing nodes.
//!
//! Nodes never hold a dialect. A [`SqlWriter`] carries the dialect for one
//! render pass, and nodes that need dialect-specific syntax ask the writer for
//! it.

use std::sync::Arc;

use crate::dialect::Dialect;

/// Kind of bracketed list being written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameKind {
    /// Argument list directly after a function name: `f(`.
    FunctionCall,
    /// Parenthesized sub-expression or row: ` (`.
    Parentheses,
    /// A clause list without brackets, such as the SELECT list.
    Simple,
}

/// An open list, closed by [`SqlWriter::end_list`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "an opened list must be closed with `end_list`"]
pub struct Frame {
    kind: FrameKind,
    close: &'static str,
}

impl Frame {
    /// Kind of the list.
    pub const fn kind(&self) -> FrameKind {
        self.kind
    }
}

/// Receives the tokens of an unparsed tree.
pub trait SqlWriter {
    /// The dialect active for this render pass.
    fn dialect(&self) -> Arc<dyn Dialect>;

    /// Writes a keyword such as `SELECT`.
    fn keyword(&mut self, keyword: &str);

    /// Writes a literal token verbatim.
    fn literal(&mut self, literal: &str);

    /// Writes an identifier, quoted by the dialect.
    fn identifier(&mut self, name: &str);

    /// Writes a function or operator name.
    fn operator_name(&mut self, name: &str);

    /// Writes a list separator such as `,`.
    fn sep(&mut self, sep: &str);

    /// Opens a list.
    fn start_list(&mut self, kind: FrameKind, open: &'static str, close: &'static str) -> Frame;

    /// Closes a list opened by [`SqlWriter::start_list`].
    fn end_list(&mut self, frame: Frame);
}

/// Writer that renders a single line of SQL into a string.
#[derive(Debug)]
pub struct SqlStringWriter {
    dialect: Arc<dyn Dialect>,
    buf: String,
    need_whitespace: bool,
}

impl SqlStringWriter {
    /// Creates a writer for the given dialect.
    #[must_use]
    pub fn new(dialect: Arc<dyn Dialect>) -> Self {
        Self {
            dialect,
            buf: String::new(),
            need_whitespace: false,
        }
    }

    /// Returns the text written so far.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Consumes the writer, returning the SQL text.
    #[must_use]
    pub fn into_sql(self) -> String {
        self.buf
    }

    fn token(&mut self, text: &str) {
        if self.need_whitespace && !text.is_empty() {
            self.buf.push(' ');
        }
        self.buf.push_str(text);
        self.need_whitespace = !text.is_empty();
    }
}

impl SqlWriter for SqlStringWriter {
    fn dialect(&self) -> Arc<dyn Dialect> {
        Arc::clone(&self.dialect)
    }

    fn keyword(&mut self, keyword: &str) {
        self.token(keyword);
    }

    fn literal(&mut self, literal: &str) {
        self.token(literal);
    }

    fn identifier(&mut self, name: &str) {
        let quoted = self.dialect.quote_identifier(name);
        self.token(&quoted);
    }

    fn operator_name(&mut self, name: &str) {
        self.token(name);
    }

    fn sep(&mut self, sep: &str) {
        self.buf.push_str(sep);
        self.need_whitespace = true;
    }

    fn start_list(&mut self, kind: FrameKind, open: &'static str, close: &'static str) -> Frame {
        match kind {
            FrameKind::FunctionCall => self.buf.push_str(open),
            FrameKind::Parentheses | FrameKind::Simple => self.token(open),
        }
        self.need_whitespace = false;
        Frame { kind, close }
    }

    fn end_list(&mut self, frame: Frame) {
        if frame.close.is_empty() {
            return;
        }
        self.buf.push_str(frame.close);
        self.need_whitespace = true;
    }
}
