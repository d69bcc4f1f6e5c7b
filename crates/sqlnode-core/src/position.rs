//! Source location tracking for AST nodes.

use core::fmt;

/// Line/column range of a node in the SQL text it was parsed from.
///
/// Lines and columns are 1-based. [`ParserPos::ZERO`] marks nodes that were
/// synthesized rather than parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ParserPos {
    /// Line of the first character.
    pub line: u32,
    /// Column of the first character.
    pub column: u32,
    /// Line of the last character.
    pub end_line: u32,
    /// Column of the last character.
    pub end_column: u32,
}

impl ParserPos {
    /// Position of synthesized nodes.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Creates a new position.
    #[must_use]
    pub const fn new(line: u32, column: u32, end_line: u32, end_column: u32) -> Self {
        Self {
            line,
            column,
            end_line,
            end_column,
        }
    }

    /// Creates a position covering a single point.
    #[must_use]
    pub const fn at(line: u32, column: u32) -> Self {
        Self::new(line, column, line, column)
    }

    /// Returns true if this is the synthesized position.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.line == 0 && self.column == 0 && self.end_line == 0 && self.end_column == 0
    }

    /// Merges two positions into one that covers both.
    #[must_use]
    pub fn plus(self, other: Self) -> Self {
        if self.is_zero() {
            return other;
        }
        if other.is_zero() {
            return self;
        }
        let (line, column) = (self.line, self.column).min((other.line, other.column));
        let (end_line, end_column) =
            (self.end_line, self.end_column).max((other.end_line, other.end_column));
        Self::new(line, column, end_line, end_column)
    }
}

impl fmt::Display for ParserPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}
