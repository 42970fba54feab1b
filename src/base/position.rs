//! Position tracking for analysis results.
//!
//! Stores the source location (line/column) of diagnostics, symbols,
//! and hover targets. Both types are 0-indexed to match the LSP wire
//! convention; the editor-side layer converts to 1-based for display.

/// A position in source text (0-indexed line and column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

/// A range in source text between two positions (end-inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Create a span from line/column coordinates.
    pub fn from_coords(start_line: u32, start_col: u32, end_line: u32, end_col: u32) -> Self {
        Self {
            start: Position::new(start_line, start_col),
            end: Position::new(end_line, end_col),
        }
    }

    /// Create a span covering columns `[start_col, end_col)` of a single line.
    pub fn on_line(line: u32, start_col: u32, end_col: u32) -> Self {
        Self::from_coords(line, start_col, line, end_col)
    }

    /// Check if a position falls within this span.
    pub fn contains(&self, position: Position) -> bool {
        if position.line < self.start.line || position.line > self.end.line {
            return false;
        }
        if position.line == self.start.line && position.column < self.start.column {
            return false;
        }
        if position.line == self.end.line && position.column > self.end.column {
            return false;
        }
        true
    }
}
