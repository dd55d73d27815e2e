//! Position type shared by the coordinate mapper and selection.

/// A position in the buffer (row and column, both 0-indexed, in bytes).
///
/// Rows count line feeds before the position; columns count bytes since
/// the last line feed. Ordering is lexicographic, so comparing two
/// positions matches document order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub const fn zero() -> Self {
        Self { row: 0, col: 0 }
    }
}
