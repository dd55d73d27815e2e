//! Anchored text selection over (row, col) space.

use super::cursor::Position;

/// A selection with a fixed anchor and a moving head.
///
/// Anchor and head are not inherently ordered: the head may sit before
/// the anchor in document order. Consumers normalize with
/// [`normalized`](Self::normalized) before treating the pair as a range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    pub active: bool,
    /// Where the selection started (fixed point).
    pub anchor: Position,
    /// Where the cursor is (moving point).
    pub head: Position,
}

impl Selection {
    /// Start a selection: anchor and head collapse onto `(row, col)`.
    pub fn begin(&mut self, row: usize, col: usize) {
        self.active = true;
        self.anchor = Position::new(row, col);
        self.head = self.anchor;
    }

    /// Move the head, leaving the anchor in place.
    pub fn extend(&mut self, row: usize, col: usize) {
        self.head = Position::new(row, col);
    }

    /// Deactivate. Anchor/head values are meaningless afterwards.
    pub fn clear(&mut self) {
        self.active = false;
    }

    /// The (start, end) pair in document order.
    pub fn normalized(&self) -> (Position, Position) {
        if self.anchor <= self.head {
            (self.anchor, self.head)
        } else {
            (self.head, self.anchor)
        }
    }

    /// Whether the normalized range covers no bytes.
    pub fn is_empty(&self) -> bool {
        self.anchor == self.head
    }

    /// Half-open containment test over the row/col scan order: single-row
    /// selections use column bounds directly; multi-row selections cover
    /// everything from `start.col` to end-of-line on the start row, all
    /// of the interior rows, and columns `[0, end.col)` on the end row.
    /// Always false while inactive.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        if !self.active {
            return false;
        }
        let (start, end) = self.normalized();

        if row < start.row || row > end.row {
            return false;
        }
        if row == start.row && row == end.row {
            return col >= start.col && col < end.col;
        }
        if row == start.row {
            return col >= start.col;
        }
        if row == end.row {
            return col < end.col;
        }
        true
    }
}
