//! Coordinate mapping between flat byte offsets and (row, col) pairs.
//!
//! Coordinates are never stored; both directions are derived on demand
//! by scanning the buffer for line feeds. That makes every conversion
//! O(n) in the offset reached, a deliberate simplicity trade-off that is
//! fine at interactive file sizes. All functions are pure reads of the
//! text store and are safe to call at any time, including mid-edit.

use super::buffer::GapBuffer;
use super::cursor::Position;

/// Width charged to a tab when measuring indentation.
pub const TAB_STOP: usize = 4;

impl GapBuffer {
    /// Derive the (row, col) coordinate of logical offset `pos` by
    /// counting line feeds in `[0, pos)`.
    pub fn position_to_rowcol(&self, pos: usize) -> Position {
        let pos = pos.min(self.len());
        let mut row = 0;
        let mut col = 0;
        for i in 0..pos {
            if self.char_at(i) == Some(b'\n') {
                row += 1;
                col = 0;
            } else {
                col += 1;
            }
        }
        Position::new(row, col)
    }

    /// Derive the logical offset of `(row, col)` by scanning forward
    /// from the start of the buffer. Rows past the last row resolve to
    /// the end of the buffer; columns past the line end clamp to the
    /// line's terminating line feed.
    pub fn rowcol_to_position(&self, row: usize, col: usize) -> usize {
        let len = self.len();
        let mut pos = 0;
        let mut cur_row = 0;

        while pos < len && cur_row < row {
            if self.char_at(pos) == Some(b'\n') {
                cur_row += 1;
            }
            pos += 1;
        }

        let mut cur_col = 0;
        while pos < len && cur_col < col {
            if self.char_at(pos) == Some(b'\n') {
                break;
            }
            cur_col += 1;
            pos += 1;
        }

        pos
    }

    /// Number of bytes in `row`, excluding its terminating line feed.
    pub fn line_length(&self, row: usize) -> usize {
        let mut pos = self.rowcol_to_position(row, 0);
        let len = self.len();
        let mut line_len = 0;
        while pos < len {
            if self.char_at(pos) == Some(b'\n') {
                break;
            }
            line_len += 1;
            pos += 1;
        }
        line_len
    }

    /// Leading whitespace width of `row`: spaces count 1, tabs count
    /// [`TAB_STOP`].
    pub fn line_indent(&self, row: usize) -> usize {
        let mut pos = self.rowcol_to_position(row, 0);
        let len = self.len();
        let mut indent = 0;
        while pos < len {
            match self.char_at(pos) {
                Some(b' ') => indent += 1,
                Some(b'\t') => indent += TAB_STOP,
                _ => break,
            }
            pos += 1;
        }
        indent
    }

    /// 1 + number of line feeds in the buffer. An empty buffer has
    /// exactly one row.
    pub fn row_count(&self) -> usize {
        let mut rows = 1;
        for i in 0..self.len() {
            if self.char_at(i) == Some(b'\n') {
                rows += 1;
            }
        }
        rows
    }
}
