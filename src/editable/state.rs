//! EditorState - buffer, cursor, history, selection and clipboard in one place.
//!
//! Every editing operation goes through here so that each primitive
//! mutation of the text store is paired with exactly one history record
//! carrying its inverse (kind, position, byte). Bulk operations (paste,
//! selection delete, tab expansion, auto-indent) record one byte per
//! step and therefore undo at single-byte granularity.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::buffer::GapBuffer;
use super::clipboard::Clipboard;
use super::cursor::Position;
use super::history::{EditHistory, EditKind, EditRecord};
use super::selection::Selection;
use crate::error::EditError;
use crate::syntax::LanguageId;

/// The editing session: one buffer, one cursor, one thread of control.
#[derive(Debug, Clone)]
pub struct EditorState {
    pub buffer: GapBuffer,
    pub cursor: Position,
    pub selection: Selection,
    pub clipboard: Clipboard,
    pub filename: Option<PathBuf>,
    pub language: LanguageId,
    pub dirty: bool,
    history: EditHistory,
}

impl EditorState {
    pub fn new() -> Self {
        Self {
            buffer: GapBuffer::new(),
            cursor: Position::zero(),
            selection: Selection::default(),
            clipboard: Clipboard::new(),
            filename: None,
            language: LanguageId::PlainText,
            dirty: false,
            history: EditHistory::new(),
        }
    }

    /// Associate a filename and derive the language hint from it.
    pub fn set_filename(&mut self, path: PathBuf) {
        self.language = LanguageId::from_path(&path);
        self.filename = Some(path);
    }

    /// Load already-decoded text via repeated single-byte inserts.
    /// Loading is not an undoable edit: history ends up empty and the
    /// dirty flag clear. The cursor moves to the start of the buffer.
    pub fn load_text(&mut self, text: &str) {
        for &b in text.as_bytes() {
            self.buffer.insert(b);
        }
        self.history.clear();
        self.cursor = Position::zero();
        self.selection.clear();
        self.dirty = false;
    }

    /// The cursor's logical byte offset.
    pub fn cursor_offset(&self) -> usize {
        self.buffer.rowcol_to_position(self.cursor.row, self.cursor.col)
    }

    /// Full buffer content as an owned string (content is byte-oriented
    /// but tests and save paths want UTF-8).
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.buffer.snapshot()).into_owned()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Mark the buffer as persisted.
    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Edit operations
// =============================================================================

impl EditorState {
    /// Insert one byte at the cursor. An active selection is replaced.
    pub fn insert_char(&mut self, byte: u8) {
        if self.selection.active {
            self.delete_selection();
        }
        let pos = self.cursor_offset();
        self.buffer.position(pos);
        self.buffer.insert(byte);
        self.history.push(EditRecord::new(EditKind::Insert, pos, byte));
        self.cursor.col += 1;
        self.dirty = true;
    }

    /// Insert a line break at the cursor and copy the previous line's
    /// indentation onto the new line, one recorded space per indent
    /// column. An active selection is replaced.
    pub fn insert_newline(&mut self) {
        if self.selection.active {
            self.delete_selection();
        }
        let pos = self.cursor_offset();
        self.buffer.position(pos);
        self.buffer.insert(b'\n');
        self.history
            .push(EditRecord::new(EditKind::InsertNewline, pos, b'\n'));

        let prev_indent = self.buffer.line_indent(self.cursor.row);
        self.cursor.row += 1;
        self.cursor.col = 0;

        for i in 0..prev_indent {
            self.buffer.insert(b' ');
            self.history
                .push(EditRecord::new(EditKind::Insert, pos + 1 + i, b' '));
            self.cursor.col += 1;
        }

        self.dirty = true;
    }

    /// Backspace. Deletes the selection if one is active; otherwise the
    /// byte before the cursor, joining lines when the cursor sits at
    /// column 0. Returns `false` when there was nothing to delete.
    pub fn delete_backward(&mut self) -> bool {
        if self.selection.active {
            return self.delete_selection();
        }
        if self.cursor.col > 0 {
            let pos = self.cursor_offset();
            self.buffer.position(pos);
            let byte = self.buffer.char_at(pos - 1).unwrap_or(0);
            if self.buffer.delete_backward() {
                self.history
                    .push(EditRecord::new(EditKind::Delete, pos - 1, byte));
                self.cursor.col -= 1;
                self.dirty = true;
                return true;
            }
            false
        } else if self.cursor.row > 0 {
            let prev_line_len = self.buffer.line_length(self.cursor.row - 1);
            let pos = self.buffer.rowcol_to_position(self.cursor.row, 0);
            self.buffer.position(pos);
            if self.buffer.delete_backward() {
                self.history
                    .push(EditRecord::new(EditKind::DeleteNewline, pos - 1, b'\n'));
                self.cursor.row -= 1;
                self.cursor.col = prev_line_len;
                self.dirty = true;
                return true;
            }
            false
        } else {
            false
        }
    }

    /// Forward delete. Deletes the selection if one is active; otherwise
    /// the byte under the cursor. Returns `false` at end of buffer.
    pub fn delete_forward(&mut self) -> bool {
        if self.selection.active {
            return self.delete_selection();
        }
        let pos = self.cursor_offset();
        self.buffer.position(pos);
        let Some(byte) = self.buffer.char_at(pos) else {
            return false;
        };
        let kind = if byte == b'\n' {
            EditKind::DeleteNewline
        } else {
            EditKind::Delete
        };
        if self.buffer.delete_forward() {
            self.history.push(EditRecord::new(kind, pos, byte));
            self.dirty = true;
            return true;
        }
        false
    }

    /// Undo the most recent edit and place the cursor where the inverse
    /// landed. Clears the selection.
    pub fn undo(&mut self) -> Result<(), EditError> {
        let pos = self.history.undo(&mut self.buffer)?;
        self.cursor = self.buffer.position_to_rowcol(pos);
        self.selection.clear();
        self.dirty = true;
        Ok(())
    }

    /// Redo the most recently undone edit.
    pub fn redo(&mut self) -> Result<(), EditError> {
        let pos = self.history.redo(&mut self.buffer)?;
        self.cursor = self.buffer.position_to_rowcol(pos);
        self.selection.clear();
        self.dirty = true;
        Ok(())
    }
}

// =============================================================================
// Selection & clipboard operations
// =============================================================================

impl EditorState {
    /// Anchor a selection at the cursor.
    pub fn begin_selection(&mut self) {
        self.selection.begin(self.cursor.row, self.cursor.col);
    }

    /// Move the selection head to the cursor.
    pub fn extend_selection(&mut self) {
        self.selection.extend(self.cursor.row, self.cursor.col);
    }

    /// Select the whole buffer and leave the cursor at the end.
    pub fn select_all(&mut self) {
        self.selection.begin(0, 0);
        let last_row = self.buffer.row_count() - 1;
        self.cursor = Position::new(last_row, self.buffer.line_length(last_row));
        self.extend_selection();
    }

    /// Copy the selected byte range onto the clipboard, replacing its
    /// contents wholesale. Returns the number of bytes copied; `None`
    /// when the selection is inactive or the normalized range is empty.
    pub fn copy(&mut self) -> Option<usize> {
        if !self.selection.active {
            return None;
        }
        let (start, end) = self.selection.normalized();
        let start_pos = self.buffer.rowcol_to_position(start.row, start.col);
        let end_pos = self.buffer.rowcol_to_position(end.row, end.col);
        if end_pos <= start_pos {
            return None;
        }

        let mut data = Vec::with_capacity(end_pos - start_pos);
        for i in start_pos..end_pos {
            if let Some(b) = self.buffer.char_at(i) {
                data.push(b);
            }
        }
        let copied = data.len();
        self.clipboard.set(data);
        debug!(bytes = copied, "copy");
        Some(copied)
    }

    /// Copy then delete the selection. Returns bytes cut.
    pub fn cut(&mut self) -> Option<usize> {
        let copied = self.copy()?;
        self.delete_selection();
        Some(copied)
    }

    /// Remove the selected byte range from the end backward to the
    /// start, one recorded delete per byte. The cursor moves to the
    /// selection start and the selection is cleared. Returns `false`
    /// when inactive.
    pub fn delete_selection(&mut self) -> bool {
        if !self.selection.active {
            return false;
        }
        let (start, end) = self.selection.normalized();
        let start_pos = self.buffer.rowcol_to_position(start.row, start.col);
        let end_pos = self.buffer.rowcol_to_position(end.row, end.col);

        self.buffer.position(start_pos);
        for _ in start_pos..end_pos {
            let Some(byte) = self.buffer.char_at(start_pos) else {
                break;
            };
            self.buffer.delete_forward();
            self.history
                .push(EditRecord::new(EditKind::Delete, start_pos, byte));
        }

        self.cursor = start;
        self.selection.clear();
        self.dirty = true;
        true
    }

    /// Insert the clipboard at the cursor, one recorded insert per byte,
    /// and advance the cursor past the pasted text. No-op on an empty
    /// clipboard.
    pub fn paste(&mut self) -> bool {
        if self.clipboard.is_empty() {
            return false;
        }
        let pos = self.cursor_offset();
        self.buffer.position(pos);
        let data = self.clipboard.data().to_vec();
        for (i, &byte) in data.iter().enumerate() {
            self.buffer.insert(byte);
            self.history
                .push(EditRecord::new(EditKind::Insert, pos + i, byte));
        }
        self.cursor = self.buffer.position_to_rowcol(pos + data.len());
        self.dirty = true;
        true
    }
}

// =============================================================================
// Cursor movement
// =============================================================================

impl EditorState {
    pub fn move_left(&mut self) {
        if self.cursor.col > 0 {
            self.cursor.col -= 1;
        } else if self.cursor.row > 0 {
            self.cursor.row -= 1;
            self.cursor.col = self.buffer.line_length(self.cursor.row);
        }
    }

    pub fn move_right(&mut self) {
        let line_len = self.buffer.line_length(self.cursor.row);
        if self.cursor.col < line_len {
            self.cursor.col += 1;
        } else if self.cursor.row + 1 < self.buffer.row_count() {
            self.cursor.row += 1;
            self.cursor.col = 0;
        }
    }

    pub fn move_up(&mut self) {
        if self.cursor.row > 0 {
            self.cursor.row -= 1;
            let line_len = self.buffer.line_length(self.cursor.row);
            self.cursor.col = self.cursor.col.min(line_len);
        }
    }

    pub fn move_down(&mut self) {
        if self.cursor.row + 1 < self.buffer.row_count() {
            self.cursor.row += 1;
            let line_len = self.buffer.line_length(self.cursor.row);
            self.cursor.col = self.cursor.col.min(line_len);
        }
    }

    pub fn move_line_start(&mut self) {
        self.cursor.col = 0;
    }

    pub fn move_line_end(&mut self) {
        self.cursor.col = self.buffer.line_length(self.cursor.row);
    }

    /// Jump to `(row, col)`, clamping both axes into the buffer.
    pub fn move_to(&mut self, row: usize, col: usize) {
        let row = row.min(self.buffer.row_count() - 1);
        let col = col.min(self.buffer.line_length(row));
        self.cursor = Position::new(row, col);
    }
}

// =============================================================================
// Search
// =============================================================================

impl EditorState {
    /// Wrap-around forward search over a materialized snapshot, starting
    /// one byte past the cursor. Jumps the cursor to the match and
    /// returns `true`; leaves it in place on a miss.
    pub fn search_forward(&mut self, query: &str) -> bool {
        let snapshot = self.buffer.snapshot();
        let len = snapshot.len();
        let needle = query.as_bytes();
        if len == 0 || needle.is_empty() {
            return false;
        }

        let start_pos = self.cursor_offset() + 1;
        for offset in 0..len {
            let pos = (start_pos + offset) % len;
            if pos + needle.len() <= len && &snapshot[pos..pos + needle.len()] == needle {
                self.cursor = self.buffer.position_to_rowcol(pos);
                debug!(pos, query, "search hit");
                return true;
            }
        }
        false
    }
}

/// Helper for the save path: derive a display name the status bar can
/// show for an unnamed buffer.
pub fn display_name(path: Option<&Path>) -> String {
    path.and_then(|p| p.to_str())
        .unwrap_or("[No Name]")
        .to_string()
}
