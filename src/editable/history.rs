//! Edit history (undo/redo) over single-byte edit records.
//!
//! Two LIFO stacks backed by `Vec`: no per-record allocation, no linked
//! nodes. Every primitive mutation of the text store during normal
//! editing must be paired with exactly one `push`; edits made without a
//! matching record silently desynchronize history from content.
//!
//! Bulk operations (typed runs, paste, selection delete) are recorded
//! one byte at a time, so undo and redo always replay at single-byte
//! granularity.

use tracing::trace;

use super::buffer::GapBuffer;
use crate::error::EditError;

/// The four primitive edits. Newline edits are distinguished from plain
/// inserts/deletes because their inverse re-inserts a line feed without
/// needing the stored byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    Insert,
    Delete,
    InsertNewline,
    DeleteNewline,
}

/// One recorded primitive edit. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditRecord {
    pub kind: EditKind,
    /// Logical offset at the time of the edit.
    pub pos: usize,
    /// The byte inserted or removed.
    pub byte: u8,
}

impl EditRecord {
    pub fn new(kind: EditKind, pos: usize, byte: u8) -> Self {
        Self { kind, pos, byte }
    }
}

/// Undo/redo stacks. Redo is only valid immediately after undo: any new
/// edit clears it (branching history is not supported).
#[derive(Debug, Clone, Default)]
pub struct EditHistory {
    undo_stack: Vec<EditRecord>,
    redo_stack: Vec<EditRecord>,
}

impl EditHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new edit. Clears the redo stack.
    pub fn push(&mut self, record: EditRecord) {
        self.redo_stack.clear();
        self.undo_stack.push(record);
    }

    /// Pop the most recent edit, move it to the redo stack, and apply
    /// its inverse to `buffer`. Returns the buffer's gap offset after
    /// the replay so the caller can recompute the cursor.
    pub fn undo(&mut self, buffer: &mut GapBuffer) -> Result<usize, EditError> {
        let record = self.undo_stack.pop().ok_or(EditError::NothingToUndo)?;
        self.redo_stack.push(record);

        buffer.position(record.pos);
        match record.kind {
            EditKind::Insert | EditKind::InsertNewline => {
                buffer.delete_forward();
            }
            EditKind::Delete => {
                buffer.insert(record.byte);
            }
            EditKind::DeleteNewline => {
                buffer.insert(b'\n');
            }
        }

        trace!(kind = ?record.kind, pos = record.pos, "undo");
        Ok(buffer.gap_position())
    }

    /// Pop the most recently undone edit, move it back to the undo
    /// stack, and reapply the original primitive to `buffer`. Returns
    /// the buffer's gap offset after the replay.
    pub fn redo(&mut self, buffer: &mut GapBuffer) -> Result<usize, EditError> {
        let record = self.redo_stack.pop().ok_or(EditError::NothingToRedo)?;
        self.undo_stack.push(record);

        buffer.position(record.pos);
        match record.kind {
            EditKind::Insert => {
                buffer.insert(record.byte);
            }
            EditKind::Delete => {
                buffer.delete_forward();
            }
            EditKind::InsertNewline => {
                buffer.insert(b'\n');
            }
            EditKind::DeleteNewline => {
                buffer.delete_forward();
            }
        }

        trace!(kind = ?record.kind, pos = record.pos, "redo");
        Ok(buffer.gap_position())
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Drop all records (used after loading a file: loading is not an
    /// undoable edit).
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(gb: &GapBuffer) -> String {
        String::from_utf8(gb.snapshot()).unwrap()
    }

    #[test]
    fn test_undo_insert_deletes_byte() {
        let mut gb = GapBuffer::from_str("abc");
        let mut history = EditHistory::new();

        gb.position(1);
        gb.insert(b'X');
        history.push(EditRecord::new(EditKind::Insert, 1, b'X'));
        assert_eq!(text(&gb), "aXbc");

        assert_eq!(history.undo(&mut gb), Ok(1));
        assert_eq!(text(&gb), "abc");

        assert_eq!(history.redo(&mut gb), Ok(2));
        assert_eq!(text(&gb), "aXbc");
    }

    #[test]
    fn test_undo_delete_restores_byte() {
        let mut gb = GapBuffer::from_str("abc");
        let mut history = EditHistory::new();

        // Delete 'b' at offset 1.
        gb.position(1);
        gb.delete_forward();
        history.push(EditRecord::new(EditKind::Delete, 1, b'b'));
        assert_eq!(text(&gb), "ac");

        history.undo(&mut gb).unwrap();
        assert_eq!(text(&gb), "abc");

        history.redo(&mut gb).unwrap();
        assert_eq!(text(&gb), "ac");
    }

    #[test]
    fn test_newline_records_replay() {
        let mut gb = GapBuffer::from_str("ab");
        let mut history = EditHistory::new();

        gb.position(1);
        gb.insert(b'\n');
        history.push(EditRecord::new(EditKind::InsertNewline, 1, b'\n'));
        assert_eq!(text(&gb), "a\nb");

        history.undo(&mut gb).unwrap();
        assert_eq!(text(&gb), "ab");
        history.redo(&mut gb).unwrap();
        assert_eq!(text(&gb), "a\nb");

        // Join the lines again and undo that too.
        gb.position(2);
        gb.delete_backward();
        history.push(EditRecord::new(EditKind::DeleteNewline, 1, b'\n'));
        assert_eq!(text(&gb), "ab");
        history.undo(&mut gb).unwrap();
        assert_eq!(text(&gb), "a\nb");
    }

    #[test]
    fn test_n_inserts_n_undos_round_trip() {
        let mut gb = GapBuffer::new();
        let mut history = EditHistory::new();

        let word = b"hello";
        for (i, &b) in word.iter().enumerate() {
            gb.position(i);
            gb.insert(b);
            history.push(EditRecord::new(EditKind::Insert, i, b));
        }
        assert_eq!(text(&gb), "hello");

        for _ in 0..word.len() {
            history.undo(&mut gb).unwrap();
        }
        assert_eq!(text(&gb), "");
        assert_eq!(history.undo(&mut gb), Err(EditError::NothingToUndo));

        for _ in 0..word.len() {
            history.redo(&mut gb).unwrap();
        }
        assert_eq!(text(&gb), "hello");
        assert_eq!(history.redo(&mut gb), Err(EditError::NothingToRedo));
    }

    #[test]
    fn test_new_edit_clears_redo() {
        let mut gb = GapBuffer::new();
        let mut history = EditHistory::new();

        gb.insert(b'a');
        history.push(EditRecord::new(EditKind::Insert, 0, b'a'));
        history.undo(&mut gb).unwrap();
        assert!(history.can_redo());

        gb.position(0);
        gb.insert(b'x');
        history.push(EditRecord::new(EditKind::Insert, 0, b'x'));
        assert!(!history.can_redo());
        assert_eq!(history.redo(&mut gb), Err(EditError::NothingToRedo));
    }

    #[test]
    fn test_clear_releases_both_stacks() {
        let mut gb = GapBuffer::new();
        let mut history = EditHistory::new();
        gb.insert(b'a');
        history.push(EditRecord::new(EditKind::Insert, 0, b'a'));
        history.undo(&mut gb).unwrap();

        history.clear();
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert_eq!(history.undo_count(), 0);
        assert_eq!(history.redo_count(), 0);
    }
}
