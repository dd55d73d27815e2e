//! Gap buffer text store.
//!
//! All character data lives in one contiguous allocation split into a
//! filled prefix, an unused gap, and a filled suffix. Edits are O(1) at
//! the gap and O(distance) when the gap has to be relocated first, which
//! matches the access pattern of interactive editing: bursts of edits at
//! one spot.
//!
//! Public positions are always *logical* byte offsets into the gap-free
//! sequence, never raw indices into the allocation.

use crate::error::EditError;

/// Initial capacity when none is requested.
const DEFAULT_CAPACITY: usize = 1024;

/// A byte-oriented gap buffer.
///
/// Invariant: `0 <= gap_start <= gap_end <= buf.len()`. The logical
/// content is `buf[..gap_start]` followed by `buf[gap_end..]`.
#[derive(Debug, Clone)]
pub struct GapBuffer {
    buf: Vec<u8>,
    gap_start: usize,
    gap_end: usize,
}

impl GapBuffer {
    /// Create an empty buffer with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty buffer with at least `capacity` bytes of gap.
    pub fn with_capacity(capacity: usize) -> Self {
        let cap = capacity.max(1);
        Self {
            buf: vec![0; cap],
            gap_start: 0,
            gap_end: cap,
        }
    }

    /// Create a buffer pre-loaded with `text`, gap at the end so that
    /// appending is cheap.
    pub fn from_str(text: &str) -> Self {
        let mut gb = Self::with_capacity(text.len() + DEFAULT_CAPACITY);
        for &b in text.as_bytes() {
            gb.insert(b);
        }
        gb
    }

    /// Logical content length in bytes.
    pub fn len(&self) -> usize {
        self.buf.len() - (self.gap_end - self.gap_start)
    }

    /// Whether the buffer holds no text.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total capacity of the backing allocation. Never shrinks.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Logical offset of the gap, i.e. where the next `insert` lands.
    pub fn gap_position(&self) -> usize {
        self.gap_start
    }

    /// Relocate the gap so its start boundary sits at logical offset
    /// `pos`. Clamps `pos` into `[0, len]`. Precondition for edits at a
    /// target offset; costs O(|pos - gap_start|).
    pub fn position(&mut self, pos: usize) {
        let pos = pos.min(self.len());
        if pos < self.gap_start {
            // Shift bytes in [pos, gap_start) right across the gap.
            let count = self.gap_start - pos;
            self.gap_end -= count;
            self.buf.copy_within(pos..pos + count, self.gap_end);
            self.gap_start = pos;
        } else if pos > self.gap_start {
            // Shift bytes after the gap left into it.
            let count = pos - self.gap_start;
            self.buf
                .copy_within(self.gap_end..self.gap_end + count, self.gap_start);
            self.gap_start += count;
            self.gap_end += count;
        }
    }

    /// Insert `byte` at the gap start and advance it. Grows the backing
    /// allocation by ~50% first when the gap is exhausted; prefix and
    /// suffix contents are preserved across the reallocation.
    pub fn insert(&mut self, byte: u8) {
        if self.gap_start == self.gap_end {
            self.grow();
        }
        self.buf[self.gap_start] = byte;
        self.gap_start += 1;
    }

    /// Remove the byte immediately before the gap. Returns `false` when
    /// there is nothing before the gap.
    pub fn delete_backward(&mut self) -> bool {
        if self.gap_start == 0 {
            return false;
        }
        self.gap_start -= 1;
        true
    }

    /// Remove the byte immediately after the gap. Returns `false` when
    /// there is nothing past the gap.
    pub fn delete_forward(&mut self) -> bool {
        if self.gap_end == self.buf.len() {
            return false;
        }
        self.gap_end += 1;
        true
    }

    /// Byte at logical offset `pos` without relocating the gap.
    /// Out-of-range offsets yield `None`.
    pub fn char_at(&self, pos: usize) -> Option<u8> {
        if pos >= self.len() {
            return None;
        }
        if pos < self.gap_start {
            Some(self.buf[pos])
        } else {
            Some(self.buf[self.gap_end + (pos - self.gap_start)])
        }
    }

    /// Copy the full logical sequence (prefix then suffix) into `out`.
    ///
    /// Fails with [`EditError::BufferTooSmall`] when `out` cannot hold
    /// the entire content, leaving `out` untouched; a short copy is never
    /// produced. Returns the number of bytes written.
    pub fn materialize(&self, out: &mut [u8]) -> Result<usize, EditError> {
        let len = self.len();
        if out.len() < len {
            return Err(EditError::BufferTooSmall {
                needed: len,
                capacity: out.len(),
            });
        }
        out[..self.gap_start].copy_from_slice(&self.buf[..self.gap_start]);
        out[self.gap_start..len].copy_from_slice(&self.buf[self.gap_end..]);
        Ok(len)
    }

    /// The full logical sequence as an owned vector. Convenience over
    /// [`materialize`](Self::materialize) for save, search and render.
    pub fn snapshot(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.len());
        out.extend_from_slice(&self.buf[..self.gap_start]);
        out.extend_from_slice(&self.buf[self.gap_end..]);
        out
    }

    /// Grow the allocation by half its current size, preserving prefix
    /// and suffix around a widened gap.
    fn grow(&mut self) {
        let grow_by = (self.buf.len() / 2).max(1);
        let old_len = self.buf.len();
        let suffix = old_len - self.gap_end;
        self.buf.resize(old_len + grow_by, 0);
        if suffix > 0 {
            let new_gap_end = self.buf.len() - suffix;
            self.buf.copy_within(self.gap_end..old_len, new_gap_end);
            self.gap_end = new_gap_end;
        } else {
            self.gap_end = self.buf.len();
        }
    }
}

impl Default for GapBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contents(gb: &GapBuffer) -> String {
        String::from_utf8(gb.snapshot()).unwrap()
    }

    #[test]
    fn test_new_buffer_is_empty() {
        let gb = GapBuffer::new();
        assert_eq!(gb.len(), 0);
        assert!(gb.is_empty());
        assert_eq!(contents(&gb), "");
    }

    #[test]
    fn test_insert_sequence() {
        let mut gb = GapBuffer::new();
        for b in *b"hello" {
            gb.insert(b);
        }
        assert_eq!(gb.len(), 5);
        assert_eq!(contents(&gb), "hello");
    }

    #[test]
    fn test_insert_in_middle() {
        let mut gb = GapBuffer::from_str("abc");
        gb.position(1);
        gb.insert(b'X');
        assert_eq!(contents(&gb), "aXbc");
    }

    #[test]
    fn test_position_clamps() {
        let mut gb = GapBuffer::from_str("ab");
        gb.position(99);
        assert_eq!(gb.gap_position(), 2);
        gb.position(0);
        assert_eq!(gb.gap_position(), 0);
        assert_eq!(contents(&gb), "ab");
    }

    #[test]
    fn test_delete_backward() {
        let mut gb = GapBuffer::from_str("abc");
        gb.position(2);
        assert!(gb.delete_backward());
        assert_eq!(contents(&gb), "ac");
        gb.position(0);
        assert!(!gb.delete_backward());
        assert_eq!(contents(&gb), "ac");
    }

    #[test]
    fn test_delete_forward() {
        let mut gb = GapBuffer::from_str("abc");
        gb.position(1);
        assert!(gb.delete_forward());
        assert_eq!(contents(&gb), "ac");
        gb.position(2);
        assert!(!gb.delete_forward());
    }

    #[test]
    fn test_char_at_ignores_gap_position() {
        let mut gb = GapBuffer::from_str("abcde");
        gb.position(2);
        assert_eq!(gb.char_at(0), Some(b'a'));
        assert_eq!(gb.char_at(2), Some(b'c'));
        assert_eq!(gb.char_at(4), Some(b'e'));
        assert_eq!(gb.char_at(5), None);
    }

    #[test]
    fn test_growth_preserves_content() {
        let mut gb = GapBuffer::with_capacity(4);
        for i in 0..200u8 {
            gb.insert(b'a' + (i % 26));
        }
        assert_eq!(gb.len(), 200);
        let snap = gb.snapshot();
        assert_eq!(snap[0], b'a');
        assert_eq!(snap[199], b'a' + (199 % 26));
        assert!(gb.capacity() >= 200);
    }

    #[test]
    fn test_growth_with_suffix() {
        let mut gb = GapBuffer::with_capacity(4);
        for b in *b"wxyz" {
            gb.insert(b);
        }
        // Gap is exhausted; insert in the middle so the suffix has to
        // move during growth.
        gb.position(2);
        gb.insert(b'-');
        assert_eq!(contents(&gb), "wx-yz");
    }

    #[test]
    fn test_materialize_exact_fit() {
        let gb = GapBuffer::from_str("ab\ncd");
        let mut out = [0u8; 5];
        assert_eq!(gb.materialize(&mut out), Ok(5));
        assert_eq!(&out, b"ab\ncd");
    }

    #[test]
    fn test_materialize_too_small_leaves_destination_untouched() {
        let gb = GapBuffer::from_str("hello");
        let mut out = [0xAAu8; 3];
        assert_eq!(
            gb.materialize(&mut out),
            Err(EditError::BufferTooSmall {
                needed: 5,
                capacity: 3
            })
        );
        assert_eq!(out, [0xAA; 3]);
    }

    #[test]
    fn test_snapshot_spans_gap() {
        let mut gb = GapBuffer::from_str("hello world");
        gb.position(5);
        assert_eq!(contents(&gb), "hello world");
    }

    #[test]
    fn test_insert_delete_cycle_length() {
        let mut gb = GapBuffer::new();
        for b in *b"abcdef" {
            gb.insert(b);
        }
        gb.position(3);
        gb.delete_backward();
        gb.delete_forward();
        assert_eq!(gb.len(), 4);
        assert_eq!(contents(&gb), "abef");
    }
}
