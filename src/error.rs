//! Error taxonomy for the editing core.
//!
//! Out-of-range positions are clamped at the core boundary rather than
//! reported: cursor movement routinely asks for targets past line or
//! buffer ends. Everything that *is* reported here is recoverable by the
//! immediate caller; allocation failure aborts via the global allocator.

use thiserror::Error;

/// Failures surfaced by the editing core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EditError {
    /// `materialize` was handed a destination smaller than the buffer
    /// content. The destination is left untouched; callers must never
    /// receive a silently truncated copy.
    #[error("destination too small: need {needed} bytes, have {capacity}")]
    BufferTooSmall { needed: usize, capacity: usize },

    /// The undo stack is empty. A steady-state no-op, not a user error.
    #[error("nothing to undo")]
    NothingToUndo,

    /// The redo stack is empty (or was cleared by a new edit).
    #[error("nothing to redo")]
    NothingToRedo,
}
