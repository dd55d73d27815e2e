//! The editing core.
//!
//! Everything the frontend needs to edit text lives here:
//!
//! - [`GapBuffer`]: the text store, a gap buffer over one contiguous
//!   byte allocation.
//! - Coordinate mapping (`rowcol`): derived, on-demand translation
//!   between flat byte offsets and (row, col) pairs.
//! - [`EditHistory`]: dual-stack undo/redo replaying exact inverses of
//!   single-byte edit records.
//! - [`Selection`] / [`Clipboard`]: anchored range over (row, col)
//!   space and the owned byte sequence it exchanges with the buffer.
//! - [`EditorState`]: the orchestrator tying the pieces together so
//!   every buffer mutation is paired with its history record.

mod buffer;
mod clipboard;
mod cursor;
mod history;
mod rowcol;
mod selection;
mod state;

pub use buffer::GapBuffer;
pub use clipboard::Clipboard;
pub use cursor::Position;
pub use history::{EditHistory, EditKind, EditRecord};
pub use rowcol::TAB_STOP;
pub use selection::Selection;
pub use state::{display_name, EditorState};
