//! Editor intents.
//!
//! Decoded keyboard input becomes one of these messages; `update`
//! applies them to the model. The `extend` flag on movement messages is
//! set when Shift is held, turning the move into a selection extension.

/// Arrow-key direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrow {
    Up,
    Down,
    Left,
    Right,
}

/// One decoded editor intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    Arrow(Arrow, bool),
    Home(bool),
    End(bool),
    PageUp(bool),
    PageDown(bool),

    InsertChar(u8),
    Enter,
    Tab,
    Backspace,
    DeleteForward,

    Undo,
    Redo,
    Copy,
    Cut,
    Paste,
    SelectAll,
    Escape,

    Save,
    Find,
    Quit,
}
