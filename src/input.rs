//! Keyboard decoding: crossterm events to editor intents.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::messages::{Arrow, Msg};

/// Map a key event to a message. Returns `None` for events the editor
/// ignores (releases, unbound chords, non-ASCII input).
pub fn map_key(event: KeyEvent) -> Option<Msg> {
    if event.kind == KeyEventKind::Release {
        return None;
    }

    let shift = event.modifiers.contains(KeyModifiers::SHIFT);
    let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);

    if ctrl {
        return match event.code {
            KeyCode::Char('q') => Some(Msg::Quit),
            KeyCode::Char('s') => Some(Msg::Save),
            KeyCode::Char('z') => Some(Msg::Undo),
            KeyCode::Char('y') => Some(Msg::Redo),
            KeyCode::Char('c') => Some(Msg::Copy),
            KeyCode::Char('x') => Some(Msg::Cut),
            KeyCode::Char('v') => Some(Msg::Paste),
            KeyCode::Char('a') => Some(Msg::SelectAll),
            KeyCode::Char('f') => Some(Msg::Find),
            KeyCode::Char('h') => Some(Msg::Backspace),
            _ => None,
        };
    }

    match event.code {
        KeyCode::Up => Some(Msg::Arrow(Arrow::Up, shift)),
        KeyCode::Down => Some(Msg::Arrow(Arrow::Down, shift)),
        KeyCode::Left => Some(Msg::Arrow(Arrow::Left, shift)),
        KeyCode::Right => Some(Msg::Arrow(Arrow::Right, shift)),
        KeyCode::Home => Some(Msg::Home(shift)),
        KeyCode::End => Some(Msg::End(shift)),
        KeyCode::PageUp => Some(Msg::PageUp(shift)),
        KeyCode::PageDown => Some(Msg::PageDown(shift)),
        KeyCode::Enter => Some(Msg::Enter),
        KeyCode::Tab => Some(Msg::Tab),
        KeyCode::Backspace => Some(Msg::Backspace),
        KeyCode::Delete => Some(Msg::DeleteForward),
        KeyCode::Esc => Some(Msg::Escape),
        KeyCode::Char(c) if c.is_ascii() && !c.is_control() => Some(Msg::InsertChar(c as u8)),
        _ => None,
    }
}
