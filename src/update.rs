//! Update function for the Elm-style architecture.
//!
//! All state transformations flow through `update`. Messages that end
//! the session return a command; everything else mutates the model in
//! place.

use std::fs;

use tracing::{info, warn};

use crate::editable::display_name;
use crate::messages::{Arrow, Msg};
use crate::model::{AppModel, Prompt, PromptKind};

/// Side effect requested by an update step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cmd {
    Quit,
}

pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    if model.prompt.is_some() {
        update_prompt(model, msg);
        model.scroll();
        return None;
    }

    // Anything but a repeated quit resets the unsaved-changes override.
    if msg != Msg::Quit {
        model.quit_pending = false;
        model.show_welcome = false;
    }

    let result = match msg {
        Msg::Arrow(dir, extend) => {
            move_cursor(model, dir, extend);
            None
        }
        Msg::Home(extend) => {
            with_selection(model, extend, |e| e.move_line_start());
            None
        }
        Msg::End(extend) => {
            with_selection(model, extend, |e| e.move_line_end());
            None
        }
        Msg::PageUp(extend) => {
            let page = model.text_rows().max(1);
            with_selection(model, extend, |e| {
                let row = e.cursor.row.saturating_sub(page);
                e.move_to(row, e.cursor.col);
            });
            None
        }
        Msg::PageDown(extend) => {
            let page = model.text_rows().max(1);
            with_selection(model, extend, |e| {
                e.move_to(e.cursor.row + page, e.cursor.col);
            });
            None
        }

        Msg::InsertChar(byte) => {
            model.editor.insert_char(byte);
            None
        }
        Msg::Enter => {
            model.editor.insert_newline();
            None
        }
        Msg::Tab => {
            if model.editor.selection.active {
                model.editor.delete_selection();
            }
            for _ in 0..model.config.tab_stop {
                model.editor.insert_char(b' ');
            }
            None
        }
        Msg::Backspace => {
            model.editor.delete_backward();
            None
        }
        Msg::DeleteForward => {
            model.editor.delete_forward();
            None
        }

        Msg::Undo => {
            if model.editor.undo().is_err() {
                model.set_status("Nothing to undo");
            }
            None
        }
        Msg::Redo => {
            if model.editor.redo().is_err() {
                model.set_status("Nothing to redo");
            }
            None
        }

        Msg::Copy => {
            if let Some(n) = model.editor.copy() {
                model.set_status(format!("Copied {n} bytes"));
            }
            None
        }
        Msg::Cut => {
            if let Some(n) = model.editor.cut() {
                model.set_status(format!("Cut {n} bytes"));
            }
            None
        }
        Msg::Paste => {
            model.editor.paste();
            None
        }
        Msg::SelectAll => {
            model.editor.select_all();
            None
        }
        Msg::Escape => {
            model.editor.selection.clear();
            None
        }

        Msg::Save => {
            save(model);
            None
        }
        Msg::Find => {
            model.prompt = Some(Prompt::new(PromptKind::Find));
            None
        }
        Msg::Quit => {
            if model.editor.dirty && !model.quit_pending {
                model.quit_pending = true;
                model.set_status("Unsaved changes. Press Ctrl-Q again to quit.");
                None
            } else {
                Some(Cmd::Quit)
            }
        }
    };

    model.scroll();
    result
}

/// Apply a cursor movement, extending the selection when Shift is held
/// and otherwise dropping it.
fn with_selection<F>(model: &mut AppModel, extend: bool, movement: F)
where
    F: FnOnce(&mut crate::editable::EditorState),
{
    let editor = &mut model.editor;
    if extend && !editor.selection.active {
        editor.begin_selection();
    }
    movement(editor);
    if extend {
        editor.extend_selection();
    } else {
        editor.selection.clear();
    }
}

fn move_cursor(model: &mut AppModel, dir: Arrow, extend: bool) {
    with_selection(model, extend, |e| match dir {
        Arrow::Up => e.move_up(),
        Arrow::Down => e.move_down(),
        Arrow::Left => e.move_left(),
        Arrow::Right => e.move_right(),
    });
}

// =============================================================================
// Status-line prompts
// =============================================================================

fn update_prompt(model: &mut AppModel, msg: Msg) {
    let Some(prompt) = model.prompt.as_mut() else {
        return;
    };
    match msg {
        Msg::InsertChar(byte) => prompt.input.push(byte as char),
        Msg::Backspace => {
            prompt.input.pop();
        }
        Msg::Escape => {
            model.prompt = None;
            model.set_status("Cancelled");
        }
        Msg::Enter => {
            let Some(prompt) = model.prompt.take() else {
                return;
            };
            match prompt.kind {
                PromptKind::Find => {
                    if prompt.input.is_empty() {
                        return;
                    }
                    if model.editor.search_forward(&prompt.input) {
                        model.set_status(format!("Found \"{}\"", prompt.input));
                    } else {
                        model.set_status(format!("Not found: \"{}\"", prompt.input));
                    }
                }
                PromptKind::SaveAs => {
                    if prompt.input.is_empty() {
                        model.set_status("Save aborted");
                        return;
                    }
                    model.editor.set_filename(prompt.input.into());
                    save(model);
                }
            }
        }
        // Other keys leave the prompt untouched.
        _ => {}
    }
}

// =============================================================================
// Persistence
// =============================================================================

fn save(model: &mut AppModel) {
    let Some(path) = model.editor.filename.clone() else {
        model.prompt = Some(Prompt::new(PromptKind::SaveAs));
        return;
    };
    let text = model.editor.text();
    match fs::write(&path, &text) {
        Ok(()) => {
            model.editor.mark_saved();
            info!(path = %path.display(), bytes = text.len(), "saved");
            model.set_status(format!(
                "{} - {} bytes written",
                display_name(Some(&path)),
                text.len()
            ));
        }
        Err(err) => {
            warn!(path = %path.display(), %err, "save failed");
            model.set_status(format!("Save failed: {err}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EditorConfig;
    use crate::editable::Position;

    fn model_with(text: &str) -> AppModel {
        let mut m = AppModel::new(EditorConfig::default(), 80, 24);
        m.editor.load_text(text);
        m
    }

    #[test]
    fn test_typing_and_enter() {
        let mut m = model_with("");
        update(&mut m, Msg::InsertChar(b'h'));
        update(&mut m, Msg::InsertChar(b'i'));
        update(&mut m, Msg::Enter);
        assert_eq!(m.editor.text(), "hi\n");
        assert_eq!(m.editor.cursor, Position::new(1, 0));
    }

    #[test]
    fn test_tab_inserts_configured_spaces() {
        let mut m = model_with("");
        update(&mut m, Msg::Tab);
        assert_eq!(m.editor.text(), "    ");

        // Each space is its own undo step.
        update(&mut m, Msg::Undo);
        assert_eq!(m.editor.text(), "   ");
    }

    #[test]
    fn test_shift_arrow_builds_selection() {
        let mut m = model_with("hello");
        update(&mut m, Msg::Arrow(Arrow::Right, true));
        update(&mut m, Msg::Arrow(Arrow::Right, true));
        assert!(m.editor.selection.active);
        update(&mut m, Msg::Copy);
        assert_eq!(m.editor.clipboard.data(), b"he");

        // Plain movement drops the selection.
        update(&mut m, Msg::Arrow(Arrow::Left, false));
        assert!(!m.editor.selection.active);
    }

    #[test]
    fn test_quit_requires_confirmation_when_dirty() {
        let mut m = model_with("x");
        update(&mut m, Msg::InsertChar(b'y'));
        assert_eq!(update(&mut m, Msg::Quit), None);
        assert!(m.quit_pending);
        assert_eq!(update(&mut m, Msg::Quit), Some(Cmd::Quit));
    }

    #[test]
    fn test_quit_clean_buffer_exits_immediately() {
        let mut m = model_with("x");
        assert_eq!(update(&mut m, Msg::Quit), Some(Cmd::Quit));
    }

    #[test]
    fn test_find_prompt_flow() {
        let mut m = model_with("alpha\nbeta\nalpha");
        update(&mut m, Msg::Find);
        assert!(m.prompt.is_some());
        for b in *b"beta" {
            update(&mut m, Msg::InsertChar(b));
        }
        update(&mut m, Msg::Enter);
        assert!(m.prompt.is_none());
        assert_eq!(m.editor.cursor, Position::new(1, 0));
    }

    #[test]
    fn test_prompt_escape_cancels() {
        let mut m = model_with("abc");
        update(&mut m, Msg::Find);
        update(&mut m, Msg::InsertChar(b'a'));
        update(&mut m, Msg::Escape);
        assert!(m.prompt.is_none());
        assert_eq!(m.editor.cursor, Position::zero());
    }

    #[test]
    fn test_save_without_filename_opens_prompt() {
        let mut m = model_with("data");
        update(&mut m, Msg::Save);
        assert!(matches!(
            m.prompt.as_ref().map(|p| p.kind),
            Some(PromptKind::SaveAs)
        ));
    }

    #[test]
    fn test_save_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let mut m = model_with("content");
        m.editor.set_filename(path.clone());
        m.editor.dirty = true;

        update(&mut m, Msg::Save);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "content");
        assert!(!m.editor.dirty);
    }

    #[test]
    fn test_page_down_moves_a_screenful() {
        let mut m = model_with(&"line\n".repeat(100));
        update(&mut m, Msg::PageDown(false));
        assert_eq!(m.editor.cursor.row, m.text_rows());
        assert!(m.row_offset > 0 || m.editor.cursor.row < m.text_rows());
    }
}
