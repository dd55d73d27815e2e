//! End-to-end editing tests driven through the message loop.

use dira::config::EditorConfig;
use dira::editable::Position;
use dira::messages::{Arrow, Msg};
use dira::model::AppModel;
use dira::update::update;

fn model_with(text: &str) -> AppModel {
    let mut model = AppModel::new(EditorConfig::default(), 80, 24);
    model.editor.load_text(text);
    model
}

fn type_str(model: &mut AppModel, text: &str) {
    for &b in text.as_bytes() {
        update(model, Msg::InsertChar(b));
    }
}

// ========================================================================
// Coordinate mapping
// ========================================================================

#[test]
fn test_offset_rowcol_mapping() {
    let model = model_with("ab\ncd");
    // Offset 3 is the 'c' on the second line.
    assert_eq!(model.editor.buffer.position_to_rowcol(3), Position::new(1, 0));
    assert_eq!(model.editor.buffer.rowcol_to_position(1, 1), 4);
}

#[test]
fn test_column_clamps_to_line_end() {
    let model = model_with("ab\ncd");
    // Column 99 on row 0 clamps to the linefeed.
    assert_eq!(model.editor.buffer.rowcol_to_position(0, 99), 2);
}

// ========================================================================
// Editing and history
// ========================================================================

#[test]
fn test_insert_undo_redo() {
    let mut model = model_with("abc");
    model.editor.move_to(0, 1);
    update(&mut model, Msg::InsertChar(b'X'));
    assert_eq!(model.editor.text(), "aXbc");

    update(&mut model, Msg::Undo);
    assert_eq!(model.editor.text(), "abc");
    assert_eq!(model.editor.cursor, Position::new(0, 1));

    update(&mut model, Msg::Redo);
    assert_eq!(model.editor.text(), "aXbc");
}

#[test]
fn test_typed_word_undoes_per_byte() {
    let mut model = model_with("");
    type_str(&mut model, "word");
    update(&mut model, Msg::Undo);
    assert_eq!(model.editor.text(), "wor");
}

#[test]
fn test_backspace_at_line_start_joins() {
    let mut model = model_with("ab\ncd");
    model.editor.move_to(1, 0);
    update(&mut model, Msg::Backspace);
    assert_eq!(model.editor.text(), "abcd");
    assert_eq!(model.editor.cursor, Position::new(0, 2));

    update(&mut model, Msg::Undo);
    assert_eq!(model.editor.text(), "ab\ncd");
}

#[test]
fn test_enter_copies_indent() {
    let mut model = model_with("  fn x");
    model.editor.move_line_end();
    update(&mut model, Msg::Enter);
    assert_eq!(model.editor.text(), "  fn x\n  ");
    assert_eq!(model.editor.cursor, Position::new(1, 2));
}

// ========================================================================
// Selection and clipboard
// ========================================================================

#[test]
fn test_select_copy_paste_round_trip() {
    let mut model = model_with("one two");
    update(&mut model, Msg::Arrow(Arrow::Right, true));
    update(&mut model, Msg::Arrow(Arrow::Right, true));
    update(&mut model, Msg::Arrow(Arrow::Right, true));
    update(&mut model, Msg::Copy);
    assert_eq!(model.editor.clipboard.data(), b"one");

    update(&mut model, Msg::End(false));
    update(&mut model, Msg::Paste);
    assert_eq!(model.editor.text(), "one twoone");
    assert_eq!(model.editor.cursor, Position::new(0, 10));
}

#[test]
fn test_cut_then_undo_restores_text() {
    let mut model = model_with("hello world");
    update(&mut model, Msg::SelectAll);
    update(&mut model, Msg::Cut);
    assert_eq!(model.editor.text(), "");
    assert_eq!(model.editor.clipboard.data(), b"hello world");

    while model.editor.can_undo() {
        update(&mut model, Msg::Undo);
    }
    assert_eq!(model.editor.text(), "hello world");
}

#[test]
fn test_typing_replaces_selection() {
    let mut model = model_with("abc\ndef");
    model.editor.move_to(0, 1);
    update(&mut model, Msg::Arrow(Arrow::Down, true));
    update(&mut model, Msg::InsertChar(b'-'));
    assert_eq!(model.editor.text(), "a-ef");
}

// ========================================================================
// Search and prompts
// ========================================================================

#[test]
fn test_find_wraps_around() {
    let mut model = model_with("needle hay needle");
    model.editor.move_to(0, 12);

    update(&mut model, Msg::Find);
    type_str(&mut model, "needle");
    update(&mut model, Msg::Enter);
    assert_eq!(model.editor.cursor, Position::new(0, 0));
}

#[test]
fn test_save_as_prompt_writes_named_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("new.txt");

    let mut model = model_with("");
    type_str(&mut model, "saved text");
    update(&mut model, Msg::Save);
    type_str(&mut model, path.to_str().unwrap());
    update(&mut model, Msg::Enter);

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "saved text");
    assert!(!model.editor.dirty);
}

// ========================================================================
// Scrolling
// ========================================================================

#[test]
fn test_viewport_tracks_cursor() {
    let mut model = model_with(&"line\n".repeat(200));
    for _ in 0..3 {
        update(&mut model, Msg::PageDown(false));
    }
    let cursor_row = model.editor.cursor.row;
    assert!(cursor_row >= model.row_offset);
    assert!(cursor_row < model.row_offset + model.text_rows());

    update(&mut model, Msg::PageUp(false));
    update(&mut model, Msg::PageUp(false));
    update(&mut model, Msg::PageUp(false));
    assert_eq!(model.row_offset, 0);
}
