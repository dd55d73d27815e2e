//! Application model - the complete state of a running session.
//!
//! `AppModel` wraps the editing core with everything the terminal
//! frontend needs: viewport geometry, scroll offsets, the status
//! message and any active status-line prompt.

use std::time::Instant;

use crate::config::EditorConfig;
use crate::editable::EditorState;

/// Rows reserved below the text area for the status and message bars.
pub const CHROME_ROWS: usize = 2;

/// What an active status-line prompt is collecting input for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Find,
    SaveAs,
}

/// An in-progress status-line prompt.
#[derive(Debug, Clone)]
pub struct Prompt {
    pub kind: PromptKind,
    pub input: String,
}

impl Prompt {
    pub fn new(kind: PromptKind) -> Self {
        Self {
            kind,
            input: String::new(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self.kind {
            PromptKind::Find => "Find:",
            PromptKind::SaveAs => "Save as:",
        }
    }
}

#[derive(Debug)]
pub struct AppModel {
    pub editor: EditorState,
    pub config: EditorConfig,
    /// Terminal size in cells.
    pub screen_cols: usize,
    pub screen_rows: usize,
    /// First visible row / column of the text area.
    pub row_offset: usize,
    pub col_offset: usize,
    pub status: String,
    pub status_time: Instant,
    pub show_welcome: bool,
    pub prompt: Option<Prompt>,
    /// Set after a quit was refused because of unsaved changes; a
    /// second quit in a row goes through.
    pub quit_pending: bool,
}

impl AppModel {
    pub fn new(config: EditorConfig, screen_cols: usize, screen_rows: usize) -> Self {
        let show_welcome = config.show_welcome;
        Self {
            editor: EditorState::new(),
            config,
            screen_cols,
            screen_rows,
            row_offset: 0,
            col_offset: 0,
            status: String::new(),
            status_time: Instant::now(),
            show_welcome,
            prompt: None,
            quit_pending: false,
        }
    }

    /// Height of the text area in rows.
    pub fn text_rows(&self) -> usize {
        self.screen_rows.saturating_sub(CHROME_ROWS)
    }

    /// Width of the line-number gutter, sized to the widest line number
    /// plus one column of padding.
    pub fn gutter_width(&self) -> usize {
        let digits = {
            let mut n = self.editor.buffer.row_count();
            let mut d = 1;
            while n >= 10 {
                n /= 10;
                d += 1;
            }
            d
        };
        digits + 1
    }

    /// Width of the text area in columns.
    pub fn text_cols(&self) -> usize {
        self.screen_cols.saturating_sub(self.gutter_width())
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = message.into();
        self.status_time = Instant::now();
    }

    pub fn resize(&mut self, cols: usize, rows: usize) {
        self.screen_cols = cols;
        self.screen_rows = rows;
        self.scroll();
    }

    /// Clamp the scroll offsets so the cursor stays on screen.
    pub fn scroll(&mut self) {
        let cursor = self.editor.cursor;
        let text_rows = self.text_rows().max(1);
        let text_cols = self.text_cols().max(1);

        if cursor.row < self.row_offset {
            self.row_offset = cursor.row;
        }
        if cursor.row >= self.row_offset + text_rows {
            self.row_offset = cursor.row - text_rows + 1;
        }
        if cursor.col < self.col_offset {
            self.col_offset = cursor.col;
        }
        if cursor.col >= self.col_offset + text_cols {
            self.col_offset = cursor.col - text_cols + 1;
        }
    }
}
