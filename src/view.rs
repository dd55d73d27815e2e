//! Terminal rendering.
//!
//! One `render` pass per event: queue the whole frame (text area with
//! the line-number gutter, status bar, message bar), then flush once.
//! Per-byte syntax classes come from `classify_line`; the selection is
//! drawn with reverse video on top of whatever class a byte has.

use std::io::{self, Write};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    cursor,
    style::{self, Attribute, Color},
    terminal::{self, ClearType},
    QueueableCommand,
};

use crate::model::{AppModel, CHROME_ROWS};
use crate::syntax::{Highlight, Highlighter};

/// How long a status message stays on the message bar.
const STATUS_TIMEOUT: Duration = Duration::from_secs(5);

const WELCOME: &str = "dira editor";
const WELCOME_HINT: &str = "Ctrl-S save | Ctrl-F find | Ctrl-Q quit";

fn highlight_color(hl: Highlight) -> Color {
    match hl {
        Highlight::Normal => Color::Reset,
        Highlight::Keyword => Color::Yellow,
        Highlight::String => Color::Magenta,
        Highlight::Comment => Color::DarkGrey,
        Highlight::Number => Color::Red,
    }
}

pub fn render(model: &AppModel) -> Result<()> {
    let mut stdout = io::stdout();
    stdout.queue(cursor::Hide)?;
    stdout.queue(cursor::MoveTo(0, 0))?;

    let content = model.editor.buffer.snapshot();
    let lines = split_lines(&content);

    draw_text_area(model, &mut stdout, &content, &lines)?;
    draw_status_bar(model, &mut stdout)?;
    draw_message_bar(model, &mut stdout)?;
    place_cursor(model, &mut stdout)?;

    stdout.queue(cursor::Show)?;
    stdout.flush()?;
    Ok(())
}

/// Byte range of every line in the buffer, newline excluded.
fn split_lines(content: &[u8]) -> Vec<std::ops::Range<usize>> {
    let mut lines = Vec::new();
    let mut start = 0;
    for (i, &b) in content.iter().enumerate() {
        if b == b'\n' {
            lines.push(start..i);
            start = i + 1;
        }
    }
    lines.push(start..content.len());
    lines
}

fn draw_text_area(
    model: &AppModel,
    stdout: &mut impl Write,
    content: &[u8],
    lines: &[std::ops::Range<usize>],
) -> Result<()> {
    let gutter = model.gutter_width();
    let text_cols = model.text_cols();
    let mut highlighter = Highlighter::new();

    for screen_row in 0..model.text_rows() {
        let row = model.row_offset + screen_row;
        stdout.queue(cursor::MoveTo(0, screen_row as u16))?;
        stdout.queue(terminal::Clear(ClearType::CurrentLine))?;

        if row >= lines.len() {
            if model.show_welcome && content.is_empty() {
                draw_welcome_row(model, stdout, screen_row)?;
            } else {
                stdout.queue(style::Print("~"))?;
            }
            continue;
        }

        if model.config.colors {
            stdout.queue(style::SetForegroundColor(Color::DarkGrey))?;
        }
        stdout.queue(style::Print(format!("{:>w$} ", row + 1, w = gutter - 1)))?;
        if model.config.colors {
            stdout.queue(style::SetForegroundColor(Color::Reset))?;
        }

        let line = lines[row].clone();
        let classes = if model.config.colors {
            highlighter.classify_line(content, line.clone(), model.editor.language)
        } else {
            vec![Highlight::Normal; line.len()]
        };

        let visible = line
            .clone()
            .skip(model.col_offset)
            .take(text_cols)
            .collect::<Vec<_>>();
        let mut current = Highlight::Normal;
        let mut selected = false;
        for pos in visible {
            let col = pos - line.start;
            let class = classes[col];
            let in_sel = model.editor.selection.contains(row, col);

            if in_sel != selected {
                stdout.queue(style::SetAttribute(if in_sel {
                    Attribute::Reverse
                } else {
                    Attribute::NoReverse
                }))?;
                selected = in_sel;
            }
            if class != current {
                stdout.queue(style::SetForegroundColor(highlight_color(class)))?;
                current = class;
            }
            stdout.queue(style::Print(content[pos] as char))?;
        }
        if selected {
            stdout.queue(style::SetAttribute(Attribute::NoReverse))?;
        }
        if current != Highlight::Normal {
            stdout.queue(style::SetForegroundColor(Color::Reset))?;
        }
    }
    Ok(())
}

fn draw_welcome_row(model: &AppModel, stdout: &mut impl Write, screen_row: usize) -> Result<()> {
    let (line, text) = (model.text_rows() / 3, WELCOME);
    let message = if screen_row == line {
        Some(text)
    } else if screen_row == line + 2 {
        Some(WELCOME_HINT)
    } else {
        None
    };
    match message {
        Some(msg) => {
            let msg = &msg[..msg.len().min(model.screen_cols.saturating_sub(1))];
            let padding = model.screen_cols.saturating_sub(msg.len()) / 2;
            stdout.queue(style::Print("~"))?;
            stdout.queue(style::Print(" ".repeat(padding.saturating_sub(1))))?;
            stdout.queue(style::Print(msg))?;
        }
        None => {
            stdout.queue(style::Print("~"))?;
        }
    }
    Ok(())
}

fn draw_status_bar(model: &AppModel, stdout: &mut impl Write) -> Result<()> {
    let row = model.screen_rows.saturating_sub(CHROME_ROWS) as u16;
    stdout.queue(cursor::MoveTo(0, row))?;
    stdout.queue(style::SetAttribute(Attribute::Reverse))?;

    let name = crate::editable::display_name(model.editor.filename.as_deref());
    let dirty = if model.editor.dirty { " (modified)" } else { "" };
    let left = format!(
        "{} - {} lines{}",
        name,
        model.editor.buffer.row_count(),
        dirty
    );
    let right = format!(
        "{}:{}",
        model.editor.cursor.row + 1,
        model.editor.cursor.col + 1
    );

    let mut bar = left;
    bar.truncate(model.screen_cols.saturating_sub(right.len() + 1));
    let fill = model.screen_cols.saturating_sub(bar.len() + right.len());
    bar.push_str(&" ".repeat(fill));
    bar.push_str(&right);
    bar.truncate(model.screen_cols);

    stdout.queue(style::Print(bar))?;
    stdout.queue(style::SetAttribute(Attribute::NoReverse))?;
    Ok(())
}

fn draw_message_bar(model: &AppModel, stdout: &mut impl Write) -> Result<()> {
    let row = model.screen_rows.saturating_sub(1) as u16;
    stdout.queue(cursor::MoveTo(0, row))?;
    stdout.queue(terminal::Clear(ClearType::CurrentLine))?;

    let mut text = if let Some(prompt) = &model.prompt {
        format!("{} {}", prompt.label(), prompt.input)
    } else if model.status_time.elapsed() < STATUS_TIMEOUT {
        model.status.clone()
    } else {
        String::new()
    };
    text.truncate(model.screen_cols);
    stdout.queue(style::Print(text))?;
    Ok(())
}

fn place_cursor(model: &AppModel, stdout: &mut impl Write) -> Result<()> {
    if let Some(prompt) = &model.prompt {
        let col =
            (prompt.label().len() + 1 + prompt.input.len()).min(model.screen_cols.saturating_sub(1));
        stdout.queue(cursor::MoveTo(
            col as u16,
            model.screen_rows.saturating_sub(1) as u16,
        ))?;
        return Ok(());
    }
    let cursor = model.editor.cursor;
    let screen_row = cursor.row.saturating_sub(model.row_offset);
    let screen_col = model.gutter_width() + cursor.col.saturating_sub(model.col_offset);
    stdout.queue(cursor::MoveTo(
        screen_col.min(model.screen_cols.saturating_sub(1)) as u16,
        screen_row as u16,
    ))?;
    Ok(())
}
