//! Best-effort per-character token classifier.
//!
//! This is deliberately not a lexer: each byte of a materialized
//! snapshot is classified independently against a handful of rules
//! (comment prefix, number start, string regions, keyword start). The
//! only running state is the "inside a string" toggle, carried
//! explicitly on [`Highlighter`] and primed by scanning left to right.
//! Classifying positions out of order gives wrong string regions, so
//! renderers classify a whole line at a time via
//! [`Highlighter::classify_line`], which re-primes at line start.

use std::ops::Range;

use super::languages::LanguageId;

/// Visual class of one byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Highlight {
    #[default]
    Normal,
    Keyword,
    String,
    Comment,
    Number,
}

/// C-family keywords, matched exactly and bounded by separators.
const KEYWORDS: &[&[u8]] = &[
    b"if", b"else", b"while", b"for", b"return", b"int", b"char", b"void", b"struct", b"enum",
    b"static", b"const", b"break", b"continue", b"switch", b"case", b"default", b"sizeof",
    b"typedef",
];

/// Token boundary set: whitespace, NUL and the fixed punctuation list.
pub fn is_separator(byte: u8) -> bool {
    byte.is_ascii_whitespace() || byte == 0 || b",.()+-/*=~%<>[];".contains(&byte)
}

/// Classifier state. One instance per scan; [`reset`](Self::reset)
/// before starting an independent pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct Highlighter {
    in_string: bool,
}

impl Highlighter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget any carried string state.
    pub fn reset(&mut self) {
        self.in_string = false;
    }

    /// Classify the byte at `pos`.
    ///
    /// Contract: positions must be visited in left-to-right order from
    /// wherever the state was last reset; the string toggle is carried
    /// between calls.
    pub fn classify(&mut self, content: &[u8], pos: usize, language: LanguageId) -> Highlight {
        if !language.has_highlighting() || pos >= content.len() {
            return Highlight::Normal;
        }
        let c = content[pos];

        // Line comment prefix.
        if c == b'/' && content.get(pos + 1) == Some(&b'/') {
            return Highlight::Comment;
        }

        // Number start: a digit not preceded by a word character.
        if c.is_ascii_digit() && (pos == 0 || is_separator(content[pos - 1])) {
            return Highlight::Number;
        }

        // String regions, toggled by unescaped double quotes. Both
        // delimiters classify as string.
        if self.in_string {
            if c == b'"' && !is_escaped(content, pos) {
                self.in_string = false;
            }
            return Highlight::String;
        }
        if c == b'"' {
            self.in_string = true;
            return Highlight::String;
        }

        // Keyword start, bounded by separators on both sides.
        for keyword in KEYWORDS {
            let end = pos + keyword.len();
            if content.get(pos..end) == Some(*keyword)
                && (end >= content.len() || is_separator(content[end]))
                && (pos == 0 || is_separator(content[pos - 1]))
            {
                return Highlight::Keyword;
            }
        }

        Highlight::Normal
    }

    /// Classify every byte of `line` (a byte range of `content`),
    /// priming the string state at the start of the line. This is what
    /// viewport rendering uses so that drawing only part of the buffer
    /// stays correct.
    pub fn classify_line(
        &mut self,
        content: &[u8],
        line: Range<usize>,
        language: LanguageId,
    ) -> Vec<Highlight> {
        self.reset();
        line.map(|pos| self.classify(content, pos, language))
            .collect()
    }
}

/// Whether the byte at `pos` is preceded by an odd run of backslashes.
fn is_escaped(content: &[u8], pos: usize) -> bool {
    let mut backslashes = 0;
    while backslashes < pos && content[pos - 1 - backslashes] == b'\\' {
        backslashes += 1;
    }
    backslashes % 2 == 1
}
