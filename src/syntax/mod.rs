//! Syntax highlighting module.
//!
//! A best-effort per-character classifier over a materialized text
//! snapshot, plus language detection from file extensions. Only the
//! C family has a highlight profile; everything else renders normal.

mod highlight;
mod languages;

pub use highlight::{is_separator, Highlight, Highlighter};
pub use languages::LanguageId;
