//! dira - a small terminal text editor.
//!
//! This crate provides the core editing types (gap buffer, coordinate
//! mapping, undo history, selection, clipboard, syntax classifier) and
//! the Elm-style message/update/view loop the binary drives.

pub mod cli;
pub mod config;
pub mod config_paths;
pub mod editable;
pub mod error;
pub mod input;
pub mod messages;
pub mod model;
pub mod syntax;
pub mod terminal;
pub mod tracing;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use config::EditorConfig;
pub use editable::{EditorState, GapBuffer, Position};
pub use error::EditError;
pub use messages::Msg;
pub use model::AppModel;
pub use update::{update, Cmd};
