use std::fs;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event};
use tracing::info;

use dira::cli::CliArgs;
use dira::config::EditorConfig;
use dira::input::map_key;
use dira::model::AppModel;
use dira::terminal::TerminalGuard;
use dira::update::{update, Cmd};
use dira::view::render;

fn main() -> Result<()> {
    let args = CliArgs::parse();
    let config = EditorConfig::load(args.config.as_deref());
    dira::tracing::init();

    let terminal = TerminalGuard::enter()?;
    let (cols, rows) = terminal.size()?;
    let mut model = AppModel::new(config, cols as usize, rows as usize);

    if let Some(path) = args.path {
        match fs::read_to_string(&path) {
            Ok(text) => {
                model.editor.load_text(&text);
                info!(path = %path.display(), bytes = text.len(), "opened");
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                model.set_status("New file");
            }
            Err(err) => {
                drop(terminal);
                return Err(err.into());
            }
        }
        model.editor.set_filename(path);
        model.show_welcome = false;
    }

    run(&mut model)?;
    drop(terminal);
    Ok(())
}

fn run(model: &mut AppModel) -> Result<()> {
    loop {
        render(model)?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) => {
                if let Some(msg) = map_key(key) {
                    if update(model, msg) == Some(Cmd::Quit) {
                        info!("quit");
                        return Ok(());
                    }
                }
            }
            Event::Resize(cols, rows) => {
                model.resize(cols as usize, rows as usize);
            }
            _ => {}
        }
    }
}
