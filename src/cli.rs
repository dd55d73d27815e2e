//! Command-line argument parsing.

use clap::Parser;
use std::path::PathBuf;

/// A minimal terminal text editor
#[derive(Parser, Debug)]
#[command(name = "dira", version, about = "A minimal terminal text editor")]
pub struct CliArgs {
    /// File to open
    #[arg(value_name = "FILE")]
    pub path: Option<PathBuf>,

    /// Use an alternate configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}
