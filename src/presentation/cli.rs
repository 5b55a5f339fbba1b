//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! Global flags (--json, --verbose, --config) are inherited by all
//! subcommands. Running without a subcommand opens the interactive shell.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Recipebook - manage recipes from the terminal
#[derive(Parser, Debug)]
#[command(name = "recipebook")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'recipebook' without arguments for the interactive shell.")]
pub struct Cli {
    /// Output JSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to a config file (overrides ./recipebook.toml and the user config)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Interactive menu to list, add, update and delete recipes
    Shell,

    /// Scripted walkthrough of create, get, list, update and delete
    Demo,
}
