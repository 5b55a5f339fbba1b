//! Recipebook CLI
//!
//! Usage: recipebook [COMMAND]
//!
//! Commands:
//!   shell   Interactive menu (default)
//!   demo    Scripted create/get/list/update/delete walkthrough

mod commands;

use anyhow::{bail, Result};
use clap::Parser;
use tracing::warn;

use recipebook::config::Config;
use recipebook::logging::init_logging;
use recipebook::presentation::{create_session, Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir()?;
    let (mut config, warnings) = Config::load_layered(cli.config.as_deref(), Some(&cwd))?;
    config.output.verbosity = config.output.verbosity.raised_by(cli.verbose);
    if cli.json {
        config.output.json = true;
    }

    init_logging(config.output.verbosity);
    for warning in &warnings {
        warn!("{}", warning);
    }

    let command = cli.command.unwrap_or(Commands::Shell);
    if command == Commands::Shell && cli.json {
        bail!("--json is not supported by the interactive shell; try `recipebook demo --json`");
    }

    let session = create_session();
    let result = match command {
        Commands::Shell => commands::shell::cmd_shell(&session, &config.display),
        Commands::Demo => commands::demo::cmd_demo(
            &session,
            &config.display,
            config.output.json,
            &mut std::io::stdout().lock(),
        ),
    };
    session.close();

    result
}
