#![warn(clippy::pedantic)]

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use flare_cli::commands::handle_command;
use flare_cli::state::{State, StateOptions};
use flare_cli::{utils, CLI};

#[tokio::main]
async fn main() -> Result<()> {
    // setup panic hook
    utils::set_hook();

    // create a new CLI instance
    let cli = CLI::parse();

    utils::logs(cli.verbose);

    let state = match State::new(StateOptions::from_env(Duration::from_secs(cli.timeout))).await {
        Ok(state) => state,
        Err(error) => {
            log::error!("{error:#}");
            std::process::exit(1);
        }
    };

    if let Err(error) = handle_command(cli.commands, state).await {
        log::error!("{error:#}");
        std::process::exit(1);
    }

    Ok(())
}
