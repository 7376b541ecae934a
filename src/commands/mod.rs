pub mod auth;
pub mod completions;
pub mod subscriptions;

use anyhow::Result;
use clap::Subcommand;

use crate::state::State;

#[derive(Debug, Subcommand)]
pub enum Commands {
    Auth(auth::Options),
    #[clap(alias = "subs", alias = "subscription")]
    Subscriptions(subscriptions::Options),
    Completions(completions::Options),
}

pub async fn handle_command(command: Commands, state: State) -> Result<()> {
    match command {
        Commands::Auth(options) => auth::handle(options, state).await,
        Commands::Completions(options) => {
            completions::handle(&options);

            Ok(())
        }

        authorized_command => {
            // make sure there is something to authenticate with
            state.login()?;

            match authorized_command {
                Commands::Subscriptions(options) => subscriptions::handle(options, state).await,
                Commands::Auth(_) | Commands::Completions(_) => unreachable!(),
            }
        }
    }
}
