use anyhow::{ensure, Result};
use clap::Parser;

use crate::config::EXEC_NAME;
use crate::state::State;
use crate::store::Store;

#[derive(Debug, Parser)]
#[clap(about = "Remove the stored credentials")]
#[group(skip)]
pub struct Options {}

pub async fn handle(_options: Options, mut state: State) -> Result<()> {
    ensure!(
        state.auth.credentials().is_some(),
        "You are not logged in. Please run `{} auth login` first.",
        EXEC_NAME
    );

    state.auth.clear();
    state.auth.save().await?;

    log::info!("You have been logged out");

    Ok(())
}
