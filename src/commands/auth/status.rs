use anyhow::Result;
use clap::Parser;

use crate::state::http::Credentials;
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "Show which credentials are in use")]
#[group(skip)]
pub struct Options {}

pub async fn handle(_options: Options, state: State) -> Result<()> {
    state.login()?;

    match state.credentials() {
        Some(Credentials::Key { email, .. }) => {
            log::info!("Authenticated as `{email}` with a global API key");
        }
        _ => log::info!("Authenticated with an API token"),
    }

    log::info!("API: {}", state.http.base_url);

    Ok(())
}
