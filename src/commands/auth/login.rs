use anyhow::{bail, Result};
use clap::Parser;

use crate::config::EXEC_NAME;
use crate::state::http::Credentials;
use crate::state::State;
use crate::store::Store;

#[derive(Debug, Parser, Default, PartialEq, Eq)]
#[clap(about = "Save credentials for later commands")]
#[group(skip)]
pub struct Options {
    #[clap(long, help = "API token to authenticate with", conflicts_with_all = ["email", "key"])]
    pub token: Option<String>,

    #[clap(long, help = "Account email, used together with a global API key")]
    pub email: Option<String>,

    #[clap(long, help = "Global API key, used together with the account email", requires = "email")]
    pub key: Option<String>,
}

pub async fn handle(options: Options, mut state: State) -> Result<()> {
    let credentials = credentials_from_options(options)?;

    let kind = match credentials {
        Credentials::Token(_) => "API token",
        Credentials::Key { .. } => "global API key",
    };

    state.auth.set_credentials(credentials);
    state.auth.save().await?;

    log::info!("Logged in with an {kind}");

    Ok(())
}

fn credentials_from_options(options: Options) -> Result<Credentials> {
    let credentials = match options {
        Options {
            token: Some(token), ..
        } => Credentials::Token(token),

        Options {
            email: Some(email),
            key: Some(key),
            ..
        } => Credentials::Key { email, key },

        Options {
            email: Some(email),
            ..
        } => {
            let key = dialoguer::Password::new()
                .with_prompt("Global API key")
                .interact()?;

            Credentials::Key { email, key }
        }

        Options { key: Some(_), .. } => bail!(
            "A global API key needs an email, run `{} auth login --help` for more info",
            EXEC_NAME
        ),

        Options { .. } => {
            let token = dialoguer::Password::new()
                .with_prompt("API token")
                .interact()?;

            Credentials::Token(token)
        }
    };

    match &credentials {
        Credentials::Token(token) if token.trim().is_empty() => bail!("The API token is empty"),
        Credentials::Key { key, .. } if key.trim().is_empty() => bail!("The API key is empty"),
        _ => Ok(credentials),
    }
}
