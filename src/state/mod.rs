pub mod http;

use std::time::Duration;

use anyhow::{ensure, Result};

use self::http::{Credentials, HttpClient, RequestContext};
use crate::config::{EMAIL_ENV, EXEC_NAME, KEY_ENV, TOKEN_ENV};
use crate::store::auth::Auth;
use crate::store::Store;

#[derive(Debug)]
pub struct State {
    pub auth: Auth,
    pub http: HttpClient,
    /// Context every API request of this invocation runs under.
    pub ctx: RequestContext,
    credentials: Option<Credentials>,
}

pub struct StateOptions {
    pub override_credentials: Option<Credentials>,
    pub override_api_url: Option<String>,
    pub timeout: Duration,
}

impl StateOptions {
    /// Reads the overrides from the environment.
    pub fn from_env(timeout: Duration) -> Self {
        Self {
            override_credentials: credentials_from_env(|key| std::env::var(key).ok()),
            override_api_url: std::env::var("API_URL").ok(),
            timeout,
        }
    }
}

impl State {
    pub async fn new(options: StateOptions) -> Result<Self> {
        let auth = Auth::new().await?;

        // prefer the override credentials over the stored ones
        let credentials = options
            .override_credentials
            .or_else(|| auth.credentials());

        let http = HttpClient::new(
            credentials.clone(),
            options.override_api_url.or_else(|| auth.api_url.clone()),
        )?;

        Ok(State {
            ctx: RequestContext::with_timeout(options.timeout),
            credentials,
            http,
            auth,
        })
    }

    /// Fails unless some credentials were found.
    pub fn login(&self) -> Result<()> {
        ensure!(
            self.credentials.is_some(),
            "You are not logged in. Please run `{} auth login` or set `{}`.",
            EXEC_NAME,
            TOKEN_ENV
        );

        Ok(())
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }
}

fn credentials_from_env<F>(var: F) -> Option<Credentials>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(token) = var(TOKEN_ENV) {
        return Some(Credentials::Token(token));
    }

    match (var(EMAIL_ENV), var(KEY_ENV)) {
        (Some(email), Some(key)) => Some(Credentials::Key { email, key }),
        _ => None,
    }
}
