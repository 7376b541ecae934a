use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::utils::home_path;
use super::Storable;
use crate::config::AUTH_STORE_PATH;
use crate::impl_store;
use crate::state::http::Credentials;

/// Credentials saved by `auth login`.
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct Auth {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
}

impl Storable for Auth {
    fn path() -> Result<PathBuf> {
        home_path(AUTH_STORE_PATH)
    }
}

impl_store!(Auth);

impl Auth {
    /// An API token wins over a global key when both are stored.
    pub fn credentials(&self) -> Option<Credentials> {
        match (&self.token, &self.email, &self.key) {
            (Some(token), _, _) => Some(Credentials::Token(token.clone())),
            (None, Some(email), Some(key)) => Some(Credentials::Key {
                email: email.clone(),
                key: key.clone(),
            }),
            _ => None,
        }
    }

    pub fn set_credentials(&mut self, credentials: Credentials) {
        match credentials {
            Credentials::Token(token) => {
                self.token = Some(token);
                self.email = None;
                self.key = None;
            }
            Credentials::Key { email, key } => {
                self.token = None;
                self.email = Some(email);
                self.key = Some(key);
            }
        }
    }

    pub fn clear(&mut self) {
        self.token = None;
        self.email = None;
        self.key = None;
    }
}
