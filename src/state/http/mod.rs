mod context;
mod error;
pub mod types;

use anyhow::Result;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client as AsyncClient, Method, StatusCode};

pub use self::context::RequestContext;
pub use self::error::TransportError;
use self::types::ResponseMeta;
use crate::config::{API_BASE_URL, VERSION};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    /// Scoped API token, sent as a bearer token.
    Token(String),
    /// Legacy global API key, paired with the account email.
    Key { email: String, key: String },
}

impl Credentials {
    fn apply(&self, headers: &mut HeaderMap) -> Result<(), TransportError> {
        match self {
            Self::Token(token) => {
                let mut value = HeaderValue::from_str(&format!("Bearer {token}"))?;
                value.set_sensitive(true);

                headers.insert("authorization", value);
            }

            Self::Key { email, key } => {
                let mut value = HeaderValue::from_str(key)?;
                value.set_sensitive(true);

                headers.insert("x-auth-email", HeaderValue::from_str(email)?);
                headers.insert("x-auth-key", value);
            }
        }

        Ok(())
    }
}

/// The capability the API accessors are written against.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends one request and returns the raw body of a successful response.
    async fn do_request(
        &self,
        ctx: &RequestContext,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<Vec<u8>, TransportError>;
}

#[derive(Debug, Clone)]
pub struct HttpClient {
    pub client: AsyncClient,
    pub base_url: String,
    pub ua: String,
}

impl HttpClient {
    pub fn new(credentials: Option<Credentials>, api_url: Option<String>) -> Result<Self> {
        let mut headers = HeaderMap::new();

        headers.insert("accept", HeaderValue::from_static("application/json"));

        if let Some(credentials) = credentials {
            credentials.apply(&mut headers)?;
        }

        let ua = format!(
            "flare_cli/{VERSION} on {}",
            sys_info::os_type().unwrap_or_else(|_| "unknown".to_string())
        );

        let base_url = api_url
            .unwrap_or_else(|| API_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            client: AsyncClient::builder()
                .user_agent(ua.clone())
                .default_headers(headers)
                .build()?,
            base_url,
            ua,
        })
    }

    async fn handle_response(&self, response: reqwest::Response) -> Result<Vec<u8>, TransportError> {
        let status = response.status();

        if !status.is_success() {
            return Err(self.handle_error(response, status).await);
        }

        Ok(response.bytes().await?.to_vec())
    }

    async fn handle_error(&self, response: reqwest::Response, status: StatusCode) -> TransportError {
        let errors = match response.bytes().await {
            Ok(body) => match serde_json::from_slice::<ResponseMeta>(&body) {
                Ok(meta) => meta.errors,
                Err(error) => {
                    log::debug!("Error deserialize message: {:#?}", error);

                    vec![]
                }
            },
            Err(error) => return TransportError::Http(error),
        };

        TransportError::Api { status, errors }
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn do_request(
        &self,
        ctx: &RequestContext,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<Vec<u8>, TransportError> {
        if ctx.is_cancelled() {
            return Err(TransportError::Cancelled);
        }

        log::debug!("request: {} {}", method, path);

        let mut request = self
            .client
            .request(method, format!("{}{}", self.base_url, path));

        if let Some(body) = body {
            // show body in debug mode / when developing
            #[cfg(debug_assertions)]
            log::debug!("request body: {}", String::from_utf8_lossy(&body));

            request = request.header("content-type", "application/json").body(body);
        }

        let request = request.build()?;

        #[cfg(debug_assertions)]
        let now = tokio::time::Instant::now();

        let response = ctx
            .run(async {
                let response = self.client.execute(request).await?;

                self.handle_response(response).await
            })
            .await?;

        #[cfg(debug_assertions)]
        log::debug!("response in: {:#?}", now.elapsed());

        response
    }
}
