use reqwest::StatusCode;
use thiserror::Error;

use super::types::ResponseInfo;

/// Failures of the HTTP layer, surfaced to callers unchanged.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Request cancelled")]
    Cancelled,

    #[error("Request deadline exceeded")]
    DeadlineExceeded,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{}", api_error_message(.status, .errors))]
    Api {
        status: StatusCode,
        errors: Vec<ResponseInfo>,
    },

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

impl TransportError {
    /// True when the request was abandoned because of the caller's context.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, Self::Cancelled | Self::DeadlineExceeded)
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(error) => error.status(),
            _ => None,
        }
    }
}

fn api_error_message(status: &StatusCode, errors: &[ResponseInfo]) -> String {
    if errors.is_empty() {
        return format!("Error: HTTP {status}");
    }

    let errors = errors
        .iter()
        .map(|error| format!("{} ({})", error.message, error.code))
        .collect::<Vec<_>>()
        .join(", ");

    format!("Error: HTTP {status}: {errors}")
}
