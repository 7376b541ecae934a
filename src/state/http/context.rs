use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use super::error::TransportError;

/// Carries cancellation and an optional deadline through a request.
///
/// Clones share the same cancellation token, so cancelling any clone
/// aborts every request running under it.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    token: CancellationToken,
    deadline: Option<Instant>,
}

impl RequestContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self::with_deadline(Instant::now() + timeout)
    }

    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            token: CancellationToken::new(),
            deadline: Some(deadline),
        }
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    pub fn cancellation_token(&self) -> CancellationToken {
        self.token.clone()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    fn is_expired(&self) -> bool {
        self.deadline
            .map_or(false, |deadline| Instant::now() >= deadline)
    }

    /// Drives `future` to completion unless the context is cancelled or
    /// its deadline passes first.
    pub async fn run<F>(&self, future: F) -> Result<F::Output, TransportError>
    where
        F: Future,
    {
        if self.is_cancelled() {
            return Err(TransportError::Cancelled);
        }

        if self.is_expired() {
            return Err(TransportError::DeadlineExceeded);
        }

        // the sleep is only polled when a deadline is set
        let deadline = self.deadline.unwrap_or_else(Instant::now);

        tokio::select! {
            biased;

            _ = self.token.cancelled() => Err(TransportError::Cancelled),
            _ = tokio::time::sleep_until(deadline), if self.deadline.is_some() => {
                Err(TransportError::DeadlineExceeded)
            }
            output = future => Ok(output),
        }
    }
}
