//! Retrying HTTP transport.
//!
//! Every outbound request goes through [`RetryingTransport::send`], which
//! retries transport failures and 429/5xx responses with exponential
//! backoff plus random jitter, and logs one event per attempt.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use rand::Rng;
use reqwest::{Client, Request, Response, StatusCode};

use crate::error::{RosterError, Result};

const USER_AGENT: &str = concat!("repartee/", env!("CARGO_PKG_VERSION"));

/// Default number of attempts per request.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 8;

/// Largest exponent applied to the base delay.
const MAX_BACKOFF_EXPONENT: u32 = 16;

/// How often and how patiently a request is retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first one.
    pub max_attempts: u32,
    /// Delay unit doubled after every failed attempt.
    pub base_delay: Duration,
    /// Upper bound of the uniform random jitter added to each delay.
    pub max_jitter: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            base_delay: Duration::from_secs(1),
            max_jitter: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    /// A policy that retries immediately; handy against local test servers.
    pub fn immediate(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            base_delay: Duration::ZERO,
            max_jitter: Duration::ZERO,
        }
    }

    /// Delay to wait after the given failed attempt (1-indexed).
    pub fn backoff(&self, attempt: u32) -> Duration {
        let exponent = attempt.min(MAX_BACKOFF_EXPONENT);
        let exponential = self.base_delay.saturating_mul(2_u32.saturating_pow(exponent));

        let jitter_millis = self.max_jitter.as_millis() as u64;
        let jitter = if jitter_millis == 0 {
            Duration::ZERO
        } else {
            Duration::from_millis(rand::thread_rng().gen_range(0..=jitter_millis))
        };

        exponential.saturating_add(jitter)
    }
}

/// Whether a status should be retried rather than handed back.
pub fn is_retryable_status(status: StatusCode) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
}

/// HTTP transport with retry, backoff and per-attempt logging.
///
/// Holds no per-request state besides an atomic request counter, so one
/// instance can be shared by every client in the process.
#[derive(Debug)]
pub struct RetryingTransport {
    http: Client,
    policy: RetryPolicy,
    requests: AtomicU64,
}

impl RetryingTransport {
    /// Create a transport with the given retry policy.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(policy: RetryPolicy) -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .timeout(Duration::from_secs(300))
            .build()
            .map_err(RosterError::HttpError)?;

        Ok(Self {
            http,
            policy,
            requests: AtomicU64::new(0),
        })
    }

    /// The wrapped client, for building requests.
    pub fn http(&self) -> &Client {
        &self.http
    }

    /// Send a request, retrying transient failures.
    ///
    /// Returns the first non-retryable response. Once attempts run out the
    /// last response or transport error is returned as is.
    pub async fn send(&self, mut request: Request) -> Result<Response> {
        let request_no = self.requests.fetch_add(1, Ordering::Relaxed) + 1;
        let max_attempts = self.policy.max_attempts.max(1);
        let mut attempt = 0;

        loop {
            attempt += 1;

            // Bodies that cannot be cloned get exactly one attempt.
            let next = if attempt < max_attempts {
                request.try_clone()
            } else {
                None
            };

            let outcome = self.attempt(request, request_no, attempt).await;
            let retry = match &outcome {
                Ok(response) => is_retryable_status(response.status()),
                Err(_) => true,
            };

            match next {
                Some(copy) if retry => {
                    tokio::time::sleep(self.policy.backoff(attempt)).await;
                    request = copy;
                }
                _ => return outcome.map_err(RosterError::HttpError),
            }
        }
    }

    async fn attempt(
        &self,
        request: Request,
        request_no: u64,
        attempt: u32,
    ) -> core::result::Result<Response, reqwest::Error> {
        let method = request.method().clone();
        let host = request.url().host_str().unwrap_or_default().to_string();
        let path = request.url().path().to_string();

        let started = Instant::now();
        let outcome = self.http.execute(request).await;
        let took = started.elapsed();
        // `None` when no response arrived.
        let status: Option<u16> = outcome.as_ref().ok().map(|r| r.status().as_u16());

        match &outcome {
            Ok(response) if is_retryable_status(response.status()) => {
                tracing::error!(
                    %method,
                    %host,
                    %path,
                    ?status,
                    ?took,
                    request = request_no,
                    attempt,
                    "request attempt failed"
                );
            }
            Ok(_) => {
                tracing::debug!(
                    %method,
                    %host,
                    %path,
                    ?status,
                    ?took,
                    request = request_no,
                    attempt,
                    "request attempt completed"
                );
            }
            Err(e) => {
                tracing::error!(
                    %method,
                    %host,
                    %path,
                    ?status,
                    ?took,
                    request = request_no,
                    attempt,
                    error = %e,
                    "request attempt failed"
                );
            }
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_attempts, 8);
    }

    #[test]
    fn test_backoff_grows_exponentially() {
        let policy = RetryPolicy {
            max_attempts: 8,
            base_delay: Duration::from_millis(10),
            max_jitter: Duration::ZERO,
        };
        assert_eq!(policy.backoff(1), Duration::from_millis(20));
        assert_eq!(policy.backoff(2), Duration::from_millis(40));
        assert_eq!(policy.backoff(3), Duration::from_millis(80));
    }

    #[test]
    fn test_backoff_jitter_is_bounded() {
        let policy = RetryPolicy {
            max_attempts: 8,
            base_delay: Duration::from_millis(10),
            max_jitter: Duration::from_millis(5),
        };
        for _ in 0..50 {
            let delay = policy.backoff(1);
            assert!(delay >= Duration::from_millis(20));
            assert!(delay <= Duration::from_millis(25));
        }
    }

    #[test]
    fn test_backoff_saturates() {
        let policy = RetryPolicy::default();
        let delay = policy.backoff(u32::MAX);
        assert!(delay >= Duration::from_secs(1 << MAX_BACKOFF_EXPONENT));
    }

    #[test]
    fn test_retryable_statuses() {
        assert!(is_retryable_status(StatusCode::TOO_MANY_REQUESTS));
        assert!(is_retryable_status(StatusCode::INTERNAL_SERVER_ERROR));
        assert!(is_retryable_status(StatusCode::SERVICE_UNAVAILABLE));
        assert!(!is_retryable_status(StatusCode::OK));
        assert!(!is_retryable_status(StatusCode::NOT_FOUND));
        assert!(!is_retryable_status(StatusCode::UNAUTHORIZED));
    }
}
