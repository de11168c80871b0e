//! Clever API client.
//!
//! Low-level HTTP client that holds the district bearer token and sends
//! every request through the shared [`RetryingTransport`]. Collection
//! fetching is implemented via the [`List`](crate::List) trait on entity
//! types.

use std::sync::Arc;

use reqwest::Response;
use serde::Serialize;
use url::Url;

use crate::auth;
use crate::config::{App, Settings};
use crate::error::Result;
use crate::transport::RetryingTransport;

/// Authenticated Clever API client.
///
/// This struct is cheaply cloneable; clones share the same transport and
/// connection pool.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use repartee::{CleverClient, RetryPolicy, RetryingTransport};
///
/// # fn example() -> repartee::Result<()> {
/// let transport = Arc::new(RetryingTransport::new(RetryPolicy::default())?);
/// let client = CleverClient::new(transport, "district-token", "https://api.clever.com/v2.1")?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct CleverClient {
    transport: Arc<RetryingTransport>,
    base_url: Arc<Url>,
    token: String,
}

impl std::fmt::Debug for CleverClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CleverClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl CleverClient {
    /// Exchange the app's credentials for a district token and build a client.
    ///
    /// # Errors
    ///
    /// Returns an error if the token exchange fails or the API URL is invalid.
    #[tracing::instrument(skip(transport, settings))]
    pub async fn connect(
        transport: Arc<RetryingTransport>,
        settings: &Settings,
        app: App,
        district_id: &str,
    ) -> Result<Self> {
        let token = auth::fetch_district_token(
            &transport,
            &settings.oauth_url,
            settings.credentials(app),
            district_id,
        )
        .await?;

        Self::new(transport, &token, &settings.api_url)
    }

    /// Create a client with an existing bearer token.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid.
    pub fn new(transport: Arc<RetryingTransport>, token: &str, base_url: &str) -> Result<Self> {
        // Ensure base URL ends with /
        let base_url_str = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };

        let base_url = Url::parse(&base_url_str)?;

        Ok(Self {
            transport,
            base_url: Arc::new(base_url),
            token: token.to_string(),
        })
    }

    /// Make a GET request with query parameters.
    ///
    /// The response is returned whatever its status; callers decide how to
    /// report failures.
    pub async fn get_with_query<Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<Response> {
        let url = self.base_url.join(path)?;

        let request = self
            .transport
            .http()
            .get(url)
            .bearer_auth(&self.token)
            .query(query)
            .build()?;

        self.transport.send(request).await
    }
}
