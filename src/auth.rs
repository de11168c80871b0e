//! District token exchange.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use url::Url;

use crate::config::Credentials;
use crate::error::{RosterError, Result};
use crate::transport::RetryingTransport;

/// Body of the token listing endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub data: Vec<TokenData>,
}

/// One issued token.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenData {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub owner: Option<TokenOwner>,
    pub access_token: String,
    #[serde(default)]
    pub scopes: Vec<String>,
}

/// Owner of an issued token.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenOwner {
    #[serde(rename = "type")]
    pub owner_type: String,
    pub id: String,
}

/// Fetch the bearer token an app holds for a district.
///
/// # Errors
///
/// Returns [`RosterError::Auth`] on a non-success status or when no token
/// has been issued, and transport or decode errors as they occur.
#[tracing::instrument(skip(transport, credentials), fields(client_id = %credentials.client_id))]
pub async fn fetch_district_token(
    transport: &RetryingTransport,
    oauth_url: &str,
    credentials: &Credentials,
    district_id: &str,
) -> Result<String> {
    let url = Url::parse(oauth_url)?;

    let request = transport
        .http()
        .get(url)
        .basic_auth(&credentials.client_id, Some(&credentials.client_secret))
        .query(&[("owner_type", "district"), ("district", district_id)])
        .build()?;

    let response = transport.send(request).await?;
    let status = response.status();

    if !status.is_success() {
        return Err(RosterError::Auth {
            message: format!(
                "HTTP {} error for Clever request /oauth/tokens?owner_type=district&district={}",
                status.as_u16(),
                district_id
            ),
            status_code: Some(status.as_u16()),
        });
    }

    let body = response.bytes().await?;
    let tokens: TokenResponse = serde_json::from_slice(&body)?;

    tokens
        .data
        .into_iter()
        .next()
        .map(|t| t.access_token)
        .ok_or_else(|| RosterError::Auth {
            message: format!("no token issued for district {district_id}"),
            status_code: Some(status.as_u16()),
        })
}
