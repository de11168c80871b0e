//! Pagination utilities for Clever list responses.
//!
//! A list response wraps every record in `{"data": ...}` and carries a
//! `links` array. The `next` link's `starting_after` query parameter is the
//! cursor for the following page; no `next` link means the collection is
//! exhausted.

use serde::{Deserialize, Serialize};
use url::Url;

/// Base used to resolve the relative link URIs the API returns.
const RELATIVE_BASE: &str = "http://localhost/";

/// Query parameter carrying the cursor.
const CURSOR_PARAM: &str = "starting_after";

/// Decoded body of one list response.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound = "T: Deserialize<'de>")]
pub struct ListEnvelope<T> {
    /// Wrapped records, in server order.
    #[serde(default, deserialize_with = "crate::models::null_as_empty")]
    pub data: Vec<Wrapped<T>>,
    /// Navigation links.
    #[serde(default, deserialize_with = "crate::models::null_as_empty")]
    pub links: Vec<Link>,
}

/// A single record as it appears in the `data` array.
#[derive(Debug, Clone, Deserialize)]
pub struct Wrapped<T> {
    pub data: T,
}

/// A navigation link from a list response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Relation type, e.g. `next` or `self`.
    pub rel: String,
    /// Target URI, absolute or relative.
    pub uri: String,
}

impl<T> ListEnvelope<T> {
    /// The cursor of the `next` link, if there is one.
    pub fn next_cursor(&self) -> Option<String> {
        self.links
            .iter()
            .find(|link| link.rel == "next")
            .map(|link| parse_starting_after(&link.uri))
    }

    /// Unwrap the records and resolve the next cursor.
    pub fn into_page(self) -> Page<T> {
        let next_cursor = self.next_cursor();
        Page {
            items: self.data.into_iter().map(|w| w.data).collect(),
            next_cursor,
        }
    }
}

/// Extract the `starting_after` value from a link URI.
///
/// Returns an empty string when the URI cannot be parsed or carries no
/// cursor.
pub fn parse_starting_after(uri: &str) -> String {
    let parsed = Url::parse(uri).or_else(|_| Url::parse(RELATIVE_BASE)?.join(uri));

    parsed
        .ok()
        .and_then(|url| {
            url.query_pairs()
                .find(|(key, _)| key == CURSOR_PARAM)
                .map(|(_, value)| value.into_owned())
        })
        .unwrap_or_default()
}

/// One page of unwrapped records.
#[derive(Debug, Clone)]
pub struct Page<T> {
    /// The records on this page.
    pub items: Vec<T>,
    /// Cursor for the following page; `None` on the last page.
    pub next_cursor: Option<String>,
}

/// Query parameters for list requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageParams {
    /// Maximum records per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Cursor of the record after which the page starts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_after: Option<String>,
}

impl PageParams {
    /// Parameters for the first page of a paginated collection.
    #[must_use]
    pub fn first(limit: u32) -> Self {
        Self {
            limit: Some(limit),
            starting_after: None,
        }
    }
}
