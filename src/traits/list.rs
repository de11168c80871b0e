//! List trait for draining paginated collections.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::client::CleverClient;
use crate::error::{RosterError, Result};
use crate::pagination::{ListEnvelope, Page, PageParams};

/// Page size used for every paginated collection.
pub const DEFAULT_PAGE_LIMIT: u32 = 1000;

/// List an entity collection, following `starting_after` cursors.
///
/// Implementors only name their endpoint; requesting, decoding and the
/// cursor loop are shared.
///
/// # Example
///
/// ```ignore
/// use repartee::{CleverClient, List, Student, DEFAULT_PAGE_LIMIT};
///
/// let students = Student::list_all(&client, DEFAULT_PAGE_LIMIT).await?;
/// ```
#[async_trait]
pub trait List: DeserializeOwned + Send + Sized {
    /// Collection path relative to the API base, e.g. `students`.
    const COLLECTION: &'static str;

    /// Whether the endpoint accepts `limit` and `starting_after`.
    const PAGINATED: bool = true;

    /// Fetch a single page.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Status`] for a non-success response, naming the
    /// endpoint and the cursor in use, and transport or decode errors as
    /// they occur.
    async fn list_page(client: &CleverClient, params: &PageParams) -> Result<Page<Self>> {
        let response = client.get_with_query(Self::COLLECTION, params).await?;
        let status = response.status();

        if !status.is_success() {
            return Err(RosterError::Status {
                endpoint: Self::COLLECTION.to_string(),
                status: status.as_u16(),
                cursor: params.starting_after.clone(),
            });
        }

        let body = response.bytes().await?;
        let envelope: ListEnvelope<Self> = serde_json::from_slice(&body)?;
        Ok(envelope.into_page())
    }

    /// Fetch every record in the collection, in page order.
    ///
    /// Either the whole collection is returned or the first error is; a
    /// partially fetched collection is never handed back.
    ///
    /// # Errors
    ///
    /// Returns an error if any page request fails.
    async fn list_all(client: &CleverClient, limit: u32) -> Result<Vec<Self>> {
        let mut params = if Self::PAGINATED {
            PageParams::first(limit)
        } else {
            PageParams::default()
        };
        let mut all_items = Vec::new();
        let mut pages = 0_u32;

        loop {
            let page = Self::list_page(client, &params).await?;
            pages += 1;
            all_items.extend(page.items);

            match page.next_cursor {
                Some(cursor) if Self::PAGINATED => params.starting_after = Some(cursor),
                _ => break,
            }
        }

        tracing::debug!(
            collection = Self::COLLECTION,
            pages,
            records = all_items.len(),
            "fetched collection"
        );

        Ok(all_items)
    }
}

/// Records that carry a unique Clever identifier.
pub trait Identified {
    /// The record's identifier.
    fn id(&self) -> &str;
}
