//! Clever roster comparison library.
//!
//! Fetches a district's roster from the Clever API under two different app
//! credentials and reports the records one app can see but the other
//! cannot.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use repartee::{App, CleverClient, List, RetryPolicy, RetryingTransport, Settings, Student};
//!
//! #[tokio::main]
//! async fn main() -> repartee::Result<()> {
//!     let settings = Settings::from_lookup(|key| std::env::var(key).ok())?;
//!     let transport = Arc::new(RetryingTransport::new(RetryPolicy::default())?);
//!
//!     // Exchange the app credentials for a district token
//!     let client = CleverClient::connect(transport, &settings, App::Accelerator, "district-id").await?;
//!
//!     // Drain every page of students
//!     let students = Student::list_all(&client, repartee::DEFAULT_PAGE_LIMIT).await?;
//!     println!("Found {} students", students.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`RetryingTransport`] sends every request, retrying transport errors
//!   and 429/5xx responses with exponential jitter backoff.
//! - [`List`] is implemented by every entity type and follows the
//!   `starting_after` cursor of each page's `next` link until none is left.
//! - [`Roster`] gathers all collections for one app; [`MissingReport`]
//!   compares two rosters.
//!
//! # Configuration
//!
//! - `CLEVER_ID`, `CLEVER_SECRET` (required) - Accelerator app credentials
//! - `MAP_CLEVER_ID`, `MAP_CLEVER_SECRET` (required) - Growth app credentials
//! - `FROM_EMAIL`, `TO_EMAIL`, `GMAIL_PASSWORD` (optional) - report mail
//! - `CLEVER_API_URL`, `CLEVER_OAUTH_URL` (optional) - endpoint overrides

pub mod auth;
mod build_info;
pub mod cli;
mod client;
pub mod commands;
mod config;
mod error;
pub mod mail;
mod models;
mod output;
mod pagination;
mod report;
mod roster;
mod traits;
mod transport;

// Re-export core types
pub use build_info::BuildInfo;
pub use client::CleverClient;
pub use config::{App, Credentials, MailSettings, Settings};
pub use error::{Result, RosterError};
pub use output::{count_table, PrettyPrint};
pub use pagination::{parse_starting_after, Link, ListEnvelope, Page, PageParams, Wrapped};
pub use report::{missing_ids, missing_schools, missing_students, missing_teachers, MissingReport};
pub use roster::Roster;
pub use transport::{is_retryable_status, RetryPolicy, RetryingTransport, DEFAULT_MAX_ATTEMPTS};

// Re-export traits
pub use traits::{Identified, List, DEFAULT_PAGE_LIMIT};

// Re-export models
pub use models::{
    District, DistrictAdmin, Name, Principal, School, SchoolAdmin, Section, Student, Teacher,
};
