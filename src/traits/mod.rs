//! Trait definitions for Clever operations.
//!
//! Each entity type implements the traits it supports; the shared default
//! methods hold the request and pagination logic.

mod list;

pub use list::{Identified, List, DEFAULT_PAGE_LIMIT};
