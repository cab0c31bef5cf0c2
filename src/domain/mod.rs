//! Domain layer for the Tablescout client.
//!
//! Core types shared by every other layer, independent of HTTP, storage or
//! rendering concerns.
//!
//! # Organization
//!
//! - [`business`]: The remote restaurant entity
//! - [`query`]: Search queries, fetched pages and positioned result items
//! - [`favorites`]: The ordered favorites collection
//! - [`error`]: Error types and result aliases

pub mod business;
pub mod error;
pub mod favorites;
pub mod query;

pub use business::{Business, BusinessLocation, Category, Coordinates};
pub use error::{Result, TableScoutError};
pub use favorites::FavoriteSet;
pub use query::{Page, ResultItem, SearchQuery, PAGE_SIZE};
