//! Remote search API.
//!
//! - `client`: the [`SearchApi`] trait and its `reqwest` implementation

pub mod client;

pub use client::{SearchApi, SearchClient};
