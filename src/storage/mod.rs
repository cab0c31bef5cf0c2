//! Storage layer for locally persisted state.
//!
//! The only persisted state is the favorites collection. It lives under a single
//! key of a string key-value store, serialized as a JSON array of businesses.
//!
//! # Modules
//!
//! - `backend`: Key-value store trait
//! - `json`: JSON file implementation with atomic writes
//! - `memory`: In-memory implementation
//! - `favorites`: Load/toggle contract for the favorites key

pub mod backend;
pub mod favorites;
pub mod json;
pub mod memory;

pub use backend::KeyValueStore;
pub use favorites::{FavoritesStore, FAVORITES_KEY};
pub use json::JsonFileStore;
pub use memory::MemoryStore;
