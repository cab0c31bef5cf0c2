//! User interface layer.
//!
//! This module turns application state into text for the terminal. It does no
//! I/O itself.
//!
//! # Architecture
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → String
//! ```
//!
//! # Modules
//!
//! - [`present`]: Merges favorite state into search results
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Text rendering of view models
//! - [`helpers`]: Field formatting (price tiers, ratings, placeholders)
//! - [`theme`]: Colors and ANSI escape sequence generation

pub mod helpers;
pub mod present;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use present::{present, PresentedItem};
pub use renderer::{render, render_error};
pub use theme::Theme;
pub use viewmodel::{DetailView, EmptyState, FooterInfo, HeaderInfo, InfoRow, RowView, UIViewModel};
