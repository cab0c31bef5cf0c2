//! View model types representing renderable UI state.
//!
//! View models are created via `AppState::compute_viewmodel()` and consumed by
//! the renderer. They contain no business logic, only display-ready data.
//!
//! # Example
//!
//! ```rust
//! use tablescout::ui::viewmodel::{FooterInfo, HeaderInfo, UIViewModel};
//!
//! let vm = UIViewModel {
//!     header: HeaderInfo { title: "Favorite Restaurants (0)".to_string() },
//!     rows: vec![],
//!     footer: FooterInfo { loading: false, keybindings: "quit".to_string() },
//!     empty_state: None,
//!     detail: None,
//! };
//! assert!(vm.rows.is_empty());
//! ```

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct UIViewModel {
    pub header: HeaderInfo,

    /// List rows, in display order. Empty on the detail screen.
    pub rows: Vec<RowView>,

    pub footer: FooterInfo,

    /// Shown instead of the list when it has nothing to display.
    pub empty_state: Option<EmptyState>,

    /// Present only on the detail screen.
    pub detail: Option<DetailView>,
}

/// One restaurant row in a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    /// Stable key for the row. Unique within a list.
    pub key: String,
    pub name: String,
    /// `"{address1}, {city}"`.
    pub address: String,
    pub rating: String,
    /// `"(n reviews)"`.
    pub reviews: String,
    /// One `$` per tier, or `-`.
    pub price: String,
    pub is_favorite: bool,
}

/// Detail screen contents for one restaurant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub name: String,
    pub image_url: Option<String>,
    /// Labelled fields; missing values are `-`.
    pub rows: Vec<InfoRow>,
    pub map_url: Option<String>,
    pub phone_url: Option<String>,
    pub is_favorite: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoRow {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// A fetch is in flight.
    pub loading: bool,

    /// Command help text.
    pub keybindings: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
}
