//! Screen state types.
//!
//! The application has two tabs, each showing a list, and a detail view that
//! can be opened on top of either tab.

use crate::domain::Business;

/// Top-level tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    /// Search form and paginated results.
    Search,
    /// The persisted favorites.
    Favorites,
}

/// What is currently on screen.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    /// The list belonging to a tab.
    List(Tab),

    /// Details of one business, opened from `origin`.
    Detail { origin: Tab, business: Business },
}

impl Screen {
    /// The tab this screen belongs to.
    #[must_use]
    pub const fn tab(&self) -> Tab {
        match self {
            Self::List(tab) | Self::Detail { origin: tab, .. } => *tab,
        }
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::List(Tab::Search)
    }
}
