//! Worker request and response types.
//!
//! These are the effectful operations the event handler asks for, and the
//! results that come back to it. Fetch requests and responses carry the
//! [`FetchTicket`] the session issued, so late pages can be recognized.
//! Favorites requests carry a revision number from
//! [`AppState`](crate::AppState) for the same reason.

use crate::app::session::{FetchRequest, FetchTicket};
use crate::domain::{Business, FavoriteSet, Page};

/// Work for the worker to perform.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkerMessage {
    /// Fetch one page of search results.
    FetchPage(FetchRequest),

    /// Read the persisted favorites.
    LoadFavorites { revision: u64 },

    /// Toggle a business in `current` and persist the result.
    ToggleFavorite {
        revision: u64,
        business: Business,
        /// The caller's favorites at the time of the toggle.
        current: FavoriteSet,
    },
}

impl WorkerMessage {
    /// Short name for logging.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::FetchPage(_) => "fetch_page",
            Self::LoadFavorites { .. } => "load_favorites",
            Self::ToggleFavorite { .. } => "toggle_favorite",
        }
    }
}

/// Result of a [`WorkerMessage`].
#[derive(Debug, Clone, PartialEq)]
pub enum WorkerResponse {
    /// A page was fetched for the request tagged `ticket`.
    PageFetched { ticket: FetchTicket, page: Page },

    /// The fetch tagged `ticket` failed.
    FetchFailed { ticket: FetchTicket, message: String },

    /// Favorites were read from storage.
    FavoritesLoaded { revision: u64, favorites: FavoriteSet },

    /// A toggle was persisted; `favorites` is the new set.
    FavoriteToggled { revision: u64, favorites: FavoriteSet },

    /// A toggle could not be persisted. The caller's set is still current.
    ToggleFailed { message: String },
}
