//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the single mutable state container the host
//! holds. It combines the search session, the favorites last read from storage,
//! and the current screen. View models are computed on demand from a snapshot
//! of this state and never cached.
//!
//! # Example
//!
//! ```rust
//! use tablescout::AppState;
//!
//! let state = AppState::new();
//! let viewmodel = state.compute_viewmodel();
//! assert!(viewmodel.rows.is_empty());
//! ```

use super::screens::{Screen, Tab};
use super::session::SearchSession;
use crate::domain::{Business, FavoriteSet};
use crate::ui::helpers::{format_price, format_rating, format_reviews, or_dash};
use crate::ui::present::present;
use crate::ui::viewmodel::{
    DetailView, EmptyState, FooterInfo, HeaderInfo, InfoRow, RowView, UIViewModel,
};

/// Central application state container.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Current screen.
    pub screen: Screen,

    /// Query, accumulated results and pagination flags.
    pub session: SearchSession,

    /// Favorites as last loaded or successfully toggled.
    ///
    /// Replaced only by worker responses; a failed toggle leaves it untouched.
    pub favorites: FavoriteSet,

    /// Revision of the last favorites request handed out.
    favorites_requested: u64,

    /// Revision of the favorites response last applied.
    favorites_applied: u64,
}

impl AppState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Numbers the next favorites load or toggle.
    pub(crate) fn next_favorites_revision(&mut self) -> u64 {
        self.favorites_requested += 1;
        self.favorites_requested
    }

    /// Replaces the favorites with the result of request `revision`.
    ///
    /// Results of requests older than the one last applied are dropped, so a
    /// load that read storage before a toggle cannot undo it on screen.
    /// Returns whether the displayed favorites changed.
    pub(crate) fn apply_favorites(&mut self, revision: u64, favorites: &FavoriteSet) -> bool {
        if revision <= self.favorites_applied {
            tracing::debug!(
                revision = revision,
                applied = self.favorites_applied,
                "dropping outdated favorites"
            );
            return false;
        }
        self.favorites_applied = revision;
        if &self.favorites == favorites {
            return false;
        }
        self.favorites.clone_from(favorites);
        true
    }

    /// Business at `index` in the list currently on screen.
    ///
    /// Returns `None` on the detail screen or when `index` is out of range.
    #[must_use]
    pub fn business_at(&self, index: usize) -> Option<&Business> {
        match self.screen {
            Screen::List(Tab::Search) => self.session.results().get(index).map(|r| &r.business),
            Screen::List(Tab::Favorites) => self.favorites.get(index),
            Screen::Detail { .. } => None,
        }
    }

    /// Computes a renderable view model for the current screen.
    #[must_use]
    pub fn compute_viewmodel(&self) -> UIViewModel {
        match &self.screen {
            Screen::List(Tab::Search) => self.compute_search_viewmodel(),
            Screen::List(Tab::Favorites) => self.compute_favorites_viewmodel(),
            Screen::Detail { business, .. } => self.compute_detail_viewmodel(business),
        }
    }

    fn compute_search_viewmodel(&self) -> UIViewModel {
        let rows: Vec<RowView> = present(self.session.results(), &self.favorites)
            .into_iter()
            .map(|p| Self::compute_row(p.item.display_key.clone(), &p.item.business, p.is_favorite))
            .collect();

        let title = self.session.query().map_or_else(
            || "Search restaurants".to_string(),
            |q| {
                let term = if q.term().trim().is_empty() { "anything" } else { q.term() };
                format!("{term} in {} ({})", q.location().trim(), rows.len())
            },
        );

        let loading = self.session.is_loading();
        let empty_state = (rows.is_empty() && !loading).then(|| EmptyState {
            message: "No restaurants found. Try a new search!".to_string(),
        });

        UIViewModel {
            header: HeaderInfo { title },
            rows,
            footer: FooterInfo {
                loading,
                keybindings: "search <term> in <location>  more  open <n>  fav <n>  favorites  quit"
                    .to_string(),
            },
            empty_state,
            detail: None,
        }
    }

    fn compute_favorites_viewmodel(&self) -> UIViewModel {
        let rows: Vec<RowView> = self
            .favorites
            .iter()
            .map(|b| Self::compute_row(b.id.clone(), b, true))
            .collect();

        let empty_state = rows.is_empty().then(|| EmptyState {
            message: "No favorite restaurants yet.".to_string(),
        });

        UIViewModel {
            header: HeaderInfo {
                title: format!("Favorite Restaurants ({})", rows.len()),
            },
            rows,
            footer: FooterInfo {
                loading: false,
                keybindings: "open <n>  fav <n>  search  quit".to_string(),
            },
            empty_state,
            detail: None,
        }
    }

    fn compute_detail_viewmodel(&self, business: &Business) -> UIViewModel {
        let rating = business.rating.map(|r| r.to_string()).unwrap_or_default();
        let price = business.price.clone().unwrap_or_default();

        let rows = vec![
            InfoRow { label: "Rating", value: or_dash(&rating) },
            InfoRow { label: "Price", value: or_dash(&price) },
            InfoRow { label: "Category", value: or_dash(&business.category_titles()) },
            InfoRow { label: "Location", value: or_dash(&business.address_line()) },
            InfoRow { label: "Phone", value: or_dash(business.phone.as_deref().unwrap_or_default()) },
        ];

        UIViewModel {
            header: HeaderInfo {
                title: business.name.clone(),
            },
            rows: vec![],
            footer: FooterInfo {
                loading: false,
                keybindings: "fav  back  quit".to_string(),
            },
            empty_state: None,
            detail: Some(DetailView {
                name: business.name.clone(),
                image_url: business.image_url.clone(),
                rows,
                map_url: business.map_url(),
                phone_url: business.phone_url(),
                is_favorite: self.favorites.contains(&business.id),
            }),
        }
    }

    /// Builds the display row for one business.
    fn compute_row(key: String, business: &Business, is_favorite: bool) -> RowView {
        RowView {
            key,
            name: business.name.clone(),
            address: business.address_line(),
            rating: format_rating(business.rating),
            reviews: format_reviews(business.review_count),
            price: format_price(business),
            is_favorite,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BusinessLocation, Coordinates, Page};

    fn loaded_state() -> AppState {
        let mut state = AppState::new();
        let request = state.session.submit("pizza", "New York").unwrap();
        let mut joes = Business::new("joes", "Joe's Pizza");
        joes.location = Some(BusinessLocation {
            address1: Some("7 Carmine St".into()),
            city: Some("New York".into()),
        });
        joes.rating = Some(4.5);
        joes.review_count = Some(3120);
        joes.price = Some("$".into());
        state.session.apply_page(
            request.ticket,
            Page { offset: 0, items: vec![joes, Business::new("lucali", "Lucali")] },
        );
        state
    }

    #[test]
    fn search_rows_carry_favorite_flags_and_keys() {
        let mut state = loaded_state();
        state.favorites = FavoriteSet::from_businesses(vec![Business::new("lucali", "Lucali")]);

        let vm = state.compute_viewmodel();
        assert_eq!(vm.header.title, "pizza in New York (2)");
        assert_eq!(vm.rows.len(), 2);
        assert_eq!(vm.rows[0].key, "joes-0");
        assert_eq!(vm.rows[0].address, "7 Carmine St, New York");
        assert_eq!(vm.rows[0].rating, "4.5");
        assert_eq!(vm.rows[0].reviews, "(3120 reviews)");
        assert_eq!(vm.rows[0].price, "$");
        assert!(!vm.rows[0].is_favorite);
        assert_eq!(vm.rows[1].price, "-");
        assert!(vm.rows[1].is_favorite);
        assert!(vm.empty_state.is_none());
    }

    #[test]
    fn empty_search_shows_hint_unless_loading() {
        let mut state = AppState::new();
        let vm = state.compute_viewmodel();
        assert!(vm.empty_state.is_some());

        state.session.submit("", "Denver").unwrap();
        let vm = state.compute_viewmodel();
        assert!(vm.footer.loading);
        assert!(vm.empty_state.is_none());
        assert_eq!(vm.header.title, "anything in Denver (0)");
    }

    #[test]
    fn favorites_screen_lists_every_favorite_as_favorite() {
        let mut state = AppState::new();
        state.screen = Screen::List(Tab::Favorites);
        assert_eq!(
            state.compute_viewmodel().empty_state.map(|e| e.message).as_deref(),
            Some("No favorite restaurants yet.")
        );

        state.favorites = FavoriteSet::from_businesses(vec![
            Business::new("a", "A"),
            Business::new("b", "B"),
        ]);
        let vm = state.compute_viewmodel();
        assert_eq!(vm.header.title, "Favorite Restaurants (2)");
        assert!(vm.rows.iter().all(|r| r.is_favorite));
        assert_eq!(vm.rows[1].key, "b");
        assert_eq!(state.business_at(1).map(|b| b.name.as_str()), Some("B"));
    }

    #[test]
    fn detail_view_falls_back_to_dashes() {
        let mut business = Business::new("x", "Xoco");
        business.coordinates = Some(Coordinates {
            latitude: Some(41.89),
            longitude: Some(-87.63),
        });

        let mut state = AppState::new();
        state.screen = Screen::Detail { origin: Tab::Search, business };

        let vm = state.compute_viewmodel();
        let detail = vm.detail.expect("detail view");
        assert_eq!(detail.name, "Xoco");
        assert!(detail.rows.iter().all(|r| r.value == "-"));
        assert_eq!(
            detail.map_url.as_deref(),
            Some("https://www.google.com/maps/search/?api=1&query=41.89,-87.63")
        );
        assert!(detail.phone_url.is_none());
        assert!(!detail.is_favorite);
        assert!(state.business_at(0).is_none());
    }
}
