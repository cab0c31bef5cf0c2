//! Merges favorite state into search results.

use crate::domain::{FavoriteSet, ResultItem};

/// A result paired with whether it is currently a favorite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresentedItem<'a> {
    pub item: &'a ResultItem,
    pub is_favorite: bool,
}

/// Pairs every result with its favorite flag.
///
/// Order and length follow `results`. Membership is by business id, so a
/// business that appears twice in `results` is flagged at both positions.
///
/// # Example
///
/// ```rust
/// use tablescout::domain::{Business, FavoriteSet, ResultItem};
/// use tablescout::ui::present;
///
/// let results = vec![
///     ResultItem::at_position(Business::new("a", "A"), 0),
///     ResultItem::at_position(Business::new("b", "B"), 1),
/// ];
/// let favorites = FavoriteSet::from_businesses(vec![Business::new("b", "B")]);
///
/// let flags: Vec<bool> = present(&results, &favorites).iter().map(|p| p.is_favorite).collect();
/// assert_eq!(flags, [false, true]);
/// ```
#[must_use]
pub fn present<'a>(results: &'a [ResultItem], favorites: &FavoriteSet) -> Vec<PresentedItem<'a>> {
    let ids = favorites.ids();
    results
        .iter()
        .map(|item| PresentedItem {
            item,
            is_favorite: ids.contains(item.id()),
        })
        .collect()
}
