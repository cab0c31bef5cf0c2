//! The user's favorite businesses.
//!
//! [`FavoriteSet`] is an ordered collection keyed by business id. Adding appends
//! at the end and removing keeps the relative order of the remaining entries, so
//! the persisted array reads in the order favorites were added.

use super::business::Business;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Ordered set of favorite businesses with no duplicate ids.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoriteSet {
    items: Vec<Business>,
}

impl FavoriteSet {
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Builds a set from a stored sequence, keeping the first entry for any
    /// repeated id.
    #[must_use]
    pub fn from_businesses(businesses: Vec<Business>) -> Self {
        let mut seen = HashSet::new();
        let items = businesses
            .into_iter()
            .filter(|b| seen.insert(b.id.clone()))
            .collect();
        Self { items }
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|b| b.id == id)
    }

    /// Returns a copy with `business` removed if its id is present, or appended
    /// at the end otherwise.
    ///
    /// This only computes the new value; persisting it is the job of
    /// [`FavoritesStore::toggle`](crate::storage::FavoritesStore::toggle).
    ///
    /// # Examples
    ///
    /// ```
    /// use tablescout::{Business, FavoriteSet};
    ///
    /// let a = Business::new("1", "A");
    /// let set = FavoriteSet::new().toggled(&a);
    /// assert!(set.contains("1"));
    /// assert!(set.toggled(&a).is_empty());
    /// ```
    #[must_use]
    pub fn toggled(&self, business: &Business) -> Self {
        let mut items = self.items.clone();
        match items.iter().position(|b| b.id == business.id) {
            Some(index) => {
                items.remove(index);
            }
            None => items.push(business.clone()),
        }
        Self { items }
    }

    /// Ids of every favorite, for membership checks over many items.
    #[must_use]
    pub fn ids(&self) -> HashSet<&str> {
        self.items.iter().map(|b| b.id.as_str()).collect()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Business> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Business> {
        self.items.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Business] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for &'a FavoriteSet {
    type Item = &'a Business;
    type IntoIter = std::slice::Iter<'a, Business>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(set: &FavoriteSet) -> Vec<&str> {
        set.iter().map(|b| b.id.as_str()).collect()
    }

    #[test]
    fn toggle_appends_missing_item_at_the_end() {
        let set = FavoriteSet::from_businesses(vec![Business::new("2", "Existing")]);
        let set = set.toggled(&Business::new("1", "New"));
        assert_eq!(ids(&set), vec!["2", "1"]);
    }

    #[test]
    fn toggle_removes_present_item_and_keeps_order() {
        let set = FavoriteSet::from_businesses(vec![
            Business::new("a", "A"),
            Business::new("b", "B"),
            Business::new("c", "C"),
        ]);
        let set = set.toggled(&Business::new("b", "renamed upstream"));
        assert_eq!(ids(&set), vec!["a", "c"]);
    }

    #[test]
    fn toggle_does_not_mutate_the_original() {
        let original = FavoriteSet::new();
        let _ = original.toggled(&Business::new("1", "A"));
        assert!(original.is_empty());
    }

    #[test]
    fn odd_toggles_survive_in_first_insertion_order() {
        let a = Business::new("a", "A");
        let b = Business::new("b", "B");
        let c = Business::new("c", "C");

        // a and b toggled twice, c three times
        let sequence = [&a, &b, &c, &b, &c, &c, &a];
        let set = sequence
            .iter()
            .fold(FavoriteSet::new(), |set, item| set.toggled(item));

        assert_eq!(ids(&set), vec!["c"]);

        let set = [&b, &a, &c, &c]
            .iter()
            .fold(FavoriteSet::new(), |set, item| set.toggled(item));
        assert_eq!(ids(&set), vec!["b", "a"]);
        assert_eq!(set.ids().len(), set.len());
    }

    #[test]
    fn duplicate_ids_collapse_on_construction() {
        let set = FavoriteSet::from_businesses(vec![
            Business::new("1", "first"),
            Business::new("2", "other"),
            Business::new("1", "second"),
        ]);
        assert_eq!(ids(&set), vec!["1", "2"]);
        assert_eq!(set.get(0).map(|b| b.name.as_str()), Some("first"));
    }

    #[test]
    fn serializes_as_a_plain_array() {
        let set = FavoriteSet::new().toggled(&Business::new("1", "A"));
        assert_eq!(
            serde_json::to_value(&set).unwrap(),
            serde_json::json!([{ "id": "1", "name": "A" }])
        );
    }
}
