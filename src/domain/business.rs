//! Business domain model.
//!
//! A [`Business`] is the restaurant entity returned by the remote search endpoint.
//! The client treats it as read-only: it is displayed, compared by `id`, and
//! persisted verbatim into the favorites collection. Fields the client does not
//! model are kept in `extra` so that a stored favorite round-trips unchanged.
//!
//! The API sends `null` for values it does not know, so every field accepts
//! `null` and treats it like an absent field.

use serde::{Deserialize, Deserializer, Serialize};

/// Deserializes `null` as `T::default()`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Street location of a business.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BusinessLocation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

/// A category label such as "Pizza" or "Sushi Bars".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
}

/// Geographic position of a business. Either half may be unknown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

/// A restaurant as described by the search API.
///
/// Only `id` is required. Everything else defaults when absent, which lets a
/// minimal `{"id": "1", "name": "A"}` document deserialize cleanly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Business {
    /// Stable identifier, unique per business.
    pub id: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<BusinessLocation>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_count: Option<u32>,

    /// Price tier, one symbol per tier (e.g. `"$$"`). Zero to four characters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub categories: Vec<Category>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,

    /// Remote fields this client does not interpret.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Business {
    /// Creates a business with only an id and a name.
    ///
    /// # Examples
    ///
    /// ```
    /// use tablescout::Business;
    ///
    /// let b = Business::new("1", "A");
    /// assert_eq!(b.id, "1");
    /// assert!(b.categories.is_empty());
    /// ```
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Returns `"{address1}, {city}"`, leaving out parts that are missing.
    #[must_use]
    pub fn address_line(&self) -> String {
        let Some(location) = &self.location else {
            return String::new();
        };
        [location.address1.as_deref(), location.city.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.trim().is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Number of price tiers, `0` when the business has no price.
    #[must_use]
    pub fn price_tier(&self) -> usize {
        self.price.as_deref().map_or(0, |p| p.chars().count())
    }

    /// Category titles joined with `", "`.
    #[must_use]
    pub fn category_titles(&self) -> String {
        self.categories
            .iter()
            .map(|c| c.title.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Link that opens the business position in a map search.
    ///
    /// Returns `None` unless the API provided both latitude and longitude.
    #[must_use]
    pub fn map_url(&self) -> Option<String> {
        let Coordinates {
            latitude: Some(latitude),
            longitude: Some(longitude),
        } = self.coordinates?
        else {
            return None;
        };
        Some(format!(
            "https://www.google.com/maps/search/?api=1&query={latitude},{longitude}"
        ))
    }

    /// `tel:` link for the business phone, if it has one.
    #[must_use]
    pub fn phone_url(&self) -> Option<String> {
        self.phone
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .map(|p| format!("tel:{p}"))
    }
}
