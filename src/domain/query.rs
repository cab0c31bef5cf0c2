//! Search query, fetched page and result item types.

use super::business::Business;
use super::error::{Result, TableScoutError};

/// Number of businesses the search endpoint returns per page.
///
/// The server does not declare this value; the client assumes it.
pub const PAGE_SIZE: usize = 20;

/// Parameters of one search submission.
///
/// `location` must contain something other than whitespace; `term` may be empty,
/// in which case the API matches any restaurant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    term: String,
    location: String,
}

impl SearchQuery {
    /// Builds a query, rejecting a blank location.
    ///
    /// Values are kept exactly as entered; trimming is used for validation only.
    ///
    /// # Errors
    ///
    /// Returns [`TableScoutError::Validation`] when `location` is empty after
    /// trimming whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use tablescout::SearchQuery;
    ///
    /// assert!(SearchQuery::new("", "New York, NY").is_ok());
    /// assert!(SearchQuery::new("pizza", "   ").is_err());
    /// ```
    pub fn new(term: impl Into<String>, location: impl Into<String>) -> Result<Self> {
        let location = location.into();
        if location.trim().is_empty() {
            return Err(TableScoutError::Validation(
                "Please enter a location".to_string(),
            ));
        }
        Ok(Self {
            term: term.into(),
            location,
        })
    }

    #[must_use]
    pub fn term(&self) -> &str {
        &self.term
    }

    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }
}

/// One page of results, as produced by a single fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// Offset the page was requested at.
    pub offset: usize,
    pub items: Vec<Business>,
}

impl Page {
    /// Whether another fetch may return more items.
    ///
    /// A full page is taken to mean more results exist. A final page holding
    /// exactly [`PAGE_SIZE`] items is therefore reported as non-final; the next
    /// fetch then comes back empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.items.len() == PAGE_SIZE
    }
}

/// A business placed in the accumulated result list.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultItem {
    pub business: Business,

    /// `"{id}-{absolute position}"`, unique within the accumulated list even
    /// when the API repeats an id across pages.
    pub display_key: String,
}

impl ResultItem {
    /// Places `business` at absolute `position` in the result list.
    #[must_use]
    pub fn at_position(business: Business, position: usize) -> Self {
        let display_key = format!("{}-{position}", business.id);
        Self {
            business,
            display_key,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.business.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_location_is_rejected() {
        for location in ["", " ", "\t\n  "] {
            let err = SearchQuery::new("sushi", location).unwrap_err();
            assert!(matches!(err, TableScoutError::Validation(_)));
        }
    }

    #[test]
    fn empty_term_is_accepted_and_values_are_kept_verbatim() {
        let q = SearchQuery::new("", "  Chicago ").unwrap();
        assert_eq!(q.term(), "");
        assert_eq!(q.location(), "  Chicago ");
    }

    #[test]
    fn display_key_uses_absolute_position() {
        let item = ResultItem::at_position(Business::new("abc", "A"), 42);
        assert_eq!(item.display_key, "abc-42");
        assert_eq!(item.id(), "abc");
    }

    #[test]
    fn page_fullness_follows_page_size() {
        let full = Page {
            offset: 0,
            items: vec![Business::default(); PAGE_SIZE],
        };
        let short = Page {
            offset: 20,
            items: vec![Business::default(); 5],
        };
        assert!(full.is_full());
        assert!(!short.is_full());
    }
}
