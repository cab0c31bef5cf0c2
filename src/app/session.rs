//! Paginated search session.
//!
//! [`SearchSession`] owns the active query, the accumulated results and the
//! pagination bookkeeping. It never performs I/O: submitting or loading more
//! hands back a [`FetchRequest`] for the caller to execute, and the outcome is
//! fed back through [`SearchSession::apply_page`] or
//! [`SearchSession::fail_fetch`].
//!
//! # State Machine
//!
//! ```text
//!            submit                 full page
//!   Idle ─────────────▶ Fetching ─────────────▶ Loaded (has_more)
//!                         ▲   │ short page             │
//!                         │   └──────────▶ Loaded ◀────┘ load_more
//!                         │     failure    (final)     (if not fetching)
//!                         └── submit (any state, supersedes in-flight fetch)
//! ```
//!
//! Every request carries a [`FetchTicket`]. Only the response whose ticket
//! matches the one in flight is applied; anything else is stale and dropped.

use crate::domain::error::Result;
use crate::domain::{Page, ResultItem, SearchQuery};

/// Tag identifying one fetch: the submission it belongs to and the offset it
/// asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FetchTicket {
    /// Incremented on every accepted submission.
    pub generation: u64,
    pub offset: usize,
}

/// A fetch the caller should perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub ticket: FetchTicket,
    pub query: SearchQuery,
}

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// No search submitted yet.
    Idle,
    /// A fetch is in flight.
    Fetching(FetchTicket),
    /// The last fetch finished, successfully or not.
    Loaded,
}

/// What happened to a fetched page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageOutcome {
    Applied { appended: usize, has_more: bool },
    /// The page belonged to a superseded request and was discarded.
    Stale,
}

/// Search state for the results list.
#[derive(Debug, Clone)]
pub struct SearchSession {
    query: Option<SearchQuery>,
    results: Vec<ResultItem>,
    offset: usize,
    phase: SessionPhase,
    has_more: bool,
    generation: u64,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchSession {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            query: None,
            results: Vec::new(),
            offset: 0,
            phase: SessionPhase::Idle,
            has_more: false,
            generation: 0,
        }
    }

    #[must_use]
    pub const fn query(&self) -> Option<&SearchQuery> {
        self.query.as_ref()
    }

    #[must_use]
    pub fn results(&self) -> &[ResultItem] {
        &self.results
    }

    /// Offset the next load-more will request.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    #[must_use]
    pub const fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.phase, SessionPhase::Fetching(_))
    }

    #[must_use]
    pub const fn has_more(&self) -> bool {
        self.has_more
    }

    /// Starts a new search, discarding the previous results.
    ///
    /// Any fetch still in flight for an earlier submission is superseded: its
    /// response will be reported as [`PageOutcome::Stale`].
    ///
    /// # Errors
    ///
    /// Returns [`TableScoutError::Validation`](crate::TableScoutError::Validation)
    /// when `location` is blank. The session is left untouched in that case.
    pub fn submit(&mut self, term: &str, location: &str) -> Result<FetchRequest> {
        let query = SearchQuery::new(term, location)?;

        self.generation += 1;
        self.query = Some(query.clone());
        self.results.clear();
        self.offset = 0;
        self.has_more = true;

        let ticket = FetchTicket {
            generation: self.generation,
            offset: 0,
        };
        self.phase = SessionPhase::Fetching(ticket);

        tracing::debug!(
            generation = ticket.generation,
            term = %query.term(),
            location = %query.location(),
            "search submitted"
        );

        Ok(FetchRequest { ticket, query })
    }

    /// Requests the next page, if one may exist and nothing is in flight.
    ///
    /// Returns `None` without changing state when no search was submitted,
    /// a fetch is already running, or the last page was short.
    pub fn load_more(&mut self) -> Option<FetchRequest> {
        let Some(query) = &self.query else {
            tracing::trace!("load more ignored, no active search");
            return None;
        };
        if let SessionPhase::Fetching(ticket) = self.phase {
            tracing::debug!(
                generation = ticket.generation,
                offset = ticket.offset,
                "load more dropped, fetch already in flight"
            );
            return None;
        }
        if !self.has_more {
            tracing::trace!("load more ignored, no more results");
            return None;
        }

        let ticket = FetchTicket {
            generation: self.generation,
            offset: self.offset,
        };
        self.phase = SessionPhase::Fetching(ticket);

        tracing::debug!(offset = ticket.offset, "loading more results");
        Some(FetchRequest {
            ticket,
            query: query.clone(),
        })
    }

    /// Appends a fetched page if `ticket` is the request in flight.
    ///
    /// Display keys use the absolute position in the accumulated list, not the
    /// offset the page was requested at.
    pub fn apply_page(&mut self, ticket: FetchTicket, page: Page) -> PageOutcome {
        if self.phase != SessionPhase::Fetching(ticket) {
            tracing::debug!(
                generation = ticket.generation,
                offset = ticket.offset,
                current_generation = self.generation,
                "discarding stale page"
            );
            return PageOutcome::Stale;
        }

        let has_more = page.is_full();
        let base = self.results.len();
        let appended = page.items.len();

        self.results.extend(
            page.items
                .into_iter()
                .enumerate()
                .map(|(index, business)| ResultItem::at_position(business, base + index)),
        );
        self.offset = self.results.len();
        self.has_more = has_more;
        self.phase = SessionPhase::Loaded;

        tracing::debug!(
            appended = appended,
            total = self.results.len(),
            has_more = has_more,
            "page applied"
        );
        PageOutcome::Applied { appended, has_more }
    }

    /// Ends the in-flight fetch after a failure.
    ///
    /// Results and `has_more` are left as they were. Returns `false` if the
    /// failure belongs to a superseded request and should not be reported.
    pub fn fail_fetch(&mut self, ticket: FetchTicket) -> bool {
        if self.phase != SessionPhase::Fetching(ticket) {
            tracing::debug!(
                generation = ticket.generation,
                offset = ticket.offset,
                "ignoring failure of stale fetch"
            );
            return false;
        }
        self.phase = SessionPhase::Loaded;
        true
    }
}
