//! Event handling and state transition logic.
//!
//! This module implements the event handler that processes user input and
//! worker responses, translating them into state changes and action sequences.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the host loop or the worker
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` and `SearchSession` methods
//! 4. Actions are collected and returned for execution
//!
//! The returned `bool` says whether the screen needs to be redrawn.
//!
//! # Event Types
//!
//! - **Search**: `SubmitSearch`, `LoadMore`
//! - **Navigation**: `ShowTab`, `OpenDetail`, `CloseDetail`
//! - **Favorites**: `ToggleFavorite`, `ToggleDetailFavorite`
//! - **Worker**: `WorkerResponse` with typed message variants
//!
//! # Example
//!
//! ```rust
//! use tablescout::{handle_event, Action, AppState, Event};
//!
//! let mut state = AppState::new();
//! let event = Event::SubmitSearch { term: "tacos".into(), location: "Austin".into() };
//! let (render, actions) = handle_event(&mut state, &event)?;
//! assert!(render);
//! assert!(matches!(actions[0], Action::PostToWorker(_)));
//! # Ok::<(), tablescout::TableScoutError>(())
//! ```

use super::screens::{Screen, Tab};
use crate::app::{Action, AppState};
use crate::app::session::PageOutcome;
use crate::domain::error::Result;
use crate::domain::Business;
use crate::worker::{WorkerMessage, WorkerResponse};

/// Events triggered by user input or worker responses.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Starts a new search. Supersedes any fetch still in flight.
    SubmitSearch {
        term: String,
        location: String,
    },

    /// Asks for the next page of the current search.
    ///
    /// Dropped while a fetch is in flight or after a short page.
    LoadMore,

    /// Activates a tab. Favorites are reloaded from storage on every activation.
    ShowTab(Tab),

    /// Opens the detail view for the row at `index` of the visible list.
    OpenDetail { index: usize },

    /// Returns from the detail view to the list it was opened from.
    CloseDetail,

    /// Toggles the favorite state of the row at `index` of the visible list.
    ToggleFavorite { index: usize },

    /// Toggles the favorite state of the business in the detail view.
    ToggleDetailFavorite,

    /// Wraps a response from the background worker.
    WorkerResponse(WorkerResponse),
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// Whether a redraw is needed, and the actions to execute in order. The action
/// list is empty when the event needs no side effects.
///
/// # Errors
///
/// Returns [`TableScoutError::Validation`](crate::TableScoutError::Validation)
/// when a search is submitted with a blank location. State is unchanged then.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::SubmitSearch { term, location } => {
            let request = state.session.submit(term, location)?;
            state.screen = Screen::List(Tab::Search);
            Ok((
                true,
                vec![Action::PostToWorker(WorkerMessage::FetchPage(request))],
            ))
        }
        Event::LoadMore => Ok(state.session.load_more().map_or_else(
            || (false, vec![]),
            |request| {
                (
                    true,
                    vec![Action::PostToWorker(WorkerMessage::FetchPage(request))],
                )
            },
        )),
        Event::ShowTab(tab) => {
            tracing::debug!(tab = ?tab, "tab activated");
            state.screen = Screen::List(*tab);
            Ok((true, vec![load_favorites_action(state)]))
        }
        Event::OpenDetail { index } => {
            let Some(business) = state.business_at(*index).cloned() else {
                tracing::debug!(index = index, "no row to open");
                return Ok((false, vec![]));
            };
            tracing::debug!(business_id = %business.id, "opening detail");
            state.screen = Screen::Detail {
                origin: state.screen.tab(),
                business,
            };
            Ok((true, vec![]))
        }
        Event::CloseDetail => {
            let Screen::Detail { origin, .. } = state.screen else {
                return Ok((false, vec![]));
            };
            state.screen = Screen::List(origin);
            Ok((true, vec![load_favorites_action(state)]))
        }
        Event::ToggleFavorite { index } => {
            let Some(business) = state.business_at(*index).cloned() else {
                tracing::debug!(index = index, "no row to toggle");
                return Ok((false, vec![]));
            };
            Ok((false, vec![toggle_action(state, business)]))
        }
        Event::ToggleDetailFavorite => {
            let Screen::Detail { business, .. } = &state.screen else {
                return Ok((false, vec![]));
            };
            let business = business.clone();
            Ok((false, vec![toggle_action(state, business)]))
        }
        Event::WorkerResponse(response) => handle_worker_response(state, response),
    }
}

fn load_favorites_action(state: &mut AppState) -> Action {
    Action::PostToWorker(WorkerMessage::LoadFavorites {
        revision: state.next_favorites_revision(),
    })
}

fn toggle_action(state: &mut AppState, business: Business) -> Action {
    tracing::debug!(
        business_id = %business.id,
        currently_favorite = state.favorites.contains(&business.id),
        "toggling favorite"
    );
    Action::PostToWorker(WorkerMessage::ToggleFavorite {
        revision: state.next_favorites_revision(),
        business,
        current: state.favorites.clone(),
    })
}

fn handle_worker_response(
    state: &mut AppState,
    response: &WorkerResponse,
) -> Result<(bool, Vec<Action>)> {
    match response {
        WorkerResponse::PageFetched { ticket, page } => {
            match state.session.apply_page(*ticket, page.clone()) {
                PageOutcome::Applied { .. } => Ok((true, vec![])),
                PageOutcome::Stale => Ok((false, vec![])),
            }
        }
        WorkerResponse::FetchFailed { ticket, message } => {
            if state.session.fail_fetch(*ticket) {
                tracing::error!("Search error: {}", message);
                Ok((true, vec![Action::ReportError(message.clone())]))
            } else {
                Ok((false, vec![]))
            }
        }
        WorkerResponse::FavoritesLoaded { revision, favorites }
        | WorkerResponse::FavoriteToggled { revision, favorites } => {
            Ok((state.apply_favorites(*revision, favorites), vec![]))
        }
        WorkerResponse::ToggleFailed { message } => {
            tracing::error!("Favorite error: {}", message);
            Ok((false, vec![Action::ReportError(message.clone())]))
        }
    }
}
