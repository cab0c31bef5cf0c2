//! Worker implementation for asynchronous network and storage operations.
//!
//! The worker executes [`WorkerMessage`]s off the event handler's path. HTTP
//! requests run as their own tasks and answer in completion order. Storage
//! calls are short and run inline, so favorites responses are queued in the
//! order their messages were posted. Every message produces exactly one
//! [`WorkerResponse`], failures included.

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;
use tracing::Instrument;

use crate::api::SearchApi;
use crate::app::session::FetchRequest;
use crate::domain::{Business, FavoriteSet};
use crate::storage::{FavoritesStore, KeyValueStore};
use crate::worker::{WorkerMessage, WorkerResponse};

/// Executes worker messages against a search API and a favorites store.
#[derive(Debug)]
pub struct Worker<A, S> {
    api: A,
    favorites: FavoritesStore<S>,
}

impl<A, S> Worker<A, S>
where
    A: SearchApi + 'static,
    S: KeyValueStore + 'static,
{
    pub fn new(api: A, favorites: FavoritesStore<S>) -> Self {
        Self { api, favorites }
    }

    /// Processes one message and returns its response.
    pub async fn handle_message(&self, message: WorkerMessage) -> WorkerResponse {
        match message {
            WorkerMessage::FetchPage(request) => self.handle_fetch_page(request).await,
            WorkerMessage::LoadFavorites { revision } => self.handle_load_favorites(revision),
            WorkerMessage::ToggleFavorite {
                revision,
                business,
                current,
            } => self.handle_toggle_favorite(revision, &business, &current),
        }
    }

    /// Runs `message` and sends its response to `responses`.
    ///
    /// Fetches are spawned and may answer out of order. Storage messages
    /// complete before this returns.
    pub fn post(
        self: &Arc<Self>,
        message: WorkerMessage,
        responses: &UnboundedSender<WorkerResponse>,
    ) {
        let span = tracing::info_span!("worker_message", message_type = message.kind());

        match message {
            WorkerMessage::FetchPage(request) => {
                let worker = Arc::clone(self);
                let responses = responses.clone();
                tokio::spawn(
                    async move {
                        send(&responses, worker.handle_fetch_page(request).await);
                    }
                    .instrument(span),
                );
            }
            WorkerMessage::LoadFavorites { revision } => {
                let _guard = span.enter();
                send(responses, self.handle_load_favorites(revision));
            }
            WorkerMessage::ToggleFavorite {
                revision,
                business,
                current,
            } => {
                let _guard = span.enter();
                send(responses, self.handle_toggle_favorite(revision, &business, &current));
            }
        }
    }

    async fn handle_fetch_page(&self, request: FetchRequest) -> WorkerResponse {
        let ticket = request.ticket;
        match self.api.search(&request.query, ticket.offset).await {
            Ok(page) => {
                tracing::debug!(
                    offset = ticket.offset,
                    count = page.items.len(),
                    "page fetched"
                );
                WorkerResponse::PageFetched { ticket, page }
            }
            Err(e) => WorkerResponse::FetchFailed {
                ticket,
                message: e.to_string(),
            },
        }
    }

    fn handle_load_favorites(&self, revision: u64) -> WorkerResponse {
        WorkerResponse::FavoritesLoaded {
            revision,
            favorites: self.favorites.load(),
        }
    }

    fn handle_toggle_favorite(
        &self,
        revision: u64,
        business: &Business,
        current: &FavoriteSet,
    ) -> WorkerResponse {
        match self.favorites.toggle(business, current) {
            Ok(favorites) => WorkerResponse::FavoriteToggled { revision, favorites },
            Err(e) => {
                tracing::debug!(error = %e, "favorite toggle failed");
                WorkerResponse::ToggleFailed {
                    message: e.to_string(),
                }
            }
        }
    }
}

fn send(responses: &UnboundedSender<WorkerResponse>, response: WorkerResponse) {
    if responses.send(response).is_err() {
        tracing::debug!("response receiver closed, dropping response");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::session::FetchTicket;
    use crate::domain::error::Result;
    use crate::domain::{Page, SearchQuery, TableScoutError};
    use crate::storage::MemoryStore;

    struct FixedApi {
        fail: bool,
    }

    impl SearchApi for FixedApi {
        async fn search(&self, _query: &SearchQuery, offset: usize) -> Result<Page> {
            if self.fail {
                return Err(TableScoutError::Fetch("HTTP status server error (500)".into()));
            }
            Ok(Page {
                offset,
                items: vec![Business::new("a", "A")],
            })
        }
    }

    fn worker(fail: bool) -> Worker<FixedApi, MemoryStore> {
        Worker::new(FixedApi { fail }, FavoritesStore::new(MemoryStore::new()))
    }

    fn fetch(offset: usize) -> WorkerMessage {
        WorkerMessage::FetchPage(FetchRequest {
            ticket: FetchTicket { generation: 3, offset },
            query: SearchQuery::new("pizza", "Chicago").unwrap(),
        })
    }

    #[tokio::test]
    async fn fetch_carries_ticket_back() {
        let response = worker(false).handle_message(fetch(40)).await;
        match response {
            WorkerResponse::PageFetched { ticket, page } => {
                assert_eq!(ticket, FetchTicket { generation: 3, offset: 40 });
                assert_eq!(page.offset, 40);
            }
            other => panic!("unexpected response {other:?}"),
        }
    }

    #[tokio::test]
    async fn fetch_error_becomes_failure_response() {
        let response = worker(true).handle_message(fetch(0)).await;
        assert_eq!(
            response,
            WorkerResponse::FetchFailed {
                ticket: FetchTicket { generation: 3, offset: 0 },
                message: "Failed to search restaurants: HTTP status server error (500)".into(),
            }
        );
    }

    #[tokio::test]
    async fn toggle_then_load_round_trips_through_store() {
        let worker = worker(false);
        let toggled = worker
            .handle_message(WorkerMessage::ToggleFavorite {
                revision: 1,
                business: Business::new("a", "A"),
                current: FavoriteSet::new(),
            })
            .await;
        let WorkerResponse::FavoriteToggled { revision: 1, favorites } = toggled else {
            panic!("unexpected response {toggled:?}");
        };
        assert!(favorites.contains("a"));

        let loaded = worker
            .handle_message(WorkerMessage::LoadFavorites { revision: 2 })
            .await;
        assert_eq!(
            loaded,
            WorkerResponse::FavoritesLoaded { revision: 2, favorites }
        );
    }

    #[tokio::test]
    async fn posted_fetch_answers_on_the_channel() {
        let worker = Arc::new(worker(false));
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();

        worker.post(fetch(0), &tx);

        assert!(matches!(
            rx.recv().await,
            Some(WorkerResponse::PageFetched { ticket: FetchTicket { offset: 0, .. }, .. })
        ));
    }

    #[test]
    fn storage_messages_answer_in_posting_order() {
        let worker = Arc::new(worker(false));
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();

        worker.post(WorkerMessage::LoadFavorites { revision: 1 }, &tx);
        worker.post(
            WorkerMessage::ToggleFavorite {
                revision: 2,
                business: Business::new("a", "A"),
                current: FavoriteSet::new(),
            },
            &tx,
        );
        worker.post(WorkerMessage::LoadFavorites { revision: 3 }, &tx);

        let mut revisions = Vec::new();
        while let Ok(response) = rx.try_recv() {
            match response {
                WorkerResponse::FavoritesLoaded { revision, favorites } => {
                    assert_eq!(favorites.contains("a"), revision == 3);
                    revisions.push(revision);
                }
                WorkerResponse::FavoriteToggled { revision, .. } => revisions.push(revision),
                other => panic!("unexpected response {other:?}"),
            }
        }
        assert_eq!(revisions, [1, 2, 3]);
    }
}
