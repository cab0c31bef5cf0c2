//! Actions representing side effects to be executed by the host runtime.
//!
//! The event handler never performs I/O. It returns a `Vec<Action>` describing
//! what should happen next, and the host executes them in order.
//!
//! # Example
//!
//! ```rust
//! use tablescout::Action;
//! use tablescout::worker::WorkerMessage;
//!
//! let actions = vec![
//!     Action::PostToWorker(WorkerMessage::LoadFavorites { revision: 1 }),
//!     Action::ReportError("Failed to save favorite".to_string()),
//! ];
//! assert_eq!(actions.len(), 2);
//! ```

use crate::worker::WorkerMessage;

/// Commands produced by the event handler.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Hands work to the background worker. Its response comes back as
    /// [`Event::WorkerResponse`](crate::Event::WorkerResponse).
    PostToWorker(WorkerMessage),

    /// Shows an error to the user.
    ReportError(String),
}
