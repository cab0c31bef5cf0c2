//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the terminal host (main.rs) and the
//! domain/storage/worker layers. It implements the event-driven state machine
//! behind the search and favorites screens.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Worker
//!                           ↑                                         ↓
//!                           └──────────── Worker Responses ───────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`screens`]: Tabs and the detail screen
//! - [`session`]: Paginated search with de-duplication and stale-page guard
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod handler;
pub mod screens;
pub mod session;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use screens::{Screen, Tab};
pub use session::{FetchRequest, FetchTicket, PageOutcome, SearchSession, SessionPhase};
pub use state::AppState;
