//! Background worker for network and storage operations.
//!
//! The event handler never awaits anything. Effects it needs are posted to the
//! worker as [`WorkerMessage`]s and the results come back as
//! [`WorkerResponse`]s on a channel the host loop selects on.
//!
//! # Architecture
//!
//! - `messages`: Request/response protocol types
//! - `handler`: Worker implementation and message processing logic

pub mod handler;
pub mod messages;

pub use handler::Worker;
pub use messages::{WorkerMessage, WorkerResponse};
