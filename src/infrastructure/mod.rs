//! Infrastructure layer for filesystem and environment interactions.
//!
//! Resolves where local state and trace files live on the host platform.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir};
