//! OpenTelemetry-based observability with file-based span export.
//!
//! ```text
//! tracing → tracing-opentelemetry → OpenTelemetry SDK → JsonLinesExporter → RotatingFile
//! ```
//!
//! # Features
//!
//! - **File-Based Export**: one JSON line per span in `<data_dir>/tablescout-traces.json`
//! - **Automatic Rotation**: files rotate at 10MB with 3-backup retention
//! - **Optional Console Output**: human-readable events on stderr
//!
//! # Configuration
//!
//! The filter is taken from:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`
//!
//! # Modules
//!
//! - [`init`]: Tracing initialization and subscriber setup
//! - [`exporter`]: Span exporter and tracer provider
//! - [`file_writer`]: Rotating file writer with size-based rotation

pub mod exporter;
pub mod file_writer;
pub mod init;

pub use init::{init_tracing, TRACE_FILE_NAME};
