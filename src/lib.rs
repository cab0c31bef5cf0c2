//! Tablescout: a restaurant search client with paginated results and locally
//! persisted favorites.
//!
//! Tablescout provides:
//! - Paginated search against a remote restaurant endpoint, 20 results per page
//! - De-duplication of concurrent "load more" requests
//! - A stale-response guard so late pages never mix into a newer search
//! - Favorites persisted in a local JSON file, merged into every result list
//! - A terminal host (`main.rs`) driving everything from one event loop
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal host (main.rs)                            │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling, search session                   │
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │   │ Worker Layer  │
//! │ (ui/)         │   │ (storage/)    │   │ (worker/)     │
//! │ - Presenting  │   │ - JSON file   │   │ - HTTP fetch  │
//! │ - Rendering   │   │ - Favorites   │   │ - Storage I/O │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  API, Infrastructure & Domain Layers                │
//! │  - Search client (api/)                             │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Business, queries, errors (domain/)              │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```toml
//! api_base_url = "http://localhost:3000"
//! data_dir = "~/.local/share/tablescout"
//! request_timeout_secs = 30
//! trace_level = "info"
//! log_to_stderr = false
//! ```
//!
//! # Example
//!
//! ```rust
//! use tablescout::{handle_event, initialize, Action, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//!
//! let event = Event::SubmitSearch { term: "ramen".into(), location: "Seattle".into() };
//! let (_, actions) = handle_event(&mut state, &event)?;
//! for action in actions {
//!     match action {
//!         Action::PostToWorker(message) => { /* hand to the worker */ }
//!         Action::ReportError(message) => eprintln!("{message}"),
//!     }
//! }
//! # Ok::<(), tablescout::TableScoutError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod api;
pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod storage;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, Screen, SearchSession, Tab};
pub use domain::{Business, FavoriteSet, Page, Result, ResultItem, SearchQuery, TableScoutError};
pub use ui::Theme;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// File name of the key-value store inside `data_dir`.
pub const STORE_FILE_NAME: &str = "store.json";

/// Application configuration.
///
/// Every field has a default, so a partial TOML file or map is valid.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the search endpoint. Default: `http://localhost:3000`
    pub api_base_url: String,

    /// Directory for the favorites store and trace files.
    ///
    /// A leading `~` is expanded. Default: platform data directory + `tablescout`
    pub data_dir: PathBuf,

    /// Per-request timeout for search calls. Default: 30
    pub request_timeout_secs: u64,

    /// Tracing filter directive.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`, or any `EnvFilter`
    /// directive. Default: `"info"`
    pub trace_level: String,

    /// Also print log events to stderr. Default: `false`
    pub log_to_stderr: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:3000".to_string(),
            data_dir: infrastructure::get_data_dir(),
            request_timeout_secs: 30,
            trace_level: "info".to_string(),
            log_to_stderr: false,
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`TableScoutError::Io`] if the file exists but cannot be read,
    /// and [`TableScoutError::Config`] if it is not valid TOML for this struct.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`TableScoutError::Config`] on malformed TOML or mistyped values.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tablescout::Config;
    ///
    /// let config = Config::from_toml_str("request_timeout_secs = 5")?;
    /// assert_eq!(config.request_timeout_secs, 5);
    /// assert_eq!(config.api_base_url, "http://localhost:3000");
    /// # Ok::<(), tablescout::TableScoutError>(())
    /// ```
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(contents)
            .map_err(|e| TableScoutError::Config(format!("invalid config: {e}")))?;
        config.data_dir = infrastructure::expand_tilde(&config.data_dir.to_string_lossy());
        Ok(config)
    }

    /// Parses configuration from a string-keyed map.
    ///
    /// Unknown keys are ignored. Values that fail to parse fall back to their
    /// defaults.
    ///
    /// # Parsing Rules
    ///
    /// - `request_timeout_secs`: String → `u64`
    /// - `log_to_stderr`: `"true"`/`"false"` → `bool`
    /// - `data_dir`: tilde-expanded path
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use tablescout::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("api_base_url".to_string(), "https://api.example.com".to_string());
    /// map.insert("request_timeout_secs".to_string(), "ten".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.api_base_url, "https://api.example.com");
    /// assert_eq!(config.request_timeout_secs, 30);
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let non_empty = |key: &str| {
            map.get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
        };

        Self {
            api_base_url: non_empty("api_base_url")
                .map_or(defaults.api_base_url, String::from),
            data_dir: non_empty("data_dir")
                .map_or(defaults.data_dir, infrastructure::expand_tilde),
            request_timeout_secs: non_empty("request_timeout_secs")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.request_timeout_secs),
            trace_level: non_empty("trace_level").map_or(defaults.trace_level, String::from),
            log_to_stderr: non_empty("log_to_stderr")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.log_to_stderr),
        }
    }

    /// Path of the JSON key-value store holding the favorites.
    #[must_use]
    pub fn store_path(&self) -> PathBuf {
        self.data_dir.join(STORE_FILE_NAME)
    }
}

/// Creates the initial application state.
///
/// The state starts on the search tab with no query and no favorites. The
/// host is expected to post [`WorkerMessage::LoadFavorites`](worker::WorkerMessage::LoadFavorites)
/// right away, which is what activating a tab does.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(
        api_base_url = %config.api_base_url,
        data_dir = %config.data_dir.display(),
        "initializing tablescout"
    );
    AppState::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = Config::default();
        assert_eq!(config.api_base_url, "http://localhost:3000");
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.trace_level, "info");
        assert!(!config.log_to_stderr);
        assert!(config.store_path().ends_with(STORE_FILE_NAME));
    }

    #[test]
    fn toml_overrides_only_given_keys() {
        let config = Config::from_toml_str(
            r#"
            api_base_url = "https://search.example.com/v1"
            data_dir = "/var/lib/tablescout"
            log_to_stderr = true
            "#,
        )
        .unwrap();

        assert_eq!(config.api_base_url, "https://search.example.com/v1");
        assert_eq!(config.data_dir, PathBuf::from("/var/lib/tablescout"));
        assert!(config.log_to_stderr);
        assert_eq!(config.trace_level, "info");
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        let err = Config::from_toml_str("request_timeout_secs = \"soon\"").unwrap_err();
        assert!(matches!(err, TableScoutError::Config(_)));
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn file_is_read_when_present() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tablescout.toml");
        std::fs::write(&path, "trace_level = \"debug\"\n").unwrap();

        assert_eq!(Config::load(&path).unwrap().trace_level, "debug");
    }

    #[test]
    fn map_values_fall_back_when_unparseable() {
        let map: BTreeMap<String, String> = [
            ("trace_level", "warn"),
            ("log_to_stderr", "maybe"),
            ("request_timeout_secs", "12"),
            ("api_base_url", "   "),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let config = Config::from_map(&map);
        assert_eq!(config.trace_level, "warn");
        assert!(!config.log_to_stderr);
        assert_eq!(config.request_timeout_secs, 12);
        assert_eq!(config.api_base_url, "http://localhost:3000");
    }
}
