//! Terminal host and entry point.
//!
//! This is the thin integration layer between the Tablescout library and an
//! interactive terminal. It reads commands from stdin, translates them into
//! library events, executes the resulting actions, and prints the rendered
//! screen.
//!
//! # Architecture
//!
//! Everything runs on one current-thread tokio runtime:
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  select! loop                            │
//! │   ├─ stdin line  → Event → handle_event  │  ← UI state, event handling
//! │   └─ response rx → Event::WorkerResponse │
//! │                                          │
//! │  Worker: fetch tasks, inline storage     │  ← HTTP + storage
//! │   └─ response tx ────────────────────────┘
//! └──────────────────────────────────────────┘
//! ```
//!
//! # Commands
//!
//! - `search <term> in <location>` / `search [in] <location>`: new search
//! - `search`: back to the results tab
//! - `more`: load the next page
//! - `open <n>`: details for row `n`
//! - `fav <n>`: toggle row `n` (`fav` alone on the detail screen)
//! - `favorites`: favorites tab
//! - `back`: leave the detail screen
//! - `help`, `quit`
//!
//! # Configuration
//!
//! Read from the TOML file named by `TABLESCOUT_CONFIG`, else from
//! `<config dir>/tablescout/config.toml`. Missing files mean defaults.

#![allow(clippy::multiple_crate_versions)]

use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::{self, UnboundedSender};

use tablescout::api::SearchClient;
use tablescout::storage::{FavoritesStore, JsonFileStore};
use tablescout::ui::{render, render_error};
use tablescout::worker::{Worker, WorkerResponse};
use tablescout::{handle_event, Action, AppState, Config, Event, Result, Tab, Theme};

const HELP: &str = "\
commands:
  search <term> in <location>   new search (term optional)
  search                        show results
  more                          load the next page
  open <n>                      show details for row n
  fav [<n>]                     toggle favorite for row n, or the open detail
  favorites                     show favorites
  back                          leave the detail view
  quit";

/// A parsed line of input.
#[derive(Debug, PartialEq)]
enum Input {
    Event(Event),
    Help,
    Quit,
    Invalid(String),
}

/// Host state wrapper.
///
/// Wraps the library's `AppState` with terminal concerns and the worker handle.
struct Host {
    app: AppState,
    worker: Arc<Worker<SearchClient, JsonFileStore>>,
    responses: UnboundedSender<WorkerResponse>,
    theme: Theme,
    cols: usize,
}

impl Host {
    /// Handles one event, executes its actions, and redraws if needed.
    fn dispatch(&mut self, event: &Event) {
        match handle_event(&mut self.app, event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for action in actions {
                    self.execute_action(action);
                }
                if should_render {
                    self.render();
                }
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                self.print(&render_error(&e.to_string(), &self.theme));
            }
        }
    }

    fn execute_action(&self, action: Action) {
        match action {
            Action::PostToWorker(message) => {
                tracing::debug!(message_type = message.kind(), "posting to worker");
                self.worker.post(message, &self.responses);
            }
            Action::ReportError(message) => {
                self.print(&render_error(&message, &self.theme));
            }
        }
    }

    fn render(&self) {
        let screen = render(&self.app.compute_viewmodel(), &self.theme, self.cols);
        self.print(&format!("\n{screen}"));
    }

    fn print(&self, text: &str) {
        let mut stdout = std::io::stdout().lock();
        let _ = write!(stdout, "{text}> ");
        let _ = stdout.flush();
    }
}

/// Parses one line of user input.
fn parse_input(line: &str) -> Option<Input> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let (command, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(c, r)| (c, r.trim()));

    let index = |what: &str| {
        rest.parse::<usize>()
            .map_err(|_| Input::Invalid(format!("usage: {what} <n>")))
    };

    let input = match command {
        "search" | "s" if rest.is_empty() => Input::Event(Event::ShowTab(Tab::Search)),
        "search" | "s" => {
            let (term, location) = rest
                .rsplit_once(" in ")
                .map(|(t, l)| (t.trim(), l.trim()))
                .or_else(|| rest.strip_prefix("in ").map(|l| ("", l.trim())))
                .unwrap_or(("", rest));
            Input::Event(Event::SubmitSearch {
                term: term.to_string(),
                location: location.to_string(),
            })
        }
        "more" | "m" => Input::Event(Event::LoadMore),
        "open" | "o" => match index("open") {
            Ok(index) => Input::Event(Event::OpenDetail { index }),
            Err(invalid) => invalid,
        },
        "fav" | "f" if rest.is_empty() => Input::Event(Event::ToggleDetailFavorite),
        "fav" | "f" => match index("fav") {
            Ok(index) => Input::Event(Event::ToggleFavorite { index }),
            Err(invalid) => invalid,
        },
        "favorites" | "favs" => Input::Event(Event::ShowTab(Tab::Favorites)),
        "back" | "b" => Input::Event(Event::CloseDetail),
        "help" | "?" => Input::Help,
        "quit" | "q" | "exit" => Input::Quit,
        other => Input::Invalid(format!("unknown command '{other}', try 'help'")),
    };
    Some(input)
}

fn config_path() -> Option<PathBuf> {
    std::env::var_os("TABLESCOUT_CONFIG")
        .map(PathBuf::from)
        .or_else(|| dirs::config_dir().map(|dir| dir.join("tablescout").join("config.toml")))
}

fn terminal_width() -> usize {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|c| c.parse().ok())
        .unwrap_or(80)
}

async fn run(config: Config) -> Result<()> {
    let span = tracing::debug_span!("host_start");
    let guard = span.enter();

    let api = SearchClient::new(&config)?;
    let store = JsonFileStore::new(config.store_path())?;
    let worker = Arc::new(Worker::new(api, FavoritesStore::new(store)));
    let (responses, mut response_rx) = mpsc::unbounded_channel();

    let theme = if std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none() {
        Theme::default()
    } else {
        Theme::plain()
    };

    let mut host = Host {
        app: tablescout::initialize(&config),
        worker,
        responses,
        theme,
        cols: terminal_width(),
    };
    drop(guard);

    host.dispatch(&Event::ShowTab(Tab::Search));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    tracing::debug!("stdin closed");
                    break;
                };
                match parse_input(&line) {
                    None => host.print(""),
                    Some(Input::Event(event)) => host.dispatch(&event),
                    Some(Input::Help) => host.print(&format!("{HELP}\n")),
                    Some(Input::Invalid(message)) => host.print(&render_error(&message, &host.theme)),
                    Some(Input::Quit) => break,
                }
            }
            Some(response) = response_rx.recv() => {
                host.dispatch(&Event::WorkerResponse(response));
            }
        }
    }

    println!();
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let config = match config_path().map_or_else(|| Ok(Config::default()), |p| Config::load(&p)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("tablescout: {e}");
            return ExitCode::FAILURE;
        }
    };
    tablescout::observability::init_tracing(&config);

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "host failed");
            eprintln!("tablescout: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_splits_term_and_location() {
        assert_eq!(
            parse_input("search deep dish in Chicago, IL"),
            Some(Input::Event(Event::SubmitSearch {
                term: "deep dish".into(),
                location: "Chicago, IL".into(),
            }))
        );
        assert_eq!(
            parse_input("s Portland"),
            Some(Input::Event(Event::SubmitSearch {
                term: String::new(),
                location: "Portland".into(),
            }))
        );
    }

    #[test]
    fn leading_in_is_not_part_of_the_location() {
        assert_eq!(
            parse_input("search in Boston"),
            Some(Input::Event(Event::SubmitSearch {
                term: String::new(),
                location: "Boston".into(),
            }))
        );
        assert_eq!(
            parse_input("s Indianapolis"),
            Some(Input::Event(Event::SubmitSearch {
                term: String::new(),
                location: "Indianapolis".into(),
            }))
        );
    }

    #[test]
    fn row_commands_need_an_index() {
        assert_eq!(
            parse_input("open 3"),
            Some(Input::Event(Event::OpenDetail { index: 3 }))
        );
        assert_eq!(
            parse_input("fav"),
            Some(Input::Event(Event::ToggleDetailFavorite))
        );
        assert!(matches!(parse_input("open x"), Some(Input::Invalid(_))));
    }

    #[test]
    fn blank_lines_are_ignored() {
        assert_eq!(parse_input("   "), None);
        assert_eq!(parse_input("quit"), Some(Input::Quit));
    }
}
