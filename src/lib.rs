//! Zanban: a keyboard-driven card board plugin for Zellij.
//!
//! Zanban shows one column of a card board at a time and provides:
//! - Live keyword filtering shared by every column
//! - Keyboard drag and drop to reorder cards or move them between columns
//! - An inline form to add cards and a delete command
//! - Boards seeded from TOML or JSON files

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Key gestures → column events                     │
//! │  - Intent dispatch and reconciliation               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Column Core   │   │ Domain Layer  │
//! │ (ui/)         │   │ (column/)     │   │ (domain/)     │
//! │ - Rendering   │   │ - Filtering   │   │ - Cards       │
//! │ - Theming     │   │ - Drop zones  │   │ - Board owner │
//! │ - Components  │   │ - Input form  │   │ - Errors      │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Observability                     │
//! │  - Sandbox paths (infrastructure/)                  │
//! │  - File logging (observability/)                    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`column`]: Column interaction core (filter, drag, input form)
//! - [`domain`]: Cards, the board that owns them, errors
//! - [`infrastructure`]: Sandbox path utilities
//! - [`ui`]: Terminal rendering with theme support
//! - [`observability`]: File-based tracing output
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/zanban.wasm" {
//!         columns "Backlog,Doing,Review,Done"
//!         board_file "~/boards/home.toml"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Plugin Load**: parse configuration, initialize tracing, create an
//!    `AppState` whose columns are loading
//! 2. **Permission Grant**: read the board seed file (if any) and send
//!    `BoardLoaded` or `BoardLoadFailed`
//! 3. **Interaction**: key presses become events; the handler returns whether
//!    to re-render and which host actions to run
//!
//! # Example
//!
//! ```rust
//! use zanban::{handle_event, initialize, load_board, Config, Event};
//!
//! let config = Config::default();
//! let mut state = initialize(&config);
//!
//! let loaded = load_board(&config);
//! handle_event(&mut state, &loaded)?;
//!
//! for event in [Event::ToggleInput, Event::Char('h'), Event::Char('i'), Event::Confirm] {
//!     handle_event(&mut state, &event)?;
//! }
//! assert_eq!(state.board.columns[0].cards.as_ref().map(Vec::len), Some(1));
//! # Ok::<(), zanban::ZanbanError>(())
//! ```

pub mod app;
pub mod column;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, KeyFocus};
pub use domain::{Board, Card, Result, ZanbanError};
pub use ui::Theme;

use infrastructure::{expand_tilde, strip_host_prefix};
use std::collections::BTreeMap;

/// Column titles used when `columns` is not configured.
pub const DEFAULT_COLUMNS: [&str; 3] = ["Todo", "Doing", "Done"];

/// Plugin configuration parsed from Zellij's configuration system.
///
/// # Example
///
/// ```kdl
/// plugin location="file:/path/to/zanban.wasm" {
///     columns "Todo,Doing,Done"
///     board_file "~/boards/home.toml"
///     theme "catppuccin-latte"
///     theme_file "/path/to/theme.toml"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Column titles for a board without a seed file.
    ///
    /// Ignored once `board_file` loads. Default: `Todo, Doing, Done`
    pub columns: Vec<String>,
    /// TOML or JSON file the board is seeded from (`~` maps to `/host`).
    pub board_file: Option<String>,
    /// Built-in theme name to use.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`. Ignored if
    /// `theme_file` is set.
    pub theme_name: Option<String>,
    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for format.
    pub theme_file: Option<String>,
    /// Tracing filter directive.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS.iter().map(ToString::to_string).collect(),
            board_file: None,
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Parsing never fails; missing or blank values fall back to defaults.
    ///
    /// # Parsing Rules
    ///
    /// - `columns`: Comma-separated string → `Vec<String>` (trims, filters empty values)
    /// - `board_file`, `theme`, `theme_file`, `trace_level`: non-blank string → `Some`
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use zanban::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("columns".to_string(), "Backlog, Doing ,,Done".to_string());
    /// map.insert("board_file".to_string(), "  ".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.columns, vec!["Backlog", "Doing", "Done"]);
    /// assert_eq!(config.board_file, None);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let columns = config
            .get("columns")
            .map(|s| {
                s.split(',')
                    .map(str::trim)
                    .filter(|c| !c.is_empty())
                    .map(String::from)
                    .collect::<Vec<_>>()
            })
            .filter(|v: &Vec<String>| !v.is_empty())
            .unwrap_or_else(|| Self::default().columns);

        let text = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        Self {
            columns,
            board_file: text("board_file"),
            theme_name: text("theme"),
            theme_file: text("theme_file"),
            trace_level: text("trace_level"),
        }
    }

    /// Resolves the configured theme, falling back to the default.
    #[must_use]
    pub fn theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            return Theme::from_file(expand_tilde(theme_file)).unwrap_or_else(|e| {
                tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            });
        }

        self.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
            Theme::from_name(theme_name).unwrap_or_else(|| {
                tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
                Theme::default()
            })
        })
    }
}

/// Initializes the plugin with configuration.
///
/// Every column starts in the loading state; the board is filled by the event
/// returned from [`load_board`].
///
/// # Example
///
/// ```rust
/// use zanban::{initialize, Config};
///
/// let state = initialize(&Config::default());
/// assert_eq!(state.board.titles(), ["Todo", "Doing", "Done"]);
/// assert!(state.board.columns.iter().all(|c| c.cards.is_none()));
/// ```
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(columns = ?config.columns, "initializing zanban plugin");

    AppState::new(Board::loading(&config.columns), config.theme())
}

/// Reads the configured board and wraps the outcome in an [`Event`].
///
/// Without a `board_file` the configured columns start empty. Read or parse
/// failures become [`Event::BoardLoadFailed`].
#[must_use]
pub fn load_board(config: &Config) -> Event {
    let Some(board_file) = &config.board_file else {
        return Event::BoardLoaded {
            board: Board::with_titles(&config.columns),
        };
    };

    let path = expand_tilde(board_file);
    let _span = tracing::debug_span!("load_board", path = %path).entered();

    match Board::from_file(&path) {
        Ok(board) => {
            tracing::info!(columns = board.columns.len(), "board loaded");
            Event::BoardLoaded { board }
        }
        Err(e) => Event::BoardLoadFailed {
            error: format!("{}: {e}", strip_host_prefix(&path)),
        },
    }
}
