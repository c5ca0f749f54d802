//! Zellij plugin wrapper and entry point.
//!
//! This module provides the thin integration layer between the Zanban library
//! and the Zellij plugin system. It implements the `ZellijPlugin` trait to
//! handle Zellij events and lifecycle.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for `Key` and `PermissionRequestResult` events
//! 3. **Permission**: Read the board seed file once filesystem access is granted
//! 4. **Update**: Map keys to library events, delegate to `handle_event`
//! 5. **Render**: Call library render function
//!
//! # Keybindings
//!
//! Cards (default):
//! - `j`/`Down`, `k`/`Up`: Move cursor
//! - `h`/`Left`, `l`/`Right`: Switch column
//! - `Space`: Pick up card
//! - `a`: Open the inline form
//! - `d`/`Delete`: Delete card
//! - `/`: Filter
//! - `Esc`: Clear filter
//! - `q`: Close plugin
//!
//! Carrying a card:
//! - `j`/`k`: Move drop target
//! - `h`/`l`: Switch column
//! - `Space`/`Enter`: Drop
//! - `Esc`: Put back
//!
//! Filter bar and inline form:
//! - Characters: Type
//! - `Enter`: Keep filter / add card
//! - `Tab`: Hide form
//! - `Esc`: Clear filter / cancel form

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use zanban::{handle_event, load_board, Action, Config, Event, KeyFocus};

register_plugin!(State);

/// Plugin state wrapper.
///
/// Wraps the library's `AppState` with the configuration needed to load the
/// board once permissions arrive.
struct State {
    /// Core application state from library layer.
    app: zanban::AppState,

    /// Parsed plugin configuration.
    config: Config,
}

impl Default for State {
    fn default() -> Self {
        let config = Config::default();
        Self {
            app: zanban::initialize(&config),
            config,
        }
    }
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// # Permissions
    ///
    /// Requests `FullHdAccess` to read the board seed file and write logs.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        zanban::observability::init_tracing(&config);

        let _guard = tracing::debug_span!("plugin_load").entered();

        tracing::debug!(columns = ?config.columns, board_file = ?config.board_file, "parsed configuration");
        self.app = zanban::initialize(&config);
        self.config = config;

        request_permission(&[PermissionType::FullHdAccess]);
        subscribe(&[EventType::Key, EventType::PermissionRequestResult]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Handles incoming Zellij events.
    ///
    /// Returns `true` if the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::PermissionRequestResult(permissions) => {
                Self::map_permission_result(&self.config, permissions)
            }
            _ => return false,
        };

        let _guard = tracing::debug_span!("plugin_update", event = ?our_event).entered();

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(action_count = actions.len(), should_render, "event handled");
                for action in actions {
                    Self::execute_action(&action);
                }
                should_render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    /// Renders the plugin UI.
    fn render(&mut self, rows: usize, cols: usize) {
        zanban::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Maps keyboard events to application events.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::trace!(bare_key = ?key.bare_key, "key event");

        if key.bare_key == BareKey::Char('n') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyDown);
        }
        if key.bare_key == BareKey::Char('p') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyUp);
        }

        if self.app.gesture.is_some() {
            return Some(match key.bare_key {
                BareKey::Down | BareKey::Char('j') => Event::KeyDown,
                BareKey::Up | BareKey::Char('k') => Event::KeyUp,
                BareKey::Left | BareKey::Char('h') => Event::FocusLeft,
                BareKey::Right | BareKey::Char('l') => Event::FocusRight,
                BareKey::Char(' ') | BareKey::Enter => Event::Drop,
                BareKey::Esc => Event::AbortDrag,
                _ => return None,
            });
        }

        match self.app.key_focus() {
            KeyFocus::Filter | KeyFocus::Form => Some(match key.bare_key {
                BareKey::Enter => Event::Confirm,
                BareKey::Esc => Event::Escape,
                BareKey::Tab if self.app.key_focus() == KeyFocus::Form => Event::ToggleInput,
                BareKey::Backspace => Event::Backspace,
                BareKey::Char(c) => Event::Char(c),
                _ => return None,
            }),
            KeyFocus::Cards => Some(match key.bare_key {
                BareKey::Down | BareKey::Char('j') => Event::KeyDown,
                BareKey::Up | BareKey::Char('k') => Event::KeyUp,
                BareKey::Left | BareKey::Char('h') => Event::FocusLeft,
                BareKey::Right | BareKey::Char('l') => Event::FocusRight,
                BareKey::Char(' ') => Event::PickUp,
                BareKey::Char('a') => Event::ToggleInput,
                BareKey::Char('d') | BareKey::Delete => Event::Delete,
                BareKey::Char('/') => Event::FilterMode,
                BareKey::Char('q') => Event::CloseFocus,
                BareKey::Esc => Event::Escape,
                _ => return None,
            }),
        }
    }

    /// Loads the board once filesystem access is settled.
    fn map_permission_result(config: &Config, permissions: PermissionStatus) -> Event {
        match permissions {
            PermissionStatus::Granted => {
                tracing::debug!("permissions granted - loading board");
                load_board(config)
            }
            PermissionStatus::Denied => {
                tracing::warn!("permissions denied - starting with an empty board");
                Event::BoardLoadFailed {
                    error: "filesystem access denied".to_string(),
                }
            }
        }
    }

    /// Executes an action returned from event handling.
    #[tracing::instrument(level = "debug")]
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
        }
    }
}
