//! Actions representing side effects to be executed by the plugin runtime.
//!
//! Card mutations never appear here: column intents are applied to the
//! [`Board`](crate::domain::Board) synchronously inside the event handler. What
//! remains are effects only the Zellij host can perform.

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    ///
    /// Sent when the user explicitly requests to exit the plugin (e.g., pressing 'q').
    CloseFocus,
}
