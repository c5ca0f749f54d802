//! File-based logging for the plugin.
//!
//! A Zellij plugin has no terminal of its own to log to, so events and spans
//! from `tracing` are written as plain text to a file in the plugin data
//! directory:
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → RotatingFile → zanban.log
//! ```
//!
//! # Configuration
//!
//! The filter directive comes from the `trace_level` plugin option
//! (`trace`, `debug`, `info`, `warn`, `error`, or any `EnvFilter` directive).
//! Default: `"info"`.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`file_writer`]: Rotating file writer with size-based rotation

mod file_writer;
mod init;

pub use file_writer::{RotatingFile, MAX_BACKUP_FILES, MAX_FILE_SIZE_BYTES};
pub use init::init_tracing;
