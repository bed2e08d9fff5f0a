//! Keypad CLI Library
//!
//! Feeds key presses to a [`keypad_calculator`] widget and reports the final
//! summary, expression and notices.
//!
//! ## Usage
//!
//! ```bash
//! keypad "12+3="                 # split into single keys
//! keypad 9 Backspace 8 =         # one key per argument
//! printf '1\n/\n0\n=\n' | keypad --stdin --json
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

mod commands;
mod config;
mod error;
pub mod logging;
pub mod runner;
pub mod terminal;

pub use commands::{Cli, ColorArg};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
pub use runner::{load_widget_config, read_keys, run_session, split_keys};
pub use terminal::{NoticeReport, TerminalSurface};
