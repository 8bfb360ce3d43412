//! keypad-calc CLI library
//!
//! Command-line front end for the `keypad-calc` engine: one-shot key
//! sequences, whole-expression evaluation, and an interactive terminal keypad.

#![warn(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

mod commands;
mod config;
mod error;
pub mod handlers;
pub mod logging;
pub mod view;

pub use commands::{Cli, ColorArg, Commands, EvalArgs, LogFormatArg, PressArgs};
pub use config::{CliConfig, ColorChoice, LogFormat, Verbosity};
pub use error::{CliError, CliResult};
pub use view::{KeypadView, ViewAction};
