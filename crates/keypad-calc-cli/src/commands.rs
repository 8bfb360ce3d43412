//! CLI command definitions using clap

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::{ColorChoice, LogFormat};

/// Keypad calculator: press keys, evaluate expressions, or run the terminal keypad
#[derive(Parser, Debug)]
#[command(name = "keypad-calc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (only errors are logged)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, global = true)]
    pub color: Option<ColorArg>,

    /// YAML configuration file
    #[arg(long, global = true, env = "KEYPAD_CALC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Show Error instead of Infinity/NaN results
    #[arg(long, global = true)]
    pub reject_non_finite: bool,

    /// Log output format
    #[arg(long, global = true)]
    pub log_format: Option<LogFormatArg>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Press a sequence of keys and print the display
    Press(PressArgs),

    /// Evaluate a whole expression as if typed on the keypad
    Eval(EvalArgs),

    /// Print the keypad layout
    Keypad,

    /// Print the effective configuration
    Config,

    /// Run the interactive terminal keypad
    Interactive,
}

/// Arguments for the press command
#[derive(Parser, Debug)]
pub struct PressArgs {
    /// Print one `token -> display` line per key
    #[arg(long)]
    pub trace: bool,

    /// Print a JSON transcript
    #[arg(long, conflicts_with = "trace")]
    pub json: bool,

    /// Keys to press; each argument is split into single-character tokens
    #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
    pub keys: Vec<String>,
}

/// Arguments for the eval command
#[derive(Parser, Debug)]
pub struct EvalArgs {
    /// Exit with an error when the result is the error display
    #[arg(long)]
    pub strict: bool,

    /// Expression to type before pressing `=`
    #[arg(allow_hyphen_values = true)]
    pub expression: String,
}

/// Color choice argument
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorArg {
    /// Colors when stdout is a terminal
    Auto,
    /// Always color
    Always,
    /// Never color
    Never,
}

impl From<ColorArg> for ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}

/// Log format argument
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormatArg {
    /// Human-readable lines
    Text,
    /// One JSON object per event
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Text => Self::Text,
            LogFormatArg::Json => Self::Json,
        }
    }
}
