//! CLI configuration

use std::path::Path;

use keypad_calc::config::EngineConfig;
use keypad_calc::core::NonFinitePolicy;
use serde::{Deserialize, Serialize};

use crate::commands::Cli;
use crate::error::CliResult;

/// CLI verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    /// Quiet - errors only
    Quiet,
    /// Normal - warnings and errors
    #[default]
    Normal,
    /// Verbose - informational events
    Verbose,
    /// Debug - every keypress
    Debug,
    /// Trace - sanitized buffers too
    Trace,
}

impl Verbosity {
    /// Maps `-q` and the `-v` count to a level; `None` when neither was given
    #[must_use]
    pub const fn from_flags(quiet: bool, verbose: u8) -> Option<Self> {
        if quiet {
            return Some(Self::Quiet);
        }
        match verbose {
            0 => None,
            1 => Some(Self::Verbose),
            2 => Some(Self::Debug),
            _ => Some(Self::Trace),
        }
    }

    /// Default `EnvFilter` directive for this level
    #[must_use]
    pub const fn filter_directive(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Always use colors
    Always,
    /// Use colors when output is a terminal
    #[default]
    Auto,
    /// Never use colors
    Never,
}

impl ColorChoice {
    /// Applies the choice to `console`'s global color switch
    pub fn apply(self) {
        match self {
            Self::Always => console::set_colors_enabled(true),
            Self::Never => console::set_colors_enabled(false),
            Self::Auto => {}
        }
    }
}

/// Log line format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// CLI configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Verbosity level
    pub verbosity: Verbosity,
    /// Color output choice
    pub color: ColorChoice,
    /// Log line format
    pub log_format: LogFormat,
    /// Engine settings
    pub engine: EngineConfig,
}

impl CliConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set verbosity
    #[must_use]
    pub const fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set color choice
    #[must_use]
    pub const fn with_color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }

    /// Set log format
    #[must_use]
    pub const fn with_log_format(mut self, log_format: LogFormat) -> Self {
        self.log_format = log_format;
        self
    }

    /// Set engine configuration
    #[must_use]
    pub const fn with_engine(mut self, engine: EngineConfig) -> Self {
        self.engine = engine;
        self
    }

    /// Parses a YAML document; absent fields keep their defaults
    pub fn from_yaml(text: &str) -> CliResult<Self> {
        Ok(serde_yaml_ng::from_str(text)?)
    }

    /// Loads a YAML file
    pub fn load(path: impl AsRef<Path>) -> CliResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml(&text)
    }

    /// Renders the configuration as YAML
    pub fn to_yaml(&self) -> CliResult<String> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Builds the effective configuration: file first, then flags on top
    pub fn resolve(cli: &Cli) -> CliResult<Self> {
        let base = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        Ok(base.with_overrides(cli))
    }

    fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(verbosity) = Verbosity::from_flags(cli.quiet, cli.verbose) {
            self.verbosity = verbosity;
        }
        if let Some(color) = cli.color {
            self.color = color.into();
        }
        if let Some(format) = cli.log_format {
            self.log_format = format.into();
        }
        if cli.reject_non_finite {
            self.engine.non_finite = NonFinitePolicy::Reject;
        }
        self
    }
}
