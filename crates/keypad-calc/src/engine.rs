//! Calculator engine: the keypress state machine
//!
//! Three pieces of state drive the display: the expression buffer being
//! typed, the last stable display value, and an error flag. All of them
//! change only through [`CalculatorEngine::press`].
//!
//! ```text
//! Idle --digit/op--> Accumulating --=--> Result | Error
//!   ^                     |                 |        |
//!   +-------- C ----------+-----------------+--------+
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::EngineConfig;
use crate::core::evaluator::Evaluator;
use crate::core::number::format_number;

/// Token that resets the engine
pub const CLEAR: &str = "C";
/// Token that evaluates the buffer
pub const EQUALS: &str = "=";
/// Display shown with an empty buffer and no result
pub const IDLE_DISPLAY: &str = "0";
/// Display shown after a failed evaluation
pub const ERROR_DISPLAY: &str = "Error";

/// Observable phase of the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineState {
    /// Nothing typed; showing the idle value
    Idle,
    /// Building an expression
    Accumulating,
    /// Buffer holds the text of the last result
    Result,
    /// Last evaluation failed
    Error,
}

/// Keypad calculator engine
#[derive(Debug, Clone)]
pub struct CalculatorEngine {
    /// Unevaluated expression text
    buffer: String,
    /// Idle text or last result
    display: String,
    /// Last evaluation failed
    error: bool,
    /// Buffer is untouched result text
    settled: bool,
    evaluator: Evaluator,
    config: EngineConfig,
}

impl Default for CalculatorEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorEngine {
    /// Creates an engine with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Creates an engine from a configuration
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            buffer: String::new(),
            display: IDLE_DISPLAY.to_string(),
            error: false,
            settled: false,
            evaluator: config.evaluator(),
            config,
        }
    }

    /// Handles one keypad token.
    ///
    /// `C` resets, `=` evaluates, anything else is appended verbatim.
    pub fn press(&mut self, token: &str) {
        match token {
            CLEAR => self.clear(),
            EQUALS => self.evaluate(),
            _ => self.append(token),
        }
        debug!(token, display = self.display_text(), "key pressed");
    }

    /// Presses each token in order
    pub fn press_all<I, S>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for token in tokens {
            self.press(token.as_ref());
        }
    }

    /// Text the view should render
    #[must_use]
    pub fn display_text(&self) -> &str {
        if self.error {
            ERROR_DISPLAY
        } else if !self.buffer.is_empty() {
            &self.buffer
        } else {
            &self.display
        }
    }

    /// Current phase of the state machine
    #[must_use]
    pub fn state(&self) -> EngineState {
        if self.error {
            EngineState::Error
        } else if self.buffer.is_empty() {
            EngineState::Idle
        } else if self.settled {
            EngineState::Result
        } else {
            EngineState::Accumulating
        }
    }

    /// Returns the expression buffer
    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Returns the stored display value
    #[must_use]
    pub fn display_value(&self) -> &str {
        &self.display
    }

    /// Returns true while the error display is active
    #[must_use]
    pub fn has_error(&self) -> bool {
        self.error
    }

    /// Returns the engine configuration
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn clear(&mut self) {
        self.buffer.clear();
        self.display = IDLE_DISPLAY.to_string();
        self.error = false;
        self.settled = false;
    }

    fn evaluate(&mut self) {
        if self.buffer.is_empty() {
            return;
        }

        match self.evaluator.evaluate_buffer(&self.buffer) {
            Ok(value) => {
                let text = format_number(value);
                debug!(expression = %self.buffer, result = %text, "evaluated");
                self.buffer.clone_from(&text);
                self.display = text;
                self.error = false;
                self.settled = true;
            }
            Err(err) => {
                debug!(expression = %self.buffer, error = %err, "evaluation failed");
                self.error = true;
                self.buffer.clear();
                self.settled = false;
            }
        }
    }

    fn append(&mut self, token: &str) {
        if self.error {
            self.error = false;
            self.buffer.clear();
        }
        self.buffer.push_str(token);
        self.settled = false;
    }
}
