//! Calculator drivers
//!
//! A driver is anything that accepts keypad tokens and exposes the display.
//! Behavioral checks are written once against [`CalculatorDriver`] and run
//! against the bare engine and the recording driver alike.

use serde::{Deserialize, Serialize};

use crate::engine::{CalculatorEngine, EngineState, CLEAR};

/// Abstract keypad interaction
pub trait CalculatorDriver {
    /// Presses one keypad token
    fn press(&mut self, token: &str);

    /// Current display text
    fn display(&self) -> String;

    /// Current engine phase
    fn state(&self) -> EngineState;

    /// Presses `C`
    fn clear(&mut self) {
        self.press(CLEAR);
    }

    /// Presses every key in a key string, one character at a time
    fn enter_keys(&mut self, keys: &str) {
        for token in split_keys(keys) {
            self.press(token);
        }
    }
}

/// Splits a key string such as `"12+3="` into single-character tokens
#[must_use]
pub fn split_keys(keys: &str) -> Vec<&str> {
    keys.char_indices()
        .map(|(start, ch)| &keys[start..start + ch.len_utf8()])
        .collect()
}

impl CalculatorDriver for CalculatorEngine {
    fn press(&mut self, token: &str) {
        CalculatorEngine::press(self, token);
    }

    fn display(&self) -> String {
        self.display_text().to_string()
    }

    fn state(&self) -> EngineState {
        CalculatorEngine::state(self)
    }
}

/// One recorded keypress
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptStep {
    /// Token that was pressed
    pub token: String,
    /// Display after the press
    pub display: String,
    /// Engine phase after the press
    pub state: EngineState,
}

/// Ordered record of a keypad session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    /// Steps in press order
    pub steps: Vec<TranscriptStep>,
    /// Final display text
    pub display: String,
}

impl Transcript {
    /// Number of recorded presses
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns true if nothing was pressed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Serializes the transcript as pretty JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// One `token -> display` line per press
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.steps
            .iter()
            .map(|step| format!("{} -> {}", step.token, step.display))
            .collect()
    }
}

/// Driver that records every press into a [`Transcript`]
#[derive(Debug, Clone, Default)]
pub struct RecordingDriver {
    engine: CalculatorEngine,
    transcript: Transcript,
}

impl RecordingDriver {
    /// Creates a recording driver around a fresh engine
    #[must_use]
    pub fn new() -> Self {
        Self::with_engine(CalculatorEngine::new())
    }

    /// Creates a recording driver around an existing engine
    #[must_use]
    pub fn with_engine(engine: CalculatorEngine) -> Self {
        let transcript = Transcript {
            steps: Vec::new(),
            display: engine.display_text().to_string(),
        };
        Self { engine, transcript }
    }

    /// Returns the wrapped engine
    #[must_use]
    pub fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }

    /// Returns the transcript so far
    #[must_use]
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Consumes the driver, returning the transcript
    #[must_use]
    pub fn into_transcript(self) -> Transcript {
        self.transcript
    }
}

impl CalculatorDriver for RecordingDriver {
    fn press(&mut self, token: &str) {
        self.engine.press(token);
        let display = self.engine.display_text().to_string();
        self.transcript.steps.push(TranscriptStep {
            token: token.to_string(),
            display: display.clone(),
            state: self.engine.state(),
        });
        self.transcript.display = display;
    }

    fn display(&self) -> String {
        self.engine.display_text().to_string()
    }

    fn state(&self) -> EngineState {
        self.engine.state()
    }
}

// ===== Unified Behavior Checks =====
// These work with ANY CalculatorDriver implementation

/// Verifies the six reference keypad scenarios
pub fn verify_scenarios<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.enter_keys("2+3=");
    assert_eq!(driver.display(), "5");

    driver.clear();
    driver.enter_keys("(1+2=");
    assert_eq!(driver.display(), "Error");

    driver.clear();
    driver.press("=");
    assert_eq!(driver.display(), "0");
    assert_eq!(driver.state(), EngineState::Idle);

    driver.clear();
    assert_eq!(driver.display(), "0");
    driver.press("7");
    assert_eq!(driver.display(), "7");

    driver.clear();
    driver.enter_keys("*=");
    assert_eq!(driver.display(), "Error");
    driver.press("9");
    assert_eq!(driver.display(), "9");
}

/// Verifies that results seed the next expression
pub fn verify_chaining<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.enter_keys("6*7=");
    assert_eq!(driver.display(), "42");
    assert_eq!(driver.state(), EngineState::Result);

    driver.press("=");
    assert_eq!(driver.display(), "42");

    driver.enter_keys("-2=");
    assert_eq!(driver.display(), "40");

    driver.enter_keys("/8");
    assert_eq!(driver.display(), "40/8");
    assert_eq!(driver.state(), EngineState::Accumulating);
}

/// Verifies precedence and associativity through the keypad
pub fn verify_precedence<D: CalculatorDriver>(driver: &mut D) {
    for (keys, expected) in [
        ("2+3*4=", "14"),
        ("8-3-2=", "3"),
        ("8/4/2=", "1"),
        ("9-6/3*2=", "5"),
        ("1-2*-3=", "7"),
    ] {
        driver.clear();
        driver.enter_keys(keys);
        assert_eq!(driver.display(), expected, "keys {keys}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::core::NonFinitePolicy;

    #[test]
    fn test_split_keys() {
        assert_eq!(split_keys("12+3="), vec!["1", "2", "+", "3", "="]);
        assert_eq!(split_keys("C7"), vec!["C", "7"]);
        assert!(split_keys("").is_empty());
    }

    #[test]
    fn test_split_keys_multibyte() {
        assert_eq!(split_keys("1×2"), vec!["1", "×", "2"]);
    }

    #[test]
    fn test_engine_driver_scenarios() {
        let mut engine = CalculatorEngine::new();
        verify_scenarios(&mut engine);
        verify_chaining(&mut engine);
        verify_precedence(&mut engine);
    }

    #[test]
    fn test_recording_driver_scenarios() {
        let mut driver = RecordingDriver::new();
        verify_scenarios(&mut driver);
        verify_chaining(&mut driver);
        verify_precedence(&mut driver);
        assert!(!driver.transcript().is_empty());
    }

    #[test]
    fn test_recording_driver_transcript() {
        let mut driver = RecordingDriver::new();
        assert_eq!(driver.transcript().display, "0");
        driver.enter_keys("2+3=");

        let transcript = driver.into_transcript();
        assert_eq!(transcript.len(), 4);
        assert_eq!(transcript.display, "5");
        assert_eq!(
            transcript.steps[3],
            TranscriptStep {
                token: "=".into(),
                display: "5".into(),
                state: EngineState::Result,
            }
        );
        assert_eq!(transcript.lines()[1], "+ -> 2+");
    }

    #[test]
    fn test_transcript_json() {
        let mut driver = RecordingDriver::new();
        driver.enter_keys("1/0=");
        let json = driver.transcript().to_json().unwrap();
        let parsed: Transcript = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.display, "Infinity");
        assert!(json.contains("\"state\": \"result\""));
    }

    #[test]
    fn test_recording_driver_with_engine_config() {
        let config = EngineConfig::new().with_non_finite(NonFinitePolicy::Reject);
        let mut driver = RecordingDriver::with_engine(CalculatorEngine::with_config(config));
        driver.enter_keys("1/0=");
        assert_eq!(driver.display(), "Error");
        assert_eq!(driver.state(), EngineState::Error);
        assert!(driver.engine().has_error());
    }

    #[test]
    fn test_default_clear_goes_through_press() {
        let mut driver = RecordingDriver::new();
        driver.clear();
        assert_eq!(driver.transcript().steps[0].token, "C");
    }
}
