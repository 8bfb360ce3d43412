//! Keypad Calculator Engine
//!
//! The state machine behind a 16-key arithmetic calculator: keypresses
//! accumulate into an expression buffer, `=` sanitizes and evaluates it with
//! IEEE double arithmetic, `C` resets, and a failed evaluation shows `Error`
//! until the next key.
//!
//! Expressions are evaluated by an explicit tokenizer and recursive-descent
//! parser over `+ - * / ( )` with conventional precedence; nothing is ever
//! executed dynamically.
//!
//! # Example
//!
//! ```rust
//! use keypad_calc::prelude::*;
//!
//! let mut engine = CalculatorEngine::new();
//! for key in ["2", "+", "3", "="] {
//!     engine.press(key);
//! }
//! assert_eq!(engine.display_text(), "5");
//!
//! engine.press("/");
//! engine.press("0");
//! engine.press("=");
//! assert_eq!(engine.display_text(), "Infinity");
//!
//! // Reject non-finite results instead
//! let config = EngineConfig::new().with_non_finite(NonFinitePolicy::Reject);
//! let mut strict = CalculatorEngine::with_config(config);
//! strict.press_all(["1", "/", "0", "="]);
//! assert_eq!(strict.display_text(), "Error");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod core;
pub mod driver;
pub mod engine;
pub mod keypad;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{ConfigError, EngineConfig};
    pub use crate::core::evaluator::{sanitize, Evaluator};
    pub use crate::core::number::format_number;
    pub use crate::core::parser::{AstNode, Parser, Token, Tokenizer};
    pub use crate::core::{CalcError, CalcResult, NonFinitePolicy, Operation};
    pub use crate::driver::{CalculatorDriver, RecordingDriver, Transcript, TranscriptStep};
    pub use crate::engine::{CalculatorEngine, EngineState};
    pub use crate::keypad::{Digit, Keypad, KeypadAction, KeypadButton};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        let mut engine = CalculatorEngine::new();
        engine.press_all(["4", "*", "(", "1", "+", "2", ")", "="]);
        assert_eq!(engine.display_text(), "12");
    }

    #[test]
    fn test_keypad_drives_engine() {
        let keypad = Keypad::new();
        let mut engine = CalculatorEngine::new();
        for id in ["btn-9", "btn-minus", "btn-4", "btn-equals"] {
            let token = keypad.handle_click(id).unwrap();
            engine.press(token);
        }
        assert_eq!(engine.display_text(), "5");
    }

    #[test]
    fn test_every_key_is_accepted() {
        let keypad = Keypad::new();
        let mut engine = CalculatorEngine::new();
        for button in keypad.buttons() {
            engine.press(button.action.token());
        }
        // 789/456*123-C resets, then 0=+ leaves "0+"
        assert_eq!(engine.display_text(), "0+");
    }

    #[test]
    fn test_evaluator_direct() {
        let eval = Evaluator::new();
        assert_eq!(eval.evaluate_str("42*(3+7)"), Ok(420.0));
        assert_eq!(format_number(eval.evaluate_str("1/8").unwrap()), "0.125");
    }
}
