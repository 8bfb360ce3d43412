//! Command handlers
//!
//! Each handler writes to any `Write` so tests can capture output.

pub mod config;
pub mod eval;
pub mod keypad;
pub mod press;

pub use config::execute_config;
pub use eval::execute_eval;
pub use keypad::execute_keypad;
pub use press::{collect_tokens, execute_press};

use console::style;
use keypad_calc::engine::ERROR_DISPLAY;

/// Display text as printed to the terminal; the error display is red
#[must_use]
pub fn styled_display(text: &str) -> String {
    if text == ERROR_DISPLAY {
        style(text).red().bold().to_string()
    } else {
        text.to_string()
    }
}
