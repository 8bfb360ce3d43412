//! Keypad layout
//!
//! The fixed 16-key pad, laid out in four columns:
//!
//! ```text
//! [ 7 ] [ 8 ] [ 9 ] [ / ]
//! [ 4 ] [ 5 ] [ 6 ] [ * ]
//! [ 1 ] [ 2 ] [ 3 ] [ - ]
//! [ C ] [ 0 ] [ = ] [ + ]
//! ```
//!
//! Besides lookup by position and id, the keypad renders itself as
//! plain text lines and maps text-cell coordinates back to keys, which is all
//! a terminal view needs.

use crate::core::Operation;
use crate::engine::{CLEAR, EQUALS};

/// Keypad symbols in row-major order
pub const SYMBOLS: [&str; 16] = [
    "7", "8", "9", "/", "4", "5", "6", "*", "1", "2", "3", "-", CLEAR, "0", EQUALS, "+",
];

/// Number of grid columns
pub const COLUMNS: usize = 4;

const DIGITS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

/// Width of a rendered key, e.g. `[ 7 ]`
pub const KEY_WIDTH: usize = 5;
/// Horizontal distance between key origins
pub const KEY_STRIDE: usize = KEY_WIDTH + 1;
/// Width of the text between the frame's side borders
pub const INNER_WIDTH: usize = COLUMNS * KEY_STRIDE - 1;
/// Line on which the first key row is rendered
pub const GRID_TOP: usize = 3;
/// Column at which the first key is rendered
pub const GRID_LEFT: usize = 2;

/// A decimal digit key, always in `0..=9`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Digit(u8);

impl Digit {
    /// Returns `None` for values above 9
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value < DIGITS.len() as u8 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Numeric value
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Token the digit key sends
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        DIGITS[self.0 as usize]
    }
}

impl std::fmt::Display for Digit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What pressing a key does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeypadAction {
    /// Insert a digit
    Digit(Digit),
    /// Insert an operator
    Operator(Operation),
    /// Evaluate the expression
    Equals,
    /// Clear everything
    Clear,
}

impl KeypadAction {
    /// Parses a keypad symbol
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            CLEAR => Some(Self::Clear),
            EQUALS => Some(Self::Equals),
            _ => {
                let mut chars = symbol.chars();
                let ch = chars.next()?;
                if chars.next().is_some() {
                    return None;
                }
                ch.to_digit(10)
                    .and_then(|d| Digit::new(d as u8))
                    .map(Self::Digit)
                    .or_else(|| Operation::from_char(ch).map(Self::Operator))
            }
        }
    }

    /// Token handed to the engine's `press`
    #[must_use]
    pub fn token(&self) -> &'static str {
        match self {
            Self::Digit(d) => d.symbol(),
            Self::Operator(op) => op.symbol(),
            Self::Equals => EQUALS,
            Self::Clear => CLEAR,
        }
    }

    /// Element id for this action
    #[must_use]
    pub fn element_id(&self) -> String {
        match self {
            Self::Digit(d) => format!("btn-{d}"),
            Self::Operator(op) => format!("btn-{}", op_name(*op)),
            Self::Equals => "btn-equals".to_string(),
            Self::Clear => "btn-clear".to_string(),
        }
    }
}

fn op_name(op: Operation) -> &'static str {
    match op {
        Operation::Add => "plus",
        Operation::Subtract => "minus",
        Operation::Multiply => "times",
        Operation::Divide => "divide",
    }
}

/// A single key on the pad
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// What the key does
    pub action: KeypadAction,
    /// Element id, e.g. `btn-7` or `btn-equals`
    pub id: String,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
}

impl KeypadButton {
    /// Creates a key at the given grid position
    #[must_use]
    pub fn new(action: KeypadAction, row: usize, col: usize) -> Self {
        Self {
            id: action.element_id(),
            action,
            row,
            col,
        }
    }

    /// Symbol printed on the key
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.action.token()
    }
}

/// The 4x4 calculator keypad
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        let buttons = SYMBOLS
            .iter()
            .enumerate()
            .filter_map(|(index, symbol)| {
                KeypadAction::from_symbol(symbol)
                    .map(|action| KeypadButton::new(action, index / COLUMNS, index % COLUMNS))
            })
            .collect();
        Self { buttons }
    }

    /// Returns the number of keys
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.buttons.len().div_ceil(COLUMNS), COLUMNS)
    }

    /// All keys in row-major order
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButton] {
        &self.buttons
    }

    /// Gets a key by row and column
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if col < COLUMNS {
            self.buttons.get(row * COLUMNS + col)
        } else {
            None
        }
    }

    /// Finds a key by element id
    #[must_use]
    pub fn find_button_by_id(&self, id: &str) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Maps a click on an element id to the token to press
    #[must_use]
    pub fn handle_click(&self, element_id: &str) -> Option<&'static str> {
        self.find_button_by_id(element_id).map(|b| b.action.token())
    }

    /// Maps a text cell (relative to the rendering's top-left) to a key.
    ///
    /// The gaps between keys and the frame belong to no key.
    #[must_use]
    pub fn hit_test(&self, x: usize, y: usize) -> Option<&KeypadButton> {
        let row = y.checked_sub(GRID_TOP)?;
        let offset = x.checked_sub(GRID_LEFT)?;
        if offset % KEY_STRIDE >= KEY_WIDTH {
            return None;
        }
        self.get_button_at(row, offset / KEY_STRIDE)
    }

    /// Text-cell origin of the key at a grid position
    #[must_use]
    pub fn key_origin(&self, row: usize, col: usize) -> Option<(usize, usize)> {
        self.get_button_at(row, col)
            .map(|_| (GRID_LEFT + col * KEY_STRIDE, GRID_TOP + row))
    }

    /// Renders the display and keypad as framed text lines.
    ///
    /// Display text wider than the frame keeps its rightmost characters.
    #[must_use]
    pub fn render(&self, display: &str) -> Vec<String> {
        let border = format!("+{}+", "-".repeat(INNER_WIDTH + 2));
        let mut lines = vec![
            border.clone(),
            format!("| {:>width$} |", fit_display(display), width = INNER_WIDTH),
            border.clone(),
        ];

        for row in self.buttons.chunks(COLUMNS) {
            let keys: Vec<String> = row.iter().map(|b| format!("[ {} ]", b.label())).collect();
            lines.push(format!("| {:<width$} |", keys.join(" "), width = INNER_WIDTH));
        }

        lines.push(border);
        lines
    }
}

fn fit_display(display: &str) -> String {
    let count = display.chars().count();
    display
        .chars()
        .skip(count.saturating_sub(INNER_WIDTH))
        .collect()
}
