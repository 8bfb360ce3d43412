//! Interactive terminal keypad
//!
//! The keyboard only navigates the drawn keypad; keys reach the engine
//! solely by activating a key, either with Enter/Space on the highlighted
//! key or with a mouse click on it.

use std::io::{self, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEventKind,
};
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{execute, queue};
use keypad_calc::engine::CalculatorEngine;
use keypad_calc::keypad::{Keypad, COLUMNS};
use tracing::{debug, info, warn};

use crate::error::CliResult;

/// Help line drawn under the keypad
pub const HINT: &str = "arrows move, enter presses, q quits";

/// What a terminal event asks the view to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewAction {
    /// Move the highlight up
    MoveUp,
    /// Move the highlight down
    MoveDown,
    /// Move the highlight left
    MoveLeft,
    /// Move the highlight right
    MoveRight,
    /// Press the highlighted key
    Activate,
    /// Mouse click at a text cell
    Click {
        /// Column
        x: u16,
        /// Row
        y: u16,
    },
    /// Repaint without changing state
    Redraw,
    /// Leave the view
    Quit,
    /// Ignored event
    None,
}

impl ViewAction {
    /// Maps a crossterm event to an action
    #[must_use]
    pub fn from_event(event: &Event) -> Self {
        match event {
            Event::Key(key) => Self::from_key(*key),
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => Self::Click {
                    x: mouse.column,
                    y: mouse.row,
                },
                _ => Self::None,
            },
            Event::Resize(..) => Self::Redraw,
            _ => Self::None,
        }
    }

    fn from_key(key: KeyEvent) -> Self {
        if key.kind != KeyEventKind::Press {
            return Self::None;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Self::Quit,
                _ => Self::None,
            };
        }
        match key.code {
            KeyCode::Up => Self::MoveUp,
            KeyCode::Down => Self::MoveDown,
            KeyCode::Left => Self::MoveLeft,
            KeyCode::Right => Self::MoveRight,
            KeyCode::Enter | KeyCode::Char(' ') => Self::Activate,
            KeyCode::Esc | KeyCode::Char('q') => Self::Quit,
            _ => Self::None,
        }
    }
}

/// Keypad view state: the engine plus the highlighted key
#[derive(Debug, Clone)]
pub struct KeypadView {
    keypad: Keypad,
    engine: CalculatorEngine,
    cursor: (usize, usize),
}

impl KeypadView {
    /// Creates a view around an engine, highlighting the top-left key
    #[must_use]
    pub fn new(engine: CalculatorEngine) -> Self {
        Self {
            keypad: Keypad::new(),
            engine,
            cursor: (0, 0),
        }
    }

    /// Returns the engine
    #[must_use]
    pub fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }

    /// Highlighted `(row, col)`
    #[must_use]
    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    /// Applies an action; returns `false` once the view should close
    pub fn apply(&mut self, action: ViewAction) -> bool {
        let (rows, cols) = self.keypad.dimensions();
        let (row, col) = self.cursor;
        match action {
            ViewAction::MoveUp => self.cursor = (row.saturating_sub(1), col),
            ViewAction::MoveDown => self.cursor = ((row + 1).min(rows - 1), col),
            ViewAction::MoveLeft => self.cursor = (row, col.saturating_sub(1)),
            ViewAction::MoveRight => self.cursor = (row, (col + 1).min(cols - 1)),
            ViewAction::Activate => self.activate(row, col),
            ViewAction::Click { x, y } => {
                if let Some(button) = self.keypad.hit_test(usize::from(x), usize::from(y)) {
                    let (row, col) = (button.row, button.col);
                    self.cursor = (row, col);
                    self.activate(row, col);
                }
            }
            ViewAction::Quit => return false,
            ViewAction::Redraw | ViewAction::None => {}
        }
        true
    }

    fn activate(&mut self, row: usize, col: usize) {
        if let Some(button) = self.keypad.get_button_at(row, col) {
            let token = button.action.token();
            self.engine.press(token);
            debug!(token, row, col, "key activated");
        }
    }

    /// Frame lines followed by the help line
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let mut lines = self.keypad.render(self.engine.display_text());
        lines.push(HINT.to_string());
        lines
    }

    /// Paints the whole view, highlighting the selected key in reverse video
    pub fn draw<W: Write>(&self, out: &mut W) -> io::Result<()> {
        queue!(out, Clear(ClearType::All))?;
        for (y, line) in self.lines().iter().enumerate() {
            queue!(out, MoveTo(0, y as u16), Print(line))?;
        }

        let (row, col) = self.cursor;
        if let (Some((x, y)), Some(button)) = (
            self.keypad.key_origin(row, col),
            self.keypad.get_button_at(row, col),
        ) {
            queue!(
                out,
                MoveTo(x as u16, y as u16),
                SetAttribute(Attribute::Reverse),
                Print(format!("[ {} ]", button.label())),
                SetAttribute(Attribute::Reset)
            )?;
        }
        out.flush()
    }
}

/// Raw mode plus alternate screen; restored on drop if not restored explicitly
#[derive(Debug)]
struct TerminalGuard {
    active: bool,
}

impl TerminalGuard {
    fn enter<W: Write>(out: &mut W) -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = Self { active: true };
        execute!(out, EnterAlternateScreen, EnableMouseCapture, Hide)?;
        Ok(guard)
    }

    fn restore(mut self) -> io::Result<()> {
        self.active = false;
        restore_terminal(&mut io::stdout(), disable_raw_mode)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.active {
            if let Err(err) = restore_terminal(&mut io::stdout(), disable_raw_mode) {
                warn!(%err, "terminal restore failed");
            }
        }
    }
}

/// Leaves the alternate screen and disables raw mode.
///
/// Both steps run even if the first fails; the first error is returned.
fn restore_terminal<W, F>(out: &mut W, disable_raw: F) -> io::Result<()>
where
    W: Write,
    F: FnOnce() -> io::Result<()>,
{
    let screen = execute!(out, Show, DisableMouseCapture, LeaveAlternateScreen);
    let raw = disable_raw();
    screen.and(raw)
}

/// Runs the view on the real terminal until the user quits
pub fn run(engine: CalculatorEngine) -> CliResult<()> {
    let mut stdout = io::stdout();
    let guard = TerminalGuard::enter(&mut stdout)?;
    info!(columns = COLUMNS, "interactive keypad started");

    let mut view = KeypadView::new(engine);
    let result = event_loop(&mut view, &mut stdout);

    guard.restore()?;
    info!(display = view.engine().display_text(), "interactive keypad closed");

    result
}

fn event_loop<W: Write>(view: &mut KeypadView, out: &mut W) -> CliResult<()> {
    loop {
        view.draw(out)?;
        if !view.apply(ViewAction::from_event(&event::read()?)) {
            return Ok(());
        }
    }
}
