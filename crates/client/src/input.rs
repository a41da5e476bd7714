//! Input processing for the CLI client.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.
use crossterm::event::{KeyCode, KeyEvent};

use wolfhunt_core::{Action, Direction, MoveAction, ShootAction};

/// High-level outcome of processing a keyboard event.
#[derive(Debug)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Submit the decoded game action to the runtime.
    Submit(Action),
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into game commands.
pub struct InputHandler;

impl InputHandler {
    /// Converts a raw key event into a higher-level command.
    pub fn handle_key(&self, key: KeyEvent) -> KeyAction {
        match key.code {
            KeyCode::Char(ch) => self.handle_char(ch),
            KeyCode::Left => Self::movement(Direction::Left),
            KeyCode::Right => Self::movement(Direction::Right),
            KeyCode::Up => Self::movement(Direction::Up),
            KeyCode::Down => Self::movement(Direction::Down),
            KeyCode::Esc => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }

    fn handle_char(&self, raw: char) -> KeyAction {
        let ch = raw.to_ascii_lowercase();
        match ch {
            'q' => KeyAction::Quit,
            'h' | 'a' => Self::movement(Direction::Left),
            'j' | 's' => Self::movement(Direction::Down),
            'k' | 'w' => Self::movement(Direction::Up),
            'l' | 'd' => Self::movement(Direction::Right),
            ' ' | 'f' => KeyAction::Submit(Action::Shoot(ShootAction)),
            _ => KeyAction::None,
        }
    }

    fn movement(direction: Direction) -> KeyAction {
        KeyAction::Submit(Action::Move(MoveAction::new(direction)))
    }
}
