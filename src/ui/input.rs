//! Keyboard input
//!
//! Pending key events are drained without blocking and mapped to dashboard
//! commands.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

/// Something the operator asked the dashboard to do.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum Command {
    /// Leave the dashboard.
    Quit,
    /// Attach to an absolute instance id.
    Select(u32),
    /// Step the instance id up or down.
    Step(i64),
}

impl Command {
    pub fn from_key(key: &KeyEvent) -> Option<Self> {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Command::Quit)
            }
            KeyCode::Char('q') => Some(Command::Quit),
            KeyCode::Char(c @ '0'..='9') => c.to_digit(10).map(Command::Select),
            KeyCode::Char('+' | '=') => Some(Command::Step(1)),
            KeyCode::Char('-') => Some(Command::Step(-1)),
            _ => None,
        }
    }
}

/// A source of queued key presses.
pub trait InputSource {
    /// Every key press queued since the last call. Must not block.
    fn pending_keys(&mut self) -> io::Result<Vec<KeyEvent>>;
}

/// Reads key presses from the controlling terminal.
#[derive(Debug, Default)]
pub struct TerminalInput;

impl InputSource for TerminalInput {
    fn pending_keys(&mut self) -> io::Result<Vec<KeyEvent>> {
        let mut keys = Vec::new();
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                keys.push(key);
            }
        }
        Ok(keys)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn key(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    #[test]
    fn maps_control_keys() {
        assert_eq!(Command::from_key(&key('q')), Some(Command::Quit));
        assert_eq!(Command::from_key(&key('0')), Some(Command::Select(0)));
        assert_eq!(Command::from_key(&key('9')), Some(Command::Select(9)));
        assert_eq!(Command::from_key(&key('+')), Some(Command::Step(1)));
        assert_eq!(Command::from_key(&key('=')), Some(Command::Step(1)));
        assert_eq!(Command::from_key(&key('-')), Some(Command::Step(-1)));
    }

    #[test]
    fn ctrl_c_quits() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(Command::from_key(&ctrl_c), Some(Command::Quit));
    }

    #[test]
    fn other_keys_are_ignored() {
        for c in ['c', 'Q', 'x', ' ', '*'] {
            assert_eq!(Command::from_key(&key(c)), None, "key {c:?}");
        }
        assert_eq!(
            Command::from_key(&KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)),
            None
        );
    }
}
