//! Keyboard mapping for the game screen.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Input actions for Flappy Bird.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlappyInput {
    /// Flap (Space, Up, Enter or W).
    Jump,
    /// Leave the game (Esc, Q or Ctrl-C).
    Quit,
    /// Any other key.
    Other,
}

/// Map a key event to a game input.
///
/// Only presses count, so holding a key does not keep flapping.
pub fn map_key(key: KeyEvent) -> FlappyInput {
    if key.kind != KeyEventKind::Press {
        return FlappyInput::Other;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => FlappyInput::Quit,
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter | KeyCode::Char('w') => {
            FlappyInput::Jump
        }
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => FlappyInput::Quit,
        _ => FlappyInput::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_jump_keys() {
        assert_eq!(map_key(press(KeyCode::Char(' '))), FlappyInput::Jump);
        assert_eq!(map_key(press(KeyCode::Up)), FlappyInput::Jump);
        assert_eq!(map_key(press(KeyCode::Enter)), FlappyInput::Jump);
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(map_key(press(KeyCode::Esc)), FlappyInput::Quit);
        assert_eq!(map_key(press(KeyCode::Char('q'))), FlappyInput::Quit);
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            FlappyInput::Quit
        );
    }

    #[test]
    fn test_plain_c_is_other() {
        assert_eq!(map_key(press(KeyCode::Char('c'))), FlappyInput::Other);
    }

    #[test]
    fn test_repeat_and_release_ignored() {
        let repeat = KeyEvent {
            code: KeyCode::Char(' '),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Repeat,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key(repeat), FlappyInput::Other);

        let release = KeyEvent {
            kind: KeyEventKind::Release,
            ..repeat
        };
        assert_eq!(map_key(release), FlappyInput::Other);
    }
}
