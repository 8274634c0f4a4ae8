//! Keyboard mapping for both games

use crate::snake::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Puzzle key actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordleKey {
    Letter(char),
    Backspace,
    Submit,
    /// Close the hint, or leave when no hint is shown
    Escape,
    Quit,
}

/// Grid-chase key actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnakeKey {
    Turn(Direction),
    /// Start from the ready screen, or leave an ended run
    Confirm,
    /// Play again after a run ended
    Restart,
    Quit,
}

fn is_quit(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
}

#[must_use]
pub fn wordle_key(key: KeyEvent) -> Option<WordleKey> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if is_quit(&key) {
        return Some(WordleKey::Quit);
    }
    match key.code {
        KeyCode::Char(c) if c.is_ascii_alphabetic() => Some(WordleKey::Letter(c)),
        KeyCode::Backspace => Some(WordleKey::Backspace),
        KeyCode::Enter => Some(WordleKey::Submit),
        KeyCode::Esc => Some(WordleKey::Escape),
        _ => None,
    }
}

#[must_use]
pub fn snake_key(key: KeyEvent) -> Option<SnakeKey> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if is_quit(&key) {
        return Some(SnakeKey::Quit);
    }
    match key.code {
        KeyCode::Up | KeyCode::Char('w') => Some(SnakeKey::Turn(Direction::Up)),
        KeyCode::Down | KeyCode::Char('s') => Some(SnakeKey::Turn(Direction::Down)),
        KeyCode::Left | KeyCode::Char('a') => Some(SnakeKey::Turn(Direction::Left)),
        KeyCode::Right | KeyCode::Char('d') => Some(SnakeKey::Turn(Direction::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(SnakeKey::Confirm),
        KeyCode::Char('r') => Some(SnakeKey::Restart),
        KeyCode::Esc | KeyCode::Char('q') => Some(SnakeKey::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn wordle_letters_and_controls() {
        assert_eq!(wordle_key(press(KeyCode::Char('h'))), Some(WordleKey::Letter('h')));
        assert_eq!(wordle_key(press(KeyCode::Enter)), Some(WordleKey::Submit));
        assert_eq!(wordle_key(press(KeyCode::Backspace)), Some(WordleKey::Backspace));
        assert_eq!(wordle_key(press(KeyCode::Esc)), Some(WordleKey::Escape));
        assert_eq!(wordle_key(press(KeyCode::Char('3'))), None);
        assert_eq!(wordle_key(press(KeyCode::Up)), None);
    }

    #[test]
    fn ctrl_c_quits_both() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(wordle_key(key), Some(WordleKey::Quit));
        assert_eq!(snake_key(key), Some(SnakeKey::Quit));
    }

    #[test]
    fn snake_arrows_and_wasd() {
        assert_eq!(snake_key(press(KeyCode::Up)), Some(SnakeKey::Turn(Direction::Up)));
        assert_eq!(snake_key(press(KeyCode::Char('a'))), Some(SnakeKey::Turn(Direction::Left)));
        assert_eq!(snake_key(press(KeyCode::Char(' '))), Some(SnakeKey::Confirm));
        assert_eq!(snake_key(press(KeyCode::Char('r'))), Some(SnakeKey::Restart));
        assert_eq!(snake_key(press(KeyCode::Char('x'))), None);
    }

    #[test]
    fn releases_are_ignored() {
        let mut key = press(KeyCode::Enter);
        key.kind = KeyEventKind::Release;
        assert_eq!(wordle_key(key), None);
        assert_eq!(snake_key(key), None);
    }
}
