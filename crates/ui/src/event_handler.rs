use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

/// High-level action mapped from a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    InsertChar(char),
    Newline,
    Backspace,
    Delete,
    MoveLeft,
    MoveRight,
    MoveHome,
    MoveEnd,
    Send,
    HistoryUp,
    HistoryDown,
    ScrollUp,
    ScrollDown,
    NextBlock,
    PrevBlock,
    ToggleExpand,
    ToggleLineNumbers,
    CopyCode,
    ClearHistory,
    Exit,
}

/// Polls crossterm and maps terminal events onto [`KeyAction`]s
pub struct EventHandler;

impl EventHandler {
    /// Non-blocking read of the next key action, if any
    pub fn read() -> Option<KeyAction> {
        if !event::poll(Duration::ZERO).ok()? {
            return None;
        }

        match event::read().ok()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => Self::map_key(key),
            _ => None,
        }
    }

    /// Map one key event onto an action
    pub fn map_key(key: KeyEvent) -> Option<KeyAction> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Some(KeyAction::Exit),
                KeyCode::Char('j') => Some(KeyAction::Newline),
                KeyCode::Char('l') => Some(KeyAction::ClearHistory),
                KeyCode::Char('e') => Some(KeyAction::ToggleExpand),
                KeyCode::Char('n') => Some(KeyAction::ToggleLineNumbers),
                KeyCode::Char('y') => Some(KeyAction::CopyCode),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Esc => Some(KeyAction::Exit),
            KeyCode::Enter => Some(KeyAction::Send),
            KeyCode::Backspace => Some(KeyAction::Backspace),
            KeyCode::Delete => Some(KeyAction::Delete),
            KeyCode::Left => Some(KeyAction::MoveLeft),
            KeyCode::Right => Some(KeyAction::MoveRight),
            KeyCode::Home => Some(KeyAction::MoveHome),
            KeyCode::End => Some(KeyAction::MoveEnd),
            KeyCode::Up => Some(KeyAction::HistoryUp),
            KeyCode::Down => Some(KeyAction::HistoryDown),
            KeyCode::PageUp => Some(KeyAction::ScrollUp),
            KeyCode::PageDown => Some(KeyAction::ScrollDown),
            KeyCode::Tab => Some(KeyAction::NextBlock),
            KeyCode::BackTab => Some(KeyAction::PrevBlock),
            KeyCode::Char(c) => Some(KeyAction::InsertChar(c)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_plain_chars_insert() {
        assert_eq!(EventHandler::map_key(key(KeyCode::Char('a'))), Some(KeyAction::InsertChar('a')));
        assert_eq!(EventHandler::map_key(key(KeyCode::Char('?'))), Some(KeyAction::InsertChar('?')));
    }

    #[test]
    fn test_enter_sends() {
        assert_eq!(EventHandler::map_key(key(KeyCode::Enter)), Some(KeyAction::Send));
    }

    #[test]
    fn test_ctrl_bindings() {
        assert_eq!(EventHandler::map_key(ctrl('j')), Some(KeyAction::Newline));
        assert_eq!(EventHandler::map_key(ctrl('l')), Some(KeyAction::ClearHistory));
        assert_eq!(EventHandler::map_key(ctrl('e')), Some(KeyAction::ToggleExpand));
        assert_eq!(EventHandler::map_key(ctrl('n')), Some(KeyAction::ToggleLineNumbers));
        assert_eq!(EventHandler::map_key(ctrl('y')), Some(KeyAction::CopyCode));
        assert_eq!(EventHandler::map_key(ctrl('c')), Some(KeyAction::Exit));
        assert_eq!(EventHandler::map_key(ctrl('x')), None);
    }

    #[test]
    fn test_block_selection_keys() {
        assert_eq!(EventHandler::map_key(key(KeyCode::Tab)), Some(KeyAction::NextBlock));
        assert_eq!(EventHandler::map_key(key(KeyCode::BackTab)), Some(KeyAction::PrevBlock));
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(EventHandler::map_key(key(KeyCode::Up)), Some(KeyAction::HistoryUp));
        assert_eq!(EventHandler::map_key(key(KeyCode::PageUp)), Some(KeyAction::ScrollUp));
        assert_eq!(EventHandler::map_key(key(KeyCode::Esc)), Some(KeyAction::Exit));
    }
}
