//! Key bindings.
//!
//! | Key | Action |
//! |---|---|
//! | Tab / Shift-Tab / Up / Down / Enter | move between fields |
//! | printable | type into the focused field |
//! | Backspace / Ctrl-U | delete a char / clear the field |
//! | F2 / F3 | toggle desktop-mobile / light-dark |
//! | Ctrl-R | AI rewrite |
//! | Ctrl-E | export PNG |
//! | Ctrl-T / Ctrl-D | copy title / description |
//! | Ctrl-G | become a member (when offered) |
//! | Esc / Ctrl-C | quit |

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::{Action, App};
use crate::snippet::SnippetField;

/// Map a key event to an action.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('r') => Some(Action::Rewrite),
            KeyCode::Char('e') => Some(Action::Export),
            KeyCode::Char('g') => Some(Action::GrantMembership),
            KeyCode::Char('t') => Some(Action::Copy(SnippetField::Title)),
            KeyCode::Char('d') => Some(Action::Copy(SnippetField::Description)),
            KeyCode::Char('u') => Some(Action::ClearField),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Tab | KeyCode::Down | KeyCode::Enter => Some(Action::FocusNext),
        KeyCode::BackTab | KeyCode::Up => Some(Action::FocusPrev),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::F(2) => Some(Action::ToggleMode),
        KeyCode::F(3) => Some(Action::ToggleTheme),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) => Some(Action::Insert(c)),
        _ => None,
    }
}

impl App {
    pub fn handle_key(&mut self, key: KeyEvent) {
        if let Some(action) = map_key(key) {
            self.apply(action);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn plain(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_control_bindings() {
        assert_eq!(map_key(ctrl('r')), Some(Action::Rewrite));
        assert_eq!(map_key(ctrl('e')), Some(Action::Export));
        assert_eq!(map_key(ctrl('c')), Some(Action::Quit));
        assert_eq!(map_key(ctrl('g')), Some(Action::GrantMembership));
        assert_eq!(map_key(ctrl('t')), Some(Action::Copy(SnippetField::Title)));
        assert_eq!(
            map_key(ctrl('d')),
            Some(Action::Copy(SnippetField::Description))
        );
        assert_eq!(map_key(ctrl('x')), None);
    }

    #[test]
    fn test_plain_bindings() {
        assert_eq!(map_key(plain(KeyCode::Char('a'))), Some(Action::Insert('a')));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            Some(Action::Insert('A'))
        );
        assert_eq!(map_key(plain(KeyCode::Tab)), Some(Action::FocusNext));
        assert_eq!(map_key(plain(KeyCode::BackTab)), Some(Action::FocusPrev));
        assert_eq!(map_key(plain(KeyCode::F(2))), Some(Action::ToggleMode));
        assert_eq!(map_key(plain(KeyCode::F(3))), Some(Action::ToggleTheme));
        assert_eq!(map_key(plain(KeyCode::Esc)), Some(Action::Quit));
    }

    #[test]
    fn test_release_events_ignored() {
        let mut key = plain(KeyCode::Char('a'));
        key.kind = KeyEventKind::Release;
        assert_eq!(map_key(key), None);
    }
}
