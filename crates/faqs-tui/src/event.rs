//! Semantic application events: crossterm key events mapped to a
//! widget-agnostic vocabulary so widgets never touch crossterm directly.
//!
//! # Usage
//!
//! In the main event loop, call [`to_app_event`] on every [`crossterm::event::Event`]
//! and match on the returned [`AppEvent`] instead of crossterm types.
//!
//! # Keybindings
//!
//! | Key(s)                  | Event                      |
//! |-------------------------|----------------------------|
//! | `q`, `Ctrl+c`           | `Quit`                     |
//! | `Tab`                   | `FocusNext`                |
//! | `/`                     | `SearchFocus`              |
//! | `Ctrl+d`                | `ToggleTheme`              |
//! | `Ctrl+o`                | `AskChatbot`               |
//! | `PageUp`                | `PageUp`                   |
//! | `PageDown`              | `PageDown`                 |
//! | `↑` / `k`               | `Nav(Up)`                  |
//! | `↓` / `j`               | `Nav(Down)`                |
//! | `←` / `→`               | `Nav(Left)` / `Nav(Right)` |
//! | printable char          | `Char(c)`                  |
//! | `Backspace`             | `Backspace`                |
//! | `Enter`                 | `Enter`                    |
//! | `Escape`                | `Escape`                   |
//! | terminal resize         | `Resize(w, h)`             |
//!
//! ## Insert mode
//!
//! When the search bar is focused, the event loop calls
//! [`to_app_event_insert`] instead. In insert mode every printable character
//! (including `q`, `/`, `j`, `k`) produces `Char`. `Ctrl+c`, `Ctrl+d`,
//! `Ctrl+o`, `Escape`, `Enter`, `Tab`, `Backspace` and the arrow keys keep
//! their bindings.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

/// Cardinal direction for card navigation and text cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A semantic application event derived from a raw crossterm [`Event`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Exit the application.
    Quit,
    /// Move keyboard focus between the card list and the search bar.
    FocusNext,
    /// Transfer focus to the search bar.
    SearchFocus,
    /// Switch between the light and dark themes.
    ToggleTheme,
    /// Hand the current zero-result query to the chatbot.
    AskChatbot,
    PageUp,
    PageDown,
    /// Move between cards, or the text cursor when typing.
    Nav(Direction),
    /// A printable character.
    Char(char),
    Backspace,
    Enter,
    Escape,
    /// The terminal was resized to the given (width, height).
    Resize(u16, u16),
}

/// Map a raw crossterm [`Event`] to an [`AppEvent`] (card list mode).
///
/// Returns `None` for events that carry no meaning for the application
/// (mouse events, unbound keys).
pub fn to_app_event(event: Event) -> Option<AppEvent> {
    match event {
        Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        Event::Key(key) => map_key(key),
        _ => None,
    }
}

/// Map a raw crossterm [`Event`] to an [`AppEvent`] while the search bar is
/// focused.
pub fn to_app_event_insert(event: Event) -> Option<AppEvent> {
    match event {
        Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        Event::Key(key) => map_key_insert(key),
        _ => None,
    }
}

/// Bindings shared by both modes. Checked first.
fn map_global(key: &KeyEvent) -> Option<AppEvent> {
    use KeyCode::*;
    use KeyModifiers as Mod;

    match key.code {
        Char('c') if key.modifiers == Mod::CONTROL => Some(AppEvent::Quit),
        Char('d') if key.modifiers == Mod::CONTROL => Some(AppEvent::ToggleTheme),
        Char('o') if key.modifiers == Mod::CONTROL => Some(AppEvent::AskChatbot),
        Tab if key.modifiers == Mod::NONE => Some(AppEvent::FocusNext),
        PageUp => Some(AppEvent::PageUp),
        PageDown => Some(AppEvent::PageDown),
        Backspace if key.modifiers == Mod::NONE => Some(AppEvent::Backspace),
        Enter if key.modifiers == Mod::NONE => Some(AppEvent::Enter),
        Esc => Some(AppEvent::Escape),
        _ => None,
    }
}

fn map_key(key: KeyEvent) -> Option<AppEvent> {
    use KeyCode::*;
    use KeyModifiers as Mod;

    if let Some(event) = map_global(&key) {
        return Some(event);
    }

    match key.code {
        Char('q') if key.modifiers == Mod::NONE => Some(AppEvent::Quit),
        Char('/') if key.modifiers == Mod::NONE => Some(AppEvent::SearchFocus),

        Up | Char('k') if key.modifiers == Mod::NONE => Some(AppEvent::Nav(Direction::Up)),
        Down | Char('j') if key.modifiers == Mod::NONE => Some(AppEvent::Nav(Direction::Down)),
        Left => Some(AppEvent::Nav(Direction::Left)),
        Right => Some(AppEvent::Nav(Direction::Right)),

        // Shift is allowed so `?` arrives regardless of terminal
        Char(c) if key.modifiers == Mod::NONE || key.modifiers == Mod::SHIFT => {
            Some(AppEvent::Char(c))
        }

        _ => None,
    }
}

fn map_key_insert(key: KeyEvent) -> Option<AppEvent> {
    use KeyCode::*;
    use KeyModifiers as Mod;

    if let Some(event) = map_global(&key) {
        return Some(event);
    }

    match key.code {
        Up => Some(AppEvent::Nav(Direction::Up)),
        Down => Some(AppEvent::Nav(Direction::Down)),
        Left => Some(AppEvent::Nav(Direction::Left)),
        Right => Some(AppEvent::Nav(Direction::Right)),

        Char(c) if key.modifiers == Mod::NONE || key.modifiers == Mod::SHIFT => {
            Some(AppEvent::Char(c))
        }

        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    fn press(code: KeyCode) -> Event {
        key(code, KeyModifiers::NONE)
    }

    fn ctrl(code: KeyCode) -> Event {
        key(code, KeyModifiers::CONTROL)
    }

    #[test]
    fn quit_keys() {
        assert_eq!(to_app_event(press(KeyCode::Char('q'))), Some(AppEvent::Quit));
        assert_eq!(to_app_event(ctrl(KeyCode::Char('c'))), Some(AppEvent::Quit));
    }

    #[test]
    fn search_focus() {
        assert_eq!(
            to_app_event(press(KeyCode::Char('/'))),
            Some(AppEvent::SearchFocus)
        );
    }

    #[test]
    fn ctrl_d_toggles_theme_in_both_modes() {
        assert_eq!(to_app_event(ctrl(KeyCode::Char('d'))), Some(AppEvent::ToggleTheme));
        assert_eq!(
            to_app_event_insert(ctrl(KeyCode::Char('d'))),
            Some(AppEvent::ToggleTheme)
        );
    }

    #[test]
    fn ctrl_o_asks_chatbot_in_both_modes() {
        assert_eq!(to_app_event(ctrl(KeyCode::Char('o'))), Some(AppEvent::AskChatbot));
        assert_eq!(
            to_app_event_insert(ctrl(KeyCode::Char('o'))),
            Some(AppEvent::AskChatbot)
        );
    }

    #[test]
    fn nav_arrows_and_jk() {
        assert_eq!(to_app_event(press(KeyCode::Up)), Some(AppEvent::Nav(Direction::Up)));
        assert_eq!(to_app_event(press(KeyCode::Char('j'))), Some(AppEvent::Nav(Direction::Down)));
        assert_eq!(to_app_event(press(KeyCode::Char('k'))), Some(AppEvent::Nav(Direction::Up)));
    }

    #[test]
    fn page_keys() {
        assert_eq!(to_app_event(press(KeyCode::PageUp)), Some(AppEvent::PageUp));
        assert_eq!(to_app_event(press(KeyCode::PageDown)), Some(AppEvent::PageDown));
    }

    #[test]
    fn space_and_question_mark_are_chars() {
        assert_eq!(to_app_event(press(KeyCode::Char(' '))), Some(AppEvent::Char(' ')));
        assert_eq!(
            to_app_event(key(KeyCode::Char('?'), KeyModifiers::SHIFT)),
            Some(AppEvent::Char('?'))
        );
    }

    #[test]
    fn enter_escape_backspace() {
        assert_eq!(to_app_event(press(KeyCode::Enter)), Some(AppEvent::Enter));
        assert_eq!(to_app_event(press(KeyCode::Esc)), Some(AppEvent::Escape));
        assert_eq!(to_app_event(press(KeyCode::Backspace)), Some(AppEvent::Backspace));
    }

    #[test]
    fn resize_event() {
        assert_eq!(
            to_app_event(Event::Resize(120, 40)),
            Some(AppEvent::Resize(120, 40))
        );
    }

    #[test]
    fn unbound_key_returns_none() {
        assert_eq!(to_app_event(press(KeyCode::F(5))), None);
    }

    // ── Insert mode ────────────────────────────────────────────────────────

    #[test]
    fn insert_mode_shortcut_letters_are_chars() {
        for ch in ['q', '/', 'j', 'k', '?', ' '] {
            assert_eq!(
                to_app_event_insert(press(KeyCode::Char(ch))),
                Some(AppEvent::Char(ch)),
                "insert mode: '{ch}' should produce Char"
            );
        }
    }

    #[test]
    fn insert_mode_arrows_move_cursor() {
        assert_eq!(
            to_app_event_insert(press(KeyCode::Left)),
            Some(AppEvent::Nav(Direction::Left))
        );
        assert_eq!(
            to_app_event_insert(press(KeyCode::Right)),
            Some(AppEvent::Nav(Direction::Right))
        );
    }

    #[test]
    fn insert_mode_ctrl_c_still_quits() {
        assert_eq!(to_app_event_insert(ctrl(KeyCode::Char('c'))), Some(AppEvent::Quit));
    }
}
