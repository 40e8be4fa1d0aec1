//! Search bar widget: the text input at the top of the screen.
//!
//! # Editing
//!
//! - `Char(c)` inserts at the cursor.
//! - `Backspace` deletes the character before the cursor.
//! - `Nav(Left)` / `Nav(Right)` move the cursor.
//!
//! The bar only edits text. Searching is driven by the app shell, which
//! forwards every change to the search controller.

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct SearchBarState {
    /// The text typed by the user.
    pub query: String,
    /// Byte offset of the cursor within `query`.
    pub cursor: usize,
    /// Set by the search layer; shows the clear hint.
    pub has_text: bool,
}

impl SearchBarState {
    /// Empty the field.
    pub fn clear(&mut self) {
        self.query.clear();
        self.cursor = 0;
    }

    /// Handle an editing event. Returns `true` when the text changed.
    pub fn handle(&mut self, event: &AppEvent) -> bool {
        match event {
            AppEvent::Char(c) => {
                self.query.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                tracing::debug!(query = %self.query, cursor = self.cursor, "search: char inserted");
                true
            }
            AppEvent::Backspace => {
                if self.cursor == 0 {
                    return false;
                }
                // Walk back one char boundary
                let prev = self.query[..self.cursor]
                    .char_indices()
                    .last()
                    .map(|(i, _)| i)
                    .unwrap_or(0);
                self.query.remove(prev);
                self.cursor = prev;
                tracing::debug!(query = %self.query, cursor = self.cursor, "search: backspace");
                true
            }
            AppEvent::Nav(Direction::Left) => {
                if self.cursor > 0 {
                    self.cursor = self.query[..self.cursor]
                        .char_indices()
                        .last()
                        .map(|(i, _)| i)
                        .unwrap_or(0);
                }
                false
            }
            AppEvent::Nav(Direction::Right) => {
                if self.cursor < self.query.len() {
                    self.cursor = self.query[self.cursor..]
                        .char_indices()
                        .nth(1)
                        .map(|(i, _)| self.cursor + i)
                        .unwrap_or(self.query.len());
                }
                false
            }
            _ => false,
        }
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct SearchBar<'a> {
    state: &'a SearchBarState,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> SearchBar<'a> {
    pub fn new(state: &'a SearchBarState, focused: bool, theme: &'a Theme) -> Self {
        Self { state, focused, theme }
    }

    /// Absolute terminal position of the text cursor within this widget's
    /// rendered area. Pass to `frame.set_cursor_position()` after rendering.
    pub fn cursor_position(&self, area: Rect) -> (u16, u16) {
        // The block adds 1-cell borders; text starts at (area.x+1, area.y+1).
        let typed = &self.state.query[..self.state.cursor];
        let col = u16::try_from(typed.width()).unwrap_or(u16::MAX);
        let x = area
            .x
            .saturating_add(1)
            .saturating_add(col)
            .min(area.right().saturating_sub(1));
        let y = area.y.saturating_add(1);
        (x, y)
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border_unfocused
        };

        let mut block = Block::bordered().title("Search").border_style(border_style);
        if self.state.has_text {
            block = block.title(
                Line::from(Span::styled(" Esc to clear ", self.theme.hint)).alignment(Alignment::Right),
            );
        }

        let inner = block.inner(area);
        block.render(area, buf);

        let line = if self.state.query.is_empty() && !self.focused {
            Line::from(Span::styled(
                "press / to search the questions",
                Style::default().add_modifier(Modifier::DIM),
            ))
        } else {
            Line::from(self.state.query.as_str())
        };
        Paragraph::new(line).render(inner, buf);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> SearchBarState {
        let mut s = SearchBarState::default();
        for c in text.chars() {
            s.handle(&AppEvent::Char(c));
        }
        s
    }

    #[test]
    fn cursor_stays_in_the_box_for_huge_queries() {
        let mut s = SearchBarState::default();
        s.query = "a".repeat(70_000);
        s.cursor = s.query.len();
        let theme = Theme::load(crate::theme::ThemeKind::Light);
        let area = Rect::new(0, 0, 20, 3);
        assert_eq!(SearchBar::new(&s, true, &theme).cursor_position(area), (19, 1));
    }

    #[test]
    fn cursor_column_counts_wide_characters() {
        let s = typed("住民");
        let theme = Theme::load(crate::theme::ThemeKind::Light);
        let area = Rect::new(0, 0, 20, 3);
        assert_eq!(SearchBar::new(&s, true, &theme).cursor_position(area), (5, 1));
    }

    #[test]
    fn typing_appends_and_reports_change() {
        let mut s = SearchBarState::default();
        assert!(s.handle(&AppEvent::Char('b')));
        assert!(s.handle(&AppEvent::Char('é')));
        assert_eq!(s.query, "bé");
        assert_eq!(s.cursor, "bé".len());
    }

    #[test]
    fn backspace_removes_multibyte_char() {
        let mut s = typed("café");
        assert!(s.handle(&AppEvent::Backspace));
        assert_eq!(s.query, "caf");
    }

    #[test]
    fn backspace_at_start_is_not_a_change() {
        let mut s = SearchBarState::default();
        assert!(!s.handle(&AppEvent::Backspace));
    }

    #[test]
    fn cursor_moves_do_not_change_text() {
        let mut s = typed("ab");
        assert!(!s.handle(&AppEvent::Nav(Direction::Left)));
        assert_eq!(s.cursor, 1);
        s.handle(&AppEvent::Char('x'));
        assert_eq!(s.query, "axb");
        assert!(!s.handle(&AppEvent::Nav(Direction::Right)));
        assert_eq!(s.cursor, 3);
    }

    #[test]
    fn clear_resets_text_and_cursor() {
        let mut s = typed("town");
        s.clear();
        assert_eq!(s.query, "");
        assert_eq!(s.cursor, 0);
    }
}
