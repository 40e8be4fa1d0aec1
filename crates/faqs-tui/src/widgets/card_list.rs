//! Card list widget: the collapsible FAQ cards, grouped by category.
//!
//! # Navigation (when the list is focused)
//!
//! | Key | Action |
//! |-----|--------|
//! | `↑` / `k` | Previous visible card |
//! | `↓` / `j` | Next visible card |
//! | `PageUp` / `PageDown` | Jump ten visible cards |
//!
//! Expanding and collapsing is not handled here: the app shell goes through
//! the screen's expansion capability so manual toggles and search-driven
//! expansion share one code path.
//!
//! # Scroll semantics
//!
//! `cursor` is the index of the selected card (its anchor). `top` is the first
//! card drawn; rendering moves it forward when the cursor card would fall
//! below the visible area. Filtered cards are neither drawn nor selectable.

use std::cell::Cell;

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use faqs_core::{Mark, RecordId};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

const PAGE_STEP: usize = 10;
const ANSWER_INDENT: &str = "    ";

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// One rendered FAQ card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Card {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<String>,
    /// Record this card was indexed as, stamped by the corpus builder.
    pub record: Option<RecordId>,
    pub expanded: bool,
    pub mark: Option<Mark>,
    pub highlighted: bool,
}

impl Card {
    pub fn is_visible(&self) -> bool {
        self.mark != Some(Mark::Filtered)
    }
}

#[derive(Debug, Default)]
pub struct CardListState {
    pub cards: Vec<Card>,
    /// Index of the selected card.
    pub cursor: usize,
    /// First card drawn. Adjusted during render.
    top: Cell<usize>,
}

impl CardListState {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards, cursor: 0, top: Cell::new(0) }
    }

    pub fn top(&self) -> usize {
        self.top.get()
    }

    /// Select card `index` and make sure it is drawn.
    pub fn scroll_to(&mut self, index: usize) {
        if index >= self.cards.len() {
            return;
        }
        self.cursor = index;
        if index < self.top.get() {
            self.top.set(index);
        }
        tracing::debug!(cursor = index, "cards: scrolled into view");
    }

    /// Handle a navigation event from the app shell.
    pub fn handle(&mut self, event: &AppEvent) {
        let target = match event {
            AppEvent::Nav(Direction::Up) => self.step_back(1),
            AppEvent::Nav(Direction::Down) => self.step_forward(1),
            AppEvent::PageUp => self.step_back(PAGE_STEP),
            AppEvent::PageDown => self.step_forward(PAGE_STEP),
            _ => None,
        };
        if let Some(index) = target {
            self.scroll_to(index);
        }
    }

    /// The visible card `steps` visible cards before the cursor, stopping at
    /// the first visible card.
    fn step_back(&self, steps: usize) -> Option<usize> {
        let before = (0..self.cursor.min(self.cards.len())).rev();
        before
            .filter(|&i| self.cards[i].is_visible())
            .take(steps)
            .last()
    }

    fn step_forward(&self, steps: usize) -> Option<usize> {
        ((self.cursor + 1)..self.cards.len())
            .filter(|&i| self.cards[i].is_visible())
            .take(steps)
            .last()
    }

    /// Move the cursor to the nearest visible card if it sits on a hidden one.
    pub fn settle_cursor(&mut self) {
        if self.cards.get(self.cursor).is_some_and(Card::is_visible) {
            return;
        }
        if let Some(index) = self.step_forward(1).or_else(|| self.step_back(1)) {
            self.cursor = index;
        }
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct CardList<'a> {
    state: &'a CardListState,
    title: &'a str,
    focused: bool,
    show_categories: bool,
    theme: &'a Theme,
}

impl<'a> CardList<'a> {
    pub fn new(
        state: &'a CardListState,
        title: &'a str,
        focused: bool,
        show_categories: bool,
        theme: &'a Theme,
    ) -> Self {
        Self { state, title, focused, show_categories, theme }
    }

    fn card_lines(&self, index: usize, card: &Card, width: usize) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        let chevron = if card.expanded { "▾ " } else { "▸ " };
        let mut header = vec![Span::raw(chevron)];
        if card.mark == Some(Mark::Match) {
            header.push(Span::styled("● ", self.theme.matched));
        }
        header.push(Span::styled(
            card.question.clone().unwrap_or_else(|| "(untitled question)".to_string()),
            self.theme.question,
        ));
        let mut header = Line::from(header);
        if card.highlighted {
            header = header.patch_style(self.theme.highlight);
        }
        if self.focused && index == self.state.cursor {
            header = header.patch_style(Style::default().add_modifier(Modifier::REVERSED));
        }
        lines.push(header);

        if card.expanded {
            let answer = card.answer.as_deref().unwrap_or("");
            let width = width.saturating_sub(ANSWER_INDENT.width()).max(1);
            for row in wrap(answer, width) {
                lines.push(Line::from(Span::styled(
                    format!("{ANSWER_INDENT}{row}"),
                    self.theme.answer,
                )));
            }
        }
        lines
    }
}

impl Widget for CardList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border_unfocused
        };
        let block = Block::bordered()
            .title(self.title.to_string())
            .border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let height = inner.height as usize;
        let width = inner.width as usize;
        let cards = &self.state.cards;

        if !cards.iter().any(Card::is_visible) {
            Paragraph::new(Line::from(Span::styled("No questions to show", self.theme.hint)))
                .render(inner, buf);
            return;
        }

        // Rendered blocks, one per visible card from `top`, with a heading
        // line whenever the category changes.
        let layout = |top: usize| -> Vec<(usize, Vec<Line<'static>>)> {
            let mut previous: Option<Option<&str>> = None;
            let mut out = Vec::new();
            for (index, card) in cards.iter().enumerate().skip(top) {
                if !card.is_visible() {
                    continue;
                }
                let mut lines = Vec::new();
                let category = card.category.as_deref();
                if self.show_categories && previous != Some(category) {
                    if let Some(name) = category {
                        lines.push(Line::from(Span::styled(name.to_string(), self.theme.category)));
                    }
                }
                previous = Some(category);
                lines.extend(self.card_lines(index, card, width));
                out.push((index, lines));
            }
            out
        };

        // Advance `top` until the cursor card's header fits.
        let mut top = self.state.top.get().min(self.state.cursor);
        loop {
            let blocks = layout(top);
            let mut used = 0;
            let mut cursor_fits = false;
            for (index, lines) in &blocks {
                if *index == self.state.cursor {
                    cursor_fits = used + lines.len().min(2) <= height;
                    break;
                }
                used += lines.len();
                if used >= height {
                    break;
                }
            }
            let cursor_visible = cards.get(self.state.cursor).is_some_and(Card::is_visible);
            if cursor_fits || !cursor_visible || top >= self.state.cursor {
                break;
            }
            top += 1;
        }
        self.state.top.set(top);

        let lines: Vec<Line<'static>> = layout(top)
            .into_iter()
            .flat_map(|(_, lines)| lines)
            .take(height)
            .collect();
        Paragraph::new(lines).render(inner, buf);
    }
}

/// Word wrap to `width` terminal columns.
fn wrap(text: &str, width: usize) -> Vec<String> {
    textwrap::wrap(text, width)
        .into_iter()
        .map(|row| row.into_owned())
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
