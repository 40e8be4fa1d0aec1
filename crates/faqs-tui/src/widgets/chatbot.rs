//! Assistant hand-off popup.
//!
//! The terminal has no chatbot of its own, so the hand-off opens a popup
//! holding the query that found nothing. `Enter` or `Escape` closes it.

use crate::theme::Theme;
use crate::widgets::help::centered_rect;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget, Wrap},
};

#[derive(Debug, Default)]
pub struct ChatbotState {
    /// Query handed over by the search layer while the popup is open.
    query: Option<String>,
}

impl ChatbotState {
    pub fn open(&mut self, query: &str) {
        tracing::debug!(query, "chatbot: opened");
        self.query = Some(query.to_string());
    }

    pub fn close(&mut self) {
        self.query = None;
    }

    pub fn is_open(&self) -> bool {
        self.query.is_some()
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }
}

pub struct ChatbotPopup<'a> {
    state: &'a ChatbotState,
    theme: &'a Theme,
}

impl<'a> ChatbotPopup<'a> {
    pub fn new(state: &'a ChatbotState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }
}

impl Widget for ChatbotPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(query) = self.state.query() else {
            return;
        };
        let popup = centered_rect(60, 7, area);
        Clear.render(popup, buf);

        let block = Block::bordered()
            .title(" Assistant ")
            .border_style(self.theme.border_focused);
        let inner = block.inner(popup);
        block.render(popup, buf);

        let lines = vec![
            Line::from("You asked:"),
            Line::from(Span::styled(format!("  {query}"), self.theme.question)),
            Line::from(""),
            Line::from(Span::styled(
                "The assistant will pick up from here. Enter or Esc to close.",
                self.theme.hint,
            )),
        ];
        Paragraph::new(lines).wrap(Wrap { trim: true }).render(inner, buf);
    }
}
