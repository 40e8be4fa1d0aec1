//! One-line status row under the search bar.
//!
//! Shows the outcome of the last query. A zero-result status also shows the
//! key that hands the query to the assistant. With no active search it lists
//! the most useful keys instead.

use crate::theme::Theme;
use faqs_core::StatusMessage;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

const KEY_HINTS: &str = "/ search · Enter open · Esc collapse all · Ctrl+d theme · ? help · q quit";

pub struct StatusLine<'a> {
    status: Option<&'a StatusMessage>,
    theme: &'a Theme,
}

impl<'a> StatusLine<'a> {
    pub fn new(status: Option<&'a StatusMessage>, theme: &'a Theme) -> Self {
        Self { status, theme }
    }

    fn line(&self) -> Line<'static> {
        match self.status {
            None => Line::from(Span::styled(KEY_HINTS, self.theme.hint)),
            Some(status @ StatusMessage::Found { .. }) => {
                Line::from(Span::styled(status.to_string(), self.theme.status_found))
            }
            Some(StatusMessage::NoMatch { query }) => Line::from(vec![
                Span::styled(
                    format!("No question matches \"{query}\"."),
                    self.theme.status_empty,
                ),
                Span::styled("  Ctrl+o ask the assistant", self.theme.hint),
            ]),
        }
    }
}

impl Widget for StatusLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.line()).render(area, buf);
    }
}
