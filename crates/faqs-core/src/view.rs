//! Boundary with the rendering layer.
//!
//! The search layer never owns the page. It reads the rendered items once
//! through [`FaqView::items`] and afterwards only toggles presentation state
//! through the remaining methods. Every mutator is fallible so a rendering
//! layer can report a stale or missing card; callers in this crate log and
//! swallow those errors.
//!
//! Expansion is a single capability shared by every caller: search-driven
//! auto-expansion uses [`FaqView::set_expanded`], and manual card toggling
//! goes through the provided [`FaqView::toggle_expanded`], which is built on
//! the same two primitives.

use crate::{
    error::ViewError,
    present::StatusMessage,
    types::{Anchor, Mark, RecordId, RenderedItem},
};

/// The rendering layer as seen by the search layer.
pub trait FaqView {
    /// Snapshot of the rendered FAQ items in document order.
    fn items(&self) -> Vec<RenderedItem>;

    /// Record which [`RecordId`] the card behind `anchor` was indexed as.
    fn stamp(&mut self, anchor: Anchor, id: RecordId) -> Result<(), ViewError>;

    fn is_expanded(&self, anchor: Anchor) -> Result<bool, ViewError>;

    fn set_expanded(&mut self, anchor: Anchor, expanded: bool) -> Result<(), ViewError>;

    /// Flip the expansion state of a card and return the new state.
    fn toggle_expanded(&mut self, anchor: Anchor) -> Result<bool, ViewError> {
        let expanded = !self.is_expanded(anchor)?;
        self.set_expanded(anchor, expanded)?;
        Ok(expanded)
    }

    /// Apply (`Some`) or remove (`None`) the search marker on a card.
    fn set_mark(&mut self, anchor: Anchor, mark: Option<Mark>) -> Result<(), ViewError>;

    fn set_highlight(&mut self, anchor: Anchor, on: bool) -> Result<(), ViewError>;

    fn scroll_into_view(&mut self, anchor: Anchor) -> Result<(), ViewError>;

    /// Render (`Some`) or clear (`None`) the search status message.
    fn set_status(&mut self, status: Option<&StatusMessage>) -> Result<(), ViewError>;

    /// Toggle the "search box has text" indicator (clear button).
    fn set_has_text(&mut self, has_text: bool) -> Result<(), ViewError>;

    /// Empty the search text field.
    fn clear_input(&mut self) -> Result<(), ViewError>;
}

/// External chatbot the zero-result status can hand a query off to.
pub trait Chatbot {
    fn open_with_query(&mut self, query: &str) -> Result<(), ViewError>;
}
