//! Test builders: rendered items and a recording fake of the rendering layer.
//!
//! These are designed for readability in test assertions, not for production
//! use. They panic on invalid input rather than returning `Result`.

use faqs_core::{
    Anchor, Chatbot, FaqView, Mark, RecordId, RenderedItem, StatusMessage, ViewError,
};

// ---------------------------------------------------------------------------
// ItemBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`RenderedItem`] fixtures.
///
/// ```rust
/// let item = ItemBuilder::new(0)
///     .question("Where is the town hall")
///     .answer("Central square")
///     .category("Locations")
///     .build();
/// ```
pub struct ItemBuilder {
    item: RenderedItem,
}

impl ItemBuilder {
    pub fn new(anchor: usize) -> Self {
        Self { item: RenderedItem { anchor: Anchor(anchor), ..RenderedItem::default() } }
    }

    pub fn question(mut self, text: impl Into<String>) -> Self {
        self.item.question = Some(text.into());
        self
    }

    pub fn answer(mut self, text: impl Into<String>) -> Self {
        self.item.answer = Some(text.into());
        self
    }

    pub fn category(mut self, text: impl Into<String>) -> Self {
        self.item.category = Some(text.into());
        self
    }

    pub fn build(self) -> RenderedItem {
        self.item
    }
}

/// Items anchored 0.. from `(question, answer, category)` triples.
pub fn items(rows: &[(&str, &str, &str)]) -> Vec<RenderedItem> {
    rows.iter()
        .enumerate()
        .map(|(i, (q, a, c))| ItemBuilder::new(i).question(*q).answer(*a).category(*c).build())
        .collect()
}

// ---------------------------------------------------------------------------
// FakeView
// ---------------------------------------------------------------------------

/// Presentation state of one fake card.
#[derive(Debug, Clone, Default)]
pub struct FakeCard {
    pub item: RenderedItem,
    pub stamp: Option<RecordId>,
    pub expanded: bool,
    pub mark: Option<Mark>,
    pub highlighted: bool,
}

/// In-memory [`FaqView`] that records what the search layer did to it.
#[derive(Debug, Default)]
pub struct FakeView {
    pub cards: Vec<FakeCard>,
    pub status: Option<StatusMessage>,
    pub has_text: bool,
    /// Number of `clear_input` calls.
    pub inputs_cleared: usize,
    /// Every `scroll_into_view` target, in call order.
    pub scrolled: Vec<Anchor>,
    /// Every `set_expanded` call, in call order.
    pub expansions: Vec<(Anchor, bool)>,
    /// When set, every mutator fails with [`ViewError::Unavailable`].
    pub broken: bool,
}

impl FakeView {
    pub fn new(items: Vec<RenderedItem>) -> Self {
        Self {
            cards: items.into_iter().map(|item| FakeCard { item, ..FakeCard::default() }).collect(),
            ..Self::default()
        }
    }

    pub fn card(&self, anchor: usize) -> &FakeCard {
        self.cards
            .iter()
            .find(|c| c.item.anchor == Anchor(anchor))
            .unwrap_or_else(|| panic!("no fake card with anchor #{anchor}"))
    }

    pub fn marks(&self) -> Vec<Option<Mark>> {
        self.cards.iter().map(|c| c.mark).collect()
    }

    pub fn highlighted(&self) -> Vec<Anchor> {
        self.cards.iter().filter(|c| c.highlighted).map(|c| c.item.anchor).collect()
    }

    fn card_mut(&mut self, anchor: Anchor) -> Result<&mut FakeCard, ViewError> {
        if self.broken {
            return Err(ViewError::Unavailable("fake view is broken".to_string()));
        }
        self.cards
            .iter_mut()
            .find(|c| c.item.anchor == anchor)
            .ok_or(ViewError::UnknownAnchor(anchor))
    }

    fn check(&self) -> Result<(), ViewError> {
        if self.broken {
            Err(ViewError::Unavailable("fake view is broken".to_string()))
        } else {
            Ok(())
        }
    }
}

impl FaqView for FakeView {
    fn items(&self) -> Vec<RenderedItem> {
        self.cards.iter().map(|c| c.item.clone()).collect()
    }

    fn stamp(&mut self, anchor: Anchor, id: RecordId) -> Result<(), ViewError> {
        self.card_mut(anchor)?.stamp = Some(id);
        Ok(())
    }

    fn is_expanded(&self, anchor: Anchor) -> Result<bool, ViewError> {
        self.check()?;
        self.cards
            .iter()
            .find(|c| c.item.anchor == anchor)
            .map(|c| c.expanded)
            .ok_or(ViewError::UnknownAnchor(anchor))
    }

    fn set_expanded(&mut self, anchor: Anchor, expanded: bool) -> Result<(), ViewError> {
        self.card_mut(anchor)?.expanded = expanded;
        self.expansions.push((anchor, expanded));
        Ok(())
    }

    fn set_mark(&mut self, anchor: Anchor, mark: Option<Mark>) -> Result<(), ViewError> {
        self.card_mut(anchor)?.mark = mark;
        Ok(())
    }

    fn set_highlight(&mut self, anchor: Anchor, on: bool) -> Result<(), ViewError> {
        self.card_mut(anchor)?.highlighted = on;
        Ok(())
    }

    fn scroll_into_view(&mut self, anchor: Anchor) -> Result<(), ViewError> {
        self.card_mut(anchor)?;
        self.scrolled.push(anchor);
        Ok(())
    }

    fn set_status(&mut self, status: Option<&StatusMessage>) -> Result<(), ViewError> {
        self.check()?;
        self.status = status.cloned();
        Ok(())
    }

    fn set_has_text(&mut self, has_text: bool) -> Result<(), ViewError> {
        self.check()?;
        self.has_text = has_text;
        Ok(())
    }

    fn clear_input(&mut self) -> Result<(), ViewError> {
        self.check()?;
        self.inputs_cleared += 1;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// FakeChatbot
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct FakeChatbot {
    pub opened_with: Vec<String>,
    pub unavailable: bool,
}

impl Chatbot for FakeChatbot {
    fn open_with_query(&mut self, query: &str) -> Result<(), ViewError> {
        if self.unavailable {
            return Err(ViewError::Unavailable("chatbot offline".to_string()));
        }
        self.opened_with.push(query.to_string());
        Ok(())
    }
}
