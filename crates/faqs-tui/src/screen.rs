//! The rendered FAQ page: cards, search bar, status row, assistant popup.
//!
//! [`FaqScreen`] is the rendering layer the search engine drives. It
//! implements [`FaqView`] with the card's position as its anchor, and
//! [`Chatbot`] by opening the assistant popup.

use faqs_core::{
    page::FaqPage, Anchor, Chatbot, FaqView, Mark, RecordId, RenderedItem, StatusMessage,
    ViewError,
};

use crate::widgets::{
    card_list::{Card, CardListState},
    chatbot::ChatbotState,
    search_bar::SearchBarState,
};

#[derive(Debug, Default)]
pub struct FaqScreen {
    pub title: String,
    pub cards: CardListState,
    pub search: SearchBarState,
    pub status: Option<StatusMessage>,
    pub chatbot: ChatbotState,
}

impl FaqScreen {
    pub fn from_page(page: &FaqPage) -> Self {
        let cards = page
            .items()
            .into_iter()
            .map(|item| Card {
                question: item.question,
                answer: item.answer,
                category: item.category,
                ..Card::default()
            })
            .collect();
        Self {
            title: page.title.clone().unwrap_or_else(|| "FAQ".to_string()),
            cards: CardListState::new(cards),
            ..Self::default()
        }
    }

    /// Close every card. Goes through the same expansion capability the
    /// search layer uses.
    pub fn collapse_all(&mut self) {
        for index in 0..self.cards.cards.len() {
            if let Err(err) = self.set_expanded(Anchor(index), false) {
                tracing::warn!(%err, "screen: collapse failed");
            }
        }
        tracing::debug!("screen: collapsed all cards");
    }

    /// Record the selected card was indexed as, if the corpus has stamped it.
    pub fn selected_record(&self) -> Option<RecordId> {
        self.cards.cards.get(self.cards.cursor).and_then(|card| card.record)
    }

    fn card(&self, anchor: Anchor) -> Result<&Card, ViewError> {
        self.cards.cards.get(anchor.0).ok_or(ViewError::UnknownAnchor(anchor))
    }

    fn card_mut(&mut self, anchor: Anchor) -> Result<&mut Card, ViewError> {
        self.cards
            .cards
            .get_mut(anchor.0)
            .ok_or(ViewError::UnknownAnchor(anchor))
    }
}

impl FaqView for FaqScreen {
    fn items(&self) -> Vec<RenderedItem> {
        self.cards
            .cards
            .iter()
            .enumerate()
            .map(|(index, card)| RenderedItem {
                anchor: Anchor(index),
                question: card.question.clone(),
                answer: card.answer.clone(),
                category: card.category.clone(),
            })
            .collect()
    }

    fn stamp(&mut self, anchor: Anchor, id: RecordId) -> Result<(), ViewError> {
        self.card_mut(anchor)?.record = Some(id);
        Ok(())
    }

    fn is_expanded(&self, anchor: Anchor) -> Result<bool, ViewError> {
        Ok(self.card(anchor)?.expanded)
    }

    fn set_expanded(&mut self, anchor: Anchor, expanded: bool) -> Result<(), ViewError> {
        self.card_mut(anchor)?.expanded = expanded;
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
        self.card(anchor)?;
        self.cards.scroll_to(anchor.0);
        Ok(())
    }

    fn set_status(&mut self, status: Option<&StatusMessage>) -> Result<(), ViewError> {
        self.status = status.cloned();
        Ok(())
    }

    fn set_has_text(&mut self, has_text: bool) -> Result<(), ViewError> {
        self.search.has_text = has_text;
        Ok(())
    }

    fn clear_input(&mut self) -> Result<(), ViewError> {
        self.search.clear();
        Ok(())
    }
}

impl Chatbot for FaqScreen {
    fn open_with_query(&mut self, query: &str) -> Result<(), ViewError> {
        self.chatbot.open(query);
        Ok(())
    }
}
