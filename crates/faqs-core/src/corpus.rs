//! Corpus builder: the read-only search index over the rendered FAQ items.
//!
//! [`Corpus::build`] walks the rendering layer's items once, in document
//! order, and stamps each indexed card with its [`RecordId`]. The corpus is
//! never re-indexed afterwards; cards added to the page later are simply not
//! searchable.
//!
//! # Tolerated input
//!
//! - An item with neither question nor answer text is skipped.
//! - A missing or blank category falls back to [`UNCATEGORIZED`].
//! - An anchor that was already indexed is skipped so no two records share a
//!   card.

use std::collections::HashMap;

use crate::{
    query,
    types::{Anchor, RecordId, RenderedItem, ScoredRecord, SearchRecord, UNCATEGORIZED},
    view::FaqView,
};

/// Lower-cased copies of a record's fields, cached at build time so queries
/// never re-fold the corpus.
#[derive(Debug, Clone)]
pub(crate) struct FoldedText {
    pub(crate) question: String,
    pub(crate) answer: String,
    pub(crate) category: String,
}

impl FoldedText {
    fn of(record: &SearchRecord) -> Self {
        Self {
            question: record.question.to_lowercase(),
            answer: record.answer.to_lowercase(),
            category: record.category.to_lowercase(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Corpus {
    records: Vec<SearchRecord>,
    folded: Vec<FoldedText>,
    by_anchor: HashMap<Anchor, RecordId>,
}

impl Corpus {
    /// Index the rendering layer's items and stamp every indexed card with
    /// its record id.
    ///
    /// A card that refuses the stamp is still indexed; the failure is logged.
    pub fn build<V: FaqView + ?Sized>(view: &mut V) -> Self {
        let corpus = Self::from_items(view.items());
        for record in &corpus.records {
            if let Err(err) = view.stamp(record.anchor, record.id) {
                tracing::warn!(anchor = %record.anchor, id = %record.id, %err, "corpus: stamp failed");
            }
        }
        tracing::info!(records = corpus.len(), "corpus built");
        corpus
    }

    /// Index items without touching a view.
    pub fn from_items(items: impl IntoIterator<Item = RenderedItem>) -> Self {
        let mut corpus = Corpus::default();

        for item in items {
            let question = clean(item.question.as_deref());
            let answer = clean(item.answer.as_deref());
            if question.is_empty() && answer.is_empty() {
                tracing::debug!(anchor = %item.anchor, "corpus: skipping item without text");
                continue;
            }
            if corpus.by_anchor.contains_key(&item.anchor) {
                tracing::warn!(anchor = %item.anchor, "corpus: anchor already indexed, skipping");
                continue;
            }

            let category = match clean(item.category.as_deref()) {
                c if c.is_empty() => UNCATEGORIZED.to_string(),
                c => c.to_string(),
            };

            let record = SearchRecord {
                id: RecordId(corpus.records.len()),
                question: question.to_string(),
                answer: answer.to_string(),
                category,
                anchor: item.anchor,
            };
            corpus.by_anchor.insert(record.anchor, record.id);
            corpus.folded.push(FoldedText::of(&record));
            corpus.records.push(record);
        }

        corpus
    }

    /// Records in corpus (document) order; `records()[i].id == RecordId(i)`.
    pub fn records(&self) -> &[SearchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: RecordId) -> Option<&SearchRecord> {
        self.records.get(id.0)
    }

    /// Map a card back to the record indexed from it.
    pub fn by_anchor(&self, anchor: Anchor) -> Option<&SearchRecord> {
        self.by_anchor.get(&anchor).and_then(|id| self.get(*id))
    }

    /// Run a scored query against this corpus. See [`query::search`].
    pub fn search(&self, query: &str) -> Vec<ScoredRecord<'_>> {
        query::search(self, query)
    }

    pub(crate) fn indexed(&self) -> impl Iterator<Item = (&SearchRecord, &FoldedText)> {
        self.records.iter().zip(self.folded.iter())
    }
}

fn clean(text: Option<&str>) -> &str {
    text.map(str::trim).unwrap_or("")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn item(anchor: usize, q: Option<&str>, a: Option<&str>, c: Option<&str>) -> RenderedItem {
        RenderedItem {
            anchor: Anchor(anchor),
            question: q.map(str::to_string),
            answer: a.map(str::to_string),
            category: c.map(str::to_string),
        }
    }

    #[test]
    fn ids_are_dense_and_follow_document_order() {
        let corpus = Corpus::from_items(vec![
            item(0, Some("First"), Some("a"), Some("One")),
            item(1, None, None, Some("One")),
            item(2, Some("Second"), None, None),
            item(3, None, Some("Only an answer"), None),
        ]);

        let ids: Vec<_> = corpus.records().iter().map(|r| r.id.0).collect();
        let anchors: Vec<_> = corpus.records().iter().map(|r| r.anchor.0).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert_eq!(anchors, vec![0, 2, 3]);
    }

    #[test]
    fn blank_text_counts_as_missing() {
        let corpus = Corpus::from_items(vec![item(0, Some("   "), Some("\n\t"), None)]);
        assert!(corpus.is_empty());
    }

    #[test]
    fn text_is_trimmed_and_case_preserved() {
        let corpus = Corpus::from_items(vec![item(
            0,
            Some("  Where Is The Town Hall? "),
            Some(" Central square\n"),
            Some("  Locations "),
        )]);
        let r = &corpus.records()[0];
        assert_eq!(r.question, "Where Is The Town Hall?");
        assert_eq!(r.answer, "Central square");
        assert_eq!(r.category, "Locations");
    }

    #[test]
    fn missing_or_blank_category_uses_sentinel() {
        let corpus = Corpus::from_items(vec![
            item(0, Some("a question"), None, None),
            item(1, Some("another"), None, Some("  ")),
        ]);
        assert!(corpus.records().iter().all(|r| r.category == UNCATEGORIZED));
    }

    #[test]
    fn duplicate_anchor_is_not_indexed_twice() {
        let corpus = Corpus::from_items(vec![
            item(7, Some("first"), None, None),
            item(7, Some("second"), None, None),
        ]);
        assert_eq!(corpus.len(), 1);
        assert_eq!(corpus.by_anchor(Anchor(7)).map(|r| r.question.as_str()), Some("first"));
    }

    #[test]
    fn lookup_by_id_and_anchor() {
        let corpus = Corpus::from_items(vec![
            item(4, Some("q4"), None, None),
            item(9, Some("q9"), None, None),
        ]);
        assert_eq!(corpus.get(RecordId(1)).map(|r| r.anchor), Some(Anchor(9)));
        assert_eq!(corpus.by_anchor(Anchor(4)).map(|r| r.id), Some(RecordId(0)));
        assert!(corpus.get(RecordId(2)).is_none());
        assert!(corpus.by_anchor(Anchor(5)).is_none());
    }
}
