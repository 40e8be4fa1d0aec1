//! Core types for faqs-core.
//!
//! This module defines the data shared across the search layers: the
//! [`RenderedItem`] the rendering layer hands over, the indexed
//! [`SearchRecord`], the transient [`ScoredRecord`], and the [`Mark`] a card
//! carries while a search is active.

use std::fmt;

/// Category assigned to an item that has no enclosing category heading.
pub const UNCATEGORIZED: &str = "uncategorized";

/// Opaque handle to the visual element (card) a record summarises.
///
/// Anchors are issued and owned by the rendering layer. The search layer never
/// creates or destroys the element behind one; it only reads and toggles
/// presentation state through [`crate::view::FaqView`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Anchor(pub usize);

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Stable, dense, zero-based identifier of a record within its corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordId(pub usize);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One FAQ item as exposed by the rendering layer, in document order.
///
/// Every text field is optional: malformed markup is tolerated and resolved by
/// the corpus builder (skipped item or sentinel category).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedItem {
    pub anchor: Anchor,
    pub question: Option<String>,
    pub answer: Option<String>,
    /// Text of the enclosing category heading, if any.
    pub category: Option<String>,
}

/// One indexed FAQ entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRecord {
    pub id: RecordId,
    /// Trimmed question text, case preserved.
    pub question: String,
    /// Trimmed answer text, case preserved.
    pub answer: String,
    /// Trimmed category heading, or [`UNCATEGORIZED`].
    pub category: String,
    pub anchor: Anchor,
}

/// A record paired with the score one query assigned to it.
///
/// Produced transiently by [`crate::query::search`] and dropped once the
/// query's visual effects have been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredRecord<'a> {
    pub record: &'a SearchRecord,
    pub score: u32,
}

/// Search-driven marker on a card while a session is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// The card is part of the current result set.
    Match,
    /// The card is hidden by the current query.
    Filtered,
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::Match => write!(f, "match"),
            Mark::Filtered => write!(f, "filtered"),
        }
    }
}
