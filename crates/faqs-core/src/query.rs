//! Query processor: additive, field-weighted substring scoring.
//!
//! A query is lower-cased and split on whitespace into terms. Every term adds
//! to a record's score independently:
//!
//! | Field    | Condition            | Points |
//! |----------|----------------------|--------|
//! | question | term at offset 0     | 10     |
//! | question | term elsewhere       | 5      |
//! | answer   | term anywhere        | 2      |
//! | category | term anywhere        | 3      |
//!
//! Records scoring zero are dropped. The rest are sorted by descending score;
//! the sort is stable, so equal scores keep corpus order (ascending id).
//!
//! Searching only reads the cached corpus and is free of side effects.

use crate::{corpus::Corpus, corpus::FoldedText, types::ScoredRecord};

pub const QUESTION_PREFIX_POINTS: u32 = 10;
pub const QUESTION_POINTS: u32 = 5;
pub const ANSWER_POINTS: u32 = 2;
pub const CATEGORY_POINTS: u32 = 3;

/// Lower-case `query` and split it into non-empty whitespace-separated terms.
pub fn tokenize(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}

/// Rank every record of `corpus` against `query`.
pub fn search<'a>(corpus: &'a Corpus, query: &str) -> Vec<ScoredRecord<'a>> {
    let terms = tokenize(query);
    if terms.is_empty() {
        return Vec::new();
    }

    let mut results: Vec<ScoredRecord<'a>> = corpus
        .indexed()
        .filter_map(|(record, folded)| match score(folded, &terms) {
            0 => None,
            score => Some(ScoredRecord { record, score }),
        })
        .collect();

    results.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.record.id.cmp(&b.record.id)));

    tracing::debug!(query, terms = terms.len(), hits = results.len(), "query: scored");
    results
}

fn score(text: &FoldedText, terms: &[String]) -> u32 {
    terms.iter().fold(0u32, |acc, term| acc.saturating_add(term_score(text, term)))
}

fn term_score(text: &FoldedText, term: &str) -> u32 {
    let mut points = 0;
    if text.question.starts_with(term) {
        points += QUESTION_PREFIX_POINTS;
    } else if text.question.contains(term) {
        points += QUESTION_POINTS;
    }
    if text.answer.contains(term) {
        points += ANSWER_POINTS;
    }
    if text.category.contains(term) {
        points += CATEGORY_POINTS;
    }
    points
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
