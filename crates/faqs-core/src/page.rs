//! FAQ page document: the questions a rendering layer lays out as cards.
//!
//! A page is a JSON document of loose (uncategorized) questions followed by
//! named categories:
//!
//! ```json
//! {
//!   "title": "Town hall FAQ",
//!   "questions": [{ "question": "…", "answer": "…" }],
//!   "categories": [
//!     { "name": "Documents", "questions": [{ "question": "…", "answer": "…" }] }
//!   ]
//! }
//! ```
//!
//! Every field is optional. Missing text is passed through as `None`; the
//! corpus builder decides what to skip.

use std::path::Path;

use serde::Deserialize;

use crate::{
    error::PageError,
    types::{Anchor, RenderedItem},
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FaqPage {
    #[serde(default)]
    pub title: Option<String>,
    /// Questions rendered above every category.
    #[serde(default)]
    pub questions: Vec<Question>,
    #[serde(default)]
    pub categories: Vec<Category>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Question {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
}

impl FaqPage {
    pub fn load(path: &Path) -> Result<Self, PageError> {
        let src = std::fs::read_to_string(path).map_err(|source| PageError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&src)
    }

    pub fn from_json_str(src: &str) -> Result<Self, PageError> {
        Ok(serde_json::from_str(src)?)
    }

    /// Flatten the page into rendered items in document order. Anchors are
    /// the item's position, starting at 0.
    pub fn items(&self) -> Vec<RenderedItem> {
        let loose = self.questions.iter().map(|q| (None, q));
        let grouped = self
            .categories
            .iter()
            .flat_map(|c| c.questions.iter().map(move |q| (c.name.as_deref(), q)));

        loose
            .chain(grouped)
            .enumerate()
            .map(|(i, (category, q))| RenderedItem {
                anchor: Anchor(i),
                question: q.question.clone(),
                answer: q.answer.clone(),
                category: category.map(str::to_string),
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const PAGE: &str = r#"{
        "title": "Town hall",
        "questions": [{ "question": "Opening hours?", "answer": "9 to 5" }],
        "categories": [
            { "name": "Documents", "questions": [
                { "question": "How do I renew my ID card", "answer": "Visit the town hall" },
                { "answer": "An answer without a question" }
            ]},
            { "questions": [{ "question": "Nameless category" }] }
        ]
    }"#;

    #[test]
    fn items_follow_document_order() {
        let page = FaqPage::from_json_str(PAGE).unwrap();
        let items = page.items();

        let summary: Vec<_> = items
            .iter()
            .map(|i| (i.anchor.0, i.question.as_deref(), i.category.as_deref()))
            .collect();
        assert_eq!(
            summary,
            vec![
                (0, Some("Opening hours?"), None),
                (1, Some("How do I renew my ID card"), Some("Documents")),
                (2, None, Some("Documents")),
                (3, Some("Nameless category"), None),
            ]
        );
        assert_eq!(page.title.as_deref(), Some("Town hall"));
    }

    #[test]
    fn empty_document_is_an_empty_page() {
        let page = FaqPage::from_json_str("{}").unwrap();
        assert!(page.items().is_empty());
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let err = FaqPage::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, PageError::Parse(_)));
    }

    #[test]
    fn load_reports_missing_file_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        match FaqPage::load(&path) {
            Err(PageError::Read { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected read error, got {other:?}"),
        }
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("faq.json");
        std::fs::write(&path, PAGE).unwrap();
        assert_eq!(FaqPage::load(&path).unwrap().items().len(), 4);
    }
}
