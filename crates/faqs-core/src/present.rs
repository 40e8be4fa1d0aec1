//! Result presenter: applies one query's ranked results to the view.
//!
//! For a non-empty result set the presenter marks hits and filters the rest,
//! expands the top hit if it is collapsed, scrolls it into view, and
//! highlights it for a fixed window. For an empty set every card is filtered
//! and the status offers to hand the query to the chatbot.
//!
//! Rendering-layer failures never escape: each one is logged and the
//! presenter moves on to the next step.

use std::fmt;

use askama::{Html, MarkupDisplay};
use tokio::time::Duration;

use crate::{
    corpus::Corpus,
    error::ViewError,
    session::SearchSession,
    types::{Mark, ScoredRecord},
    view::FaqView,
};

// ---------------------------------------------------------------------------
// Status message
// ---------------------------------------------------------------------------

/// Human-readable outcome of a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    Found { count: usize },
    /// Nothing matched; `query` is the literal text the user searched for.
    NoMatch { query: String },
}

impl StatusMessage {
    /// Query text to forward to the chatbot, for zero-result statuses.
    pub fn chatbot_query(&self) -> Option<&str> {
        match self {
            StatusMessage::NoMatch { query } => Some(query),
            StatusMessage::Found { .. } => None,
        }
    }

    /// HTML rendering. The zero-result form embeds an escaped copy of the
    /// query in a call to action routed to the chatbot.
    pub fn to_html(&self) -> String {
        match self {
            StatusMessage::Found { .. } => {
                format!(r#"<span class="search-status">{self}</span>"#)
            }
            StatusMessage::NoMatch { query } => {
                let query = escape_html(query);
                format!(
                    r#"<span class="search-status search-status--empty">No question matches "<strong>{query}</strong>".</span> <button type="button" class="chatbot-handoff" data-query="{query}">Ask the assistant</button>"#
                )
            }
        }
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusMessage::Found { count: 1 } => write!(f, "1 question found"),
            StatusMessage::Found { count } => write!(f, "{count} questions found"),
            StatusMessage::NoMatch { query } => {
                write!(f, "No question matches \"{query}\". Ask the assistant instead?")
            }
        }
    }
}

/// Escape text for use in HTML content and double- or single-quoted
/// attribute values.
pub fn escape_html(text: &str) -> String {
    MarkupDisplay::new_unsafe(text, Html).to_string()
}

// ---------------------------------------------------------------------------
// Presenter
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
pub struct Presenter {
    highlight_for: Duration,
}

impl Presenter {
    pub fn new(highlight_for: Duration) -> Self {
        Self { highlight_for }
    }

    /// Apply `results` (ranked, best first) for `query` to the view.
    pub fn present<V: FaqView + ?Sized>(
        &self,
        view: &mut V,
        session: &mut SearchSession,
        corpus: &Corpus,
        query: &str,
        results: &[ScoredRecord<'_>],
    ) {
        let mut matched = vec![false; corpus.len()];
        for hit in results {
            if let Some(slot) = matched.get_mut(hit.record.id.0) {
                *slot = true;
            }
        }
        for record in corpus.records() {
            let mark = if matched[record.id.0] { Mark::Match } else { Mark::Filtered };
            swallow("set_mark", view.set_mark(record.anchor, Some(mark)));
        }

        // A new query always retracts the previous highlight first.
        retract_highlight(view, session);

        let status = match results.first() {
            None => StatusMessage::NoMatch { query: query.to_string() },
            Some(top) => {
                let anchor = top.record.anchor;
                match view.is_expanded(anchor) {
                    Ok(true) => {}
                    Ok(false) => swallow("set_expanded", view.set_expanded(anchor, true)),
                    Err(err) => tracing::warn!(%anchor, %err, "search: is_expanded failed"),
                }
                swallow("scroll_into_view", view.scroll_into_view(anchor));
                match view.set_highlight(anchor, true) {
                    Ok(()) => {
                        session.highlight.schedule(self.highlight_for, anchor);
                    }
                    Err(err) => tracing::warn!(%anchor, %err, "search: set_highlight failed"),
                }
                StatusMessage::Found { count: results.len() }
            }
        };

        tracing::debug!(query, hits = results.len(), status = %status, "search: presented");
        swallow("set_status", view.set_status(Some(&status)));
        session.set_status(Some(status));
    }
}

/// Cancel a pending highlight removal and remove the highlight now.
pub(crate) fn retract_highlight<V: FaqView + ?Sized>(view: &mut V, session: &mut SearchSession) {
    if let Some(anchor) = session.highlight.cancel() {
        swallow("set_highlight", view.set_highlight(anchor, false));
    }
}

/// Log a rendering-layer failure and carry on.
pub(crate) fn swallow(op: &'static str, result: Result<(), ViewError>) {
    if let Err(err) = result {
        tracing::warn!(op, %err, "search: view operation failed");
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn found_is_pluralised() {
        assert_eq!(StatusMessage::Found { count: 1 }.to_string(), "1 question found");
        assert_eq!(StatusMessage::Found { count: 3 }.to_string(), "3 questions found");
        assert_eq!(StatusMessage::Found { count: 0 }.to_string(), "0 questions found");
    }

    #[test]
    fn no_match_offers_chatbot_with_literal_query() {
        let status = StatusMessage::NoMatch { query: "xyzzy".to_string() };
        assert_eq!(status.chatbot_query(), Some("xyzzy"));
        assert_eq!(StatusMessage::Found { count: 2 }.chatbot_query(), None);
        assert!(status.to_string().contains("\"xyzzy\""));
    }

    #[test]
    fn html_escapes_query_everywhere() {
        let status = StatusMessage::NoMatch { query: r#"<b>"it's" & co"#.to_string() };
        let html = status.to_html();
        let escaped = "&lt;b&gt;&quot;it&#x27;s&quot; &amp; co";
        assert!(html.contains(&format!("<strong>{escaped}</strong>")));
        assert!(html.contains(&format!(r#"data-query="{escaped}""#)));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn escape_leaves_plain_text_alone() {
        assert_eq!(escape_html("town hall"), "town hall");
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn escape_covers_both_quote_styles() {
        assert_eq!(escape_html(r#"a"b'c"#), "a&quot;b&#x27;c");
        assert_eq!(escape_html("x < y && y > z"), "x &lt; y &amp;&amp; y &gt; z");
    }
}
