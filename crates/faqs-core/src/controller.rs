//! Debounced input controller: the top-level search object.
//!
//! [`SearchController`] owns the corpus, the [`SearchSession`], and the
//! current text of the search box. The host forwards three kinds of input:
//!
//! | Host event              | Method                            |
//! |-------------------------|-----------------------------------|
//! | text changed            | [`SearchController::on_input`]    |
//! | Enter                   | [`SearchController::on_submit`]   |
//! | Escape / clear button   | [`SearchController::on_cancel`]   |
//!
//! and calls [`SearchController::poll_timers`] whenever it wakes up, using
//! [`SearchController::next_deadline`] to bound how long it sleeps.
//!
//! # Debounce
//!
//! Every `on_input` cancels the pending debounce before doing anything else,
//! so at most one is ever outstanding. A debounced query reads the text that
//! is current when it fires: three quick keystrokes produce one query for the
//! final text.

use tokio::time::Instant;

use crate::{
    config::SearchConfig,
    corpus::Corpus,
    present::{swallow, Presenter},
    query, reconcile,
    session::SearchSession,
    view::{Chatbot, FaqView},
};

#[derive(Debug)]
pub struct SearchController {
    corpus: Corpus,
    session: SearchSession,
    presenter: Presenter,
    settings: SearchConfig,
    text: String,
}

impl SearchController {
    pub fn new(corpus: Corpus, settings: SearchConfig) -> Self {
        Self {
            corpus,
            session: SearchSession::new(),
            presenter: Presenter::new(settings.highlight()),
            settings,
            text: String::new(),
        }
    }

    /// Build the corpus from `view` (stamping its cards) and wrap it.
    pub fn attach<V: FaqView + ?Sized>(view: &mut V, settings: SearchConfig) -> Self {
        Self::new(Corpus::build(view), settings)
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn session(&self) -> &SearchSession {
        &self.session
    }

    /// The search box text as last reported by the host.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The search box text changed to `raw`.
    pub fn on_input<V: FaqView + ?Sized>(&mut self, view: &mut V, raw: &str) {
        self.text.clear();
        self.text.push_str(raw);
        swallow("set_has_text", view.set_has_text(!raw.is_empty()));

        self.session.debounce.cancel();
        if self.meets_minimum(raw) {
            self.session.debounce.schedule(self.settings.debounce(), ());
        } else {
            self.clear(view);
        }
    }

    /// Enter was pressed with `raw` in the search box. Runs the query now, or
    /// does nothing when `raw` is below the minimum length.
    pub fn on_submit<V: FaqView + ?Sized>(&mut self, view: &mut V, raw: &str) {
        if !self.meets_minimum(raw) {
            tracing::debug!("search: submit below minimum length ignored");
            return;
        }
        self.text.clear();
        self.text.push_str(raw);
        self.session.debounce.cancel();
        self.run_query(view);
    }

    /// Escape or the clear button: empty the box and end the session.
    pub fn on_cancel<V: FaqView + ?Sized>(&mut self, view: &mut V) {
        self.text.clear();
        swallow("clear_input", view.clear_input());
        swallow("set_has_text", view.set_has_text(false));
        self.clear(view);
    }

    /// End the session and undo every visual side effect. Idempotent.
    pub fn clear<V: FaqView + ?Sized>(&mut self, view: &mut V) {
        reconcile::clear(view, &mut self.session, &self.corpus);
    }

    /// Fire whichever timers are due. Returns `true` if any fired.
    pub fn poll_timers<V: FaqView + ?Sized>(&mut self, view: &mut V) -> bool {
        let now = Instant::now();
        let mut fired = false;

        if let Some(anchor) = self.session.highlight.take_due(now) {
            swallow("set_highlight", view.set_highlight(anchor, false));
            fired = true;
        }
        if self.session.debounce.take_due(now).is_some() {
            self.run_query(view);
            fired = true;
        }
        fired
    }

    /// Earliest pending timer deadline, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.session.debounce.deadline(), self.session.highlight.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Forward the current zero-result query to `chatbot`. Returns `false`
    /// when the current status offers no hand-off.
    pub fn request_chatbot<C: Chatbot + ?Sized>(&self, chatbot: &mut C) -> bool {
        let Some(query) = self.session.status().and_then(|s| s.chatbot_query()) else {
            return false;
        };
        match chatbot.open_with_query(query) {
            Ok(()) => {
                tracing::debug!(query, "search: handed off to chatbot");
                true
            }
            Err(err) => {
                tracing::warn!(%err, "search: chatbot hand-off failed");
                false
            }
        }
    }

    fn meets_minimum(&self, raw: &str) -> bool {
        raw.trim().chars().count() >= self.settings.min_query_len
    }

    fn run_query<V: FaqView + ?Sized>(&mut self, view: &mut V) {
        let query = self.text.trim().to_string();
        if !self.meets_minimum(&query) {
            self.clear(view);
            return;
        }

        self.session.activate(&query);
        let results = query::search(&self.corpus, &query);
        self.presenter
            .present(view, &mut self.session, &self.corpus, &query, &results);
    }
}
