//! Search session: the mutable state of one search instance.
//!
//! A session is owned by its [`crate::controller::SearchController`] and
//! passed explicitly to the presenter and the reconciler. Several independent
//! controllers (and therefore sessions) can coexist.

use crate::{present::StatusMessage, timer::SingleShot, types::Anchor};

#[derive(Debug)]
pub struct SearchSession {
    active_query: String,
    is_active: bool,
    /// Pending debounced query. The text is read when it fires, not stored.
    pub(crate) debounce: SingleShot<()>,
    /// Pending highlight removal for the carried anchor.
    pub(crate) highlight: SingleShot<Anchor>,
    status: Option<StatusMessage>,
    queries_run: u64,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchSession {
    pub fn new() -> Self {
        Self {
            active_query: String::new(),
            is_active: false,
            debounce: SingleShot::new("debounce"),
            highlight: SingleShot::new("highlight"),
            status: None,
            queries_run: 0,
        }
    }

    /// The last query that ran, or empty when inactive.
    pub fn active_query(&self) -> &str {
        &self.active_query
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// The status message currently shown, if any.
    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    /// Number of queries this session has executed.
    pub fn queries_run(&self) -> u64 {
        self.queries_run
    }

    pub fn debounce_pending(&self) -> bool {
        self.debounce.is_pending()
    }

    /// The anchor whose highlight is waiting to be removed.
    pub fn highlighted(&self) -> Option<Anchor> {
        self.highlight.payload().copied()
    }

    pub(crate) fn activate(&mut self, query: &str) {
        if !self.is_active {
            tracing::debug!(query, "session: inactive -> active");
        }
        self.is_active = true;
        self.queries_run += 1;
        self.active_query.clear();
        self.active_query.push_str(query);
    }

    pub(crate) fn deactivate(&mut self) {
        if self.is_active {
            tracing::debug!("session: active -> inactive");
        }
        self.is_active = false;
        self.active_query.clear();
    }

    pub(crate) fn set_status(&mut self, status: Option<StatusMessage>) {
        self.status = status;
    }
}
