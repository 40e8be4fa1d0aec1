//! State reconciler: return the view to its pre-search state.
//!
//! [`clear`] is the single exit path for a search session. It is called from
//! every entry point that ends a search (clear button, Escape, input dropping
//! below the minimum length, teardown) and is idempotent: it can run before
//! any search and any number of times in a row.

use crate::{
    corpus::Corpus,
    present::{retract_highlight, swallow},
    session::SearchSession,
    view::FaqView,
};

/// Remove every search marker, cancel both timers, clear the status, and mark
/// the session inactive.
pub fn clear<V: FaqView + ?Sized>(view: &mut V, session: &mut SearchSession, corpus: &Corpus) {
    session.debounce.cancel();
    retract_highlight(view, session);

    for record in corpus.records() {
        swallow("set_mark", view.set_mark(record.anchor, None));
    }
    swallow("set_status", view.set_status(None));

    session.set_status(None);
    session.deactivate();
}
