//! faqs: relevance-scored, debounced search over a page of FAQ cards.
//!
//! The engine lives in [`engine`] (corpus, scoring, debounce, presentation,
//! reconciliation) and knows nothing about terminals. [`tui`] draws the page
//! and drives the engine from keyboard input.
//!
//! # Architecture
//!
//! ```text
//! FaqPage ──► FaqScreen (FaqView) ◄──► SearchController
//!                 ▲                          │
//!             App event loop ── poll_timers ─┘
//! ```

pub use faqs_core as engine;
pub use faqs_tui as tui;

pub use faqs_core::{
    config::Config, page::FaqPage, Corpus, FaqView, SearchController, StatusMessage,
};
