//! faqs-core: the FAQ search engine.
//!
//! Builds an in-memory index of the question, answer, and category text of a
//! rendered FAQ page, scores every record against each (debounced) query, and
//! reconciles the result set with the page's visual state.
//!
//! # Architecture
//!
//! ```text
//! keystroke ──► SearchController ──► query::search ──► Presenter ──► FaqView
//!                    │  (debounce)        │                │
//!                    │                 Corpus          SearchSession
//!                    └──► reconcile::clear ─────────────────┘
//! ```
//!
//! Everything runs on the caller's thread. The two timers (debounce and
//! highlight) are deadlines the host polls; nothing runs in the background.

pub mod config;
pub mod controller;
pub mod corpus;
pub mod error;
pub mod page;
pub mod present;
pub mod query;
pub mod reconcile;
pub mod session;
pub mod timer;
pub mod types;
pub mod view;

pub use controller::SearchController;
pub use corpus::Corpus;
pub use error::{PageError, ViewError};
pub use present::StatusMessage;
pub use types::{Anchor, Mark, RecordId, RenderedItem, ScoredRecord, SearchRecord};
pub use view::{Chatbot, FaqView};
