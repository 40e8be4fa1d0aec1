//! Error types for faqs-core.

use crate::types::Anchor;
use std::path::PathBuf;

/// Failure reported by the rendering layer.
///
/// The search layer never propagates these to its host: every call site in the
/// presentation and clear paths logs the error and carries on.
#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    #[error("no rendered card for anchor {0}")]
    UnknownAnchor(Anchor),

    #[error("rendering layer unavailable: {0}")]
    Unavailable(String),
}

/// Failure loading an FAQ page document.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("failed to read FAQ page {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse FAQ page")]
    Parse(#[from] serde_json::Error),
}
