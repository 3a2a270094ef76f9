//! Error types for the editor

use pagecraft_model::TreeError;
use thiserror::Error;

/// Failures loading canvas state that did not originate in this session.
/// Edits themselves never fail; see [`Outcome`](crate::Outcome).
#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Invalid component tree: {0}")]
    Tree(#[from] TreeError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
