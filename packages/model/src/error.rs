use crate::ComponentId;
use thiserror::Error;

/// Structural problems found in a component tree that did not come from
/// [`ComponentTree::insert`](crate::ComponentTree::insert)
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TreeError {
    #[error("Node stored under key {key} has id {id}")]
    KeyMismatch { key: ComponentId, id: ComponentId },

    #[error("Node not found: {0}")]
    MissingNode(ComponentId),

    #[error("Root node {0} has a parent")]
    RootHasParent(ComponentId),

    #[error("Node {child} is held by {holder} but names {found:?} as parent")]
    ParentMismatch {
        child: ComponentId,
        holder: ComponentId,
        found: Option<ComponentId>,
    },

    #[error("Node {0} is reachable more than once")]
    Revisited(ComponentId),

    #[error("Node {0} is not reachable from any root")]
    Unreachable(ComponentId),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown {what}: {value}")]
pub struct UnknownVariant {
    pub what: &'static str,
    pub value: String,
}

impl UnknownVariant {
    pub fn new(what: &'static str, value: impl Into<String>) -> Self {
        Self {
            what,
            value: value.into(),
        }
    }
}
