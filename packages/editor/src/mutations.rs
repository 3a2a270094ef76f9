//! # Canvas Mutations
//!
//! Structural edits as values, so they can be queued, serialized and replayed
//! from scripts or a UI bridge.
//!
//! ## Mutation Semantics
//!
//! ### AddComponent
//! - Appends a new leaf to `parent_id`, or adds a root when the parent is
//!   absent or stale
//! - Selects the new component
//!
//! ### RemoveComponent
//! - Removes the node and all descendants
//! - Clears cursors that pointed into the removed subtree
//!
//! ### UpdateStyles / UpdateProps
//! - Shallow merge, last write wins per key
//!
//! Edits addressed to a missing node never fail; they report
//! [`Outcome::NotFound`] and leave the canvas untouched.

use crate::store::TreeStore;
use pagecraft_model::{ComponentId, ComponentType, PropMap, StyleMap};
use serde::{Deserialize, Serialize};

/// Structural edits to the canvas
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Mutation {
    AddComponent {
        kind: ComponentType,
        #[serde(default)]
        parent_id: Option<ComponentId>,
    },

    /// Remove a component and its subtree
    RemoveComponent { node_id: ComponentId },

    UpdateStyles {
        node_id: ComponentId,
        styles: StyleMap,
    },

    UpdateProps {
        node_id: ComponentId,
        props: PropMap,
    },

    Rename { node_id: ComponentId, name: String },

    ToggleLock { node_id: ComponentId },

    ToggleVisibility { node_id: ComponentId },

    /// Empty the canvas and both cursors
    ClearCanvas,
}

/// What an edit did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The target was found and changed
    Applied,

    /// A component was created with this id
    Created(ComponentId),

    /// The target does not exist; nothing changed
    NotFound(ComponentId),
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        !matches!(self, Outcome::NotFound(_))
    }

    pub fn created_id(&self) -> Option<&ComponentId> {
        match self {
            Outcome::Created(id) => Some(id),
            _ => None,
        }
    }
}

impl Mutation {
    /// Apply to the store
    pub fn apply(&self, store: &mut TreeStore) -> Outcome {
        match self {
            Mutation::AddComponent { kind, parent_id } => {
                let node = store.add(*kind, parent_id.as_ref());
                Outcome::Created(node.id.clone())
            }

            Mutation::RemoveComponent { node_id } => store.remove(node_id),

            Mutation::UpdateStyles { node_id, styles } => {
                store.update_styles(node_id, styles.clone())
            }

            Mutation::UpdateProps { node_id, props } => store.update_props(node_id, props.clone()),

            Mutation::Rename { node_id, name } => store.rename(node_id, name.clone()),

            Mutation::ToggleLock { node_id } => store.toggle_lock(node_id),

            Mutation::ToggleVisibility { node_id } => store.toggle_visibility(node_id),

            Mutation::ClearCanvas => {
                store.clear();
                Outcome::Applied
            }
        }
    }

    /// Check whether applying would change anything, without applying
    pub fn validate(&self, store: &TreeStore) -> Outcome {
        match self.target() {
            Some(node_id) if store.find(node_id).is_none() => Outcome::NotFound(node_id.clone()),
            _ => Outcome::Applied,
        }
    }

    /// Component the mutation is addressed to, if any
    pub fn target(&self) -> Option<&ComponentId> {
        match self {
            Mutation::RemoveComponent { node_id }
            | Mutation::UpdateStyles { node_id, .. }
            | Mutation::UpdateProps { node_id, .. }
            | Mutation::Rename { node_id, .. }
            | Mutation::ToggleLock { node_id }
            | Mutation::ToggleVisibility { node_id } => Some(node_id),
            Mutation::AddComponent { .. } | Mutation::ClearCanvas => None,
        }
    }

    /// Human readable description, used to label history steps
    pub fn label(&self) -> String {
        match self {
            Mutation::AddComponent { kind, .. } => format!("Add {}", kind),
            Mutation::RemoveComponent { .. } => "Remove component".to_string(),
            Mutation::UpdateStyles { .. } => "Update styles".to_string(),
            Mutation::UpdateProps { .. } => "Update props".to_string(),
            Mutation::Rename { name, .. } => format!("Rename to {}", name),
            Mutation::ToggleLock { .. } => "Toggle lock".to_string(),
            Mutation::ToggleVisibility { .. } => "Toggle visibility".to_string(),
            Mutation::ClearCanvas => "Clear canvas".to_string(),
        }
    }
}
