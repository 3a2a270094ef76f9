//! # Component Arena
//!
//! The forest of components, stored flat and addressed by id.
//!
//! ## Invariants
//!
//! - every node is stored under its own id
//! - a root has no parent; a non-root names as parent exactly the node whose
//!   `children` hold it
//! - every node is reachable from exactly one root, exactly once
//!
//! [`ComponentTree::insert`] and [`ComponentTree::detach`] preserve these by
//! construction. [`ComponentTree::validate`] checks them for trees loaded from
//! elsewhere.

use crate::component::{ComponentId, ComponentNode, ComponentType};
use crate::error::TreeError;
use crate::id_generator::IdGenerator;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentTree {
    /// Top-level components in canvas order
    #[serde(default)]
    roots: Vec<ComponentId>,

    #[serde(default)]
    nodes: BTreeMap<ComponentId, ComponentNode>,
}

impl ComponentTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: &ComponentId) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn get(&self, id: &ComponentId) -> Option<&ComponentNode> {
        self.nodes.get(id)
    }

    /// Mutable access to a node's content (styles, props, flags, name)
    pub fn get_mut(&mut self, id: &ComponentId) -> Option<&mut ComponentNode> {
        self.nodes.get_mut(id)
    }

    pub fn root_ids(&self) -> &[ComponentId] {
        &self.roots
    }

    pub fn roots(&self) -> impl Iterator<Item = &ComponentNode> + '_ {
        self.roots.iter().filter_map(move |id| self.nodes.get(id))
    }

    /// Children of `id` in order; empty when `id` is unknown
    pub fn children(&self, id: &ComponentId) -> impl Iterator<Item = &ComponentNode> + '_ {
        let ids: &[ComponentId] = self
            .nodes
            .get(id)
            .map(|node| node.children.as_slice())
            .unwrap_or(&[]);
        ids.iter().filter_map(move |child| self.nodes.get(child))
    }

    /// Depth-first pre-order walk over the whole forest, yielding
    /// `(depth, node)`. Each root's subtree is finished before the next root.
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            tree: self,
            stack: self.roots.iter().rev().map(|id| (0, id)).collect(),
        }
    }

    /// Pre-order walk of the subtree rooted at `id` (depths relative to it)
    pub fn walk_from(&self, id: &ComponentId) -> Walk<'_> {
        Walk {
            tree: self,
            stack: self
                .nodes
                .get_key_value(id)
                .map(|(key, _)| (0, key))
                .into_iter()
                .collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ComponentNode> + '_ {
        self.walk().map(|(_, node)| node)
    }

    /// Ids of `id` and all of its descendants, in pre-order
    pub fn subtree_ids(&self, id: &ComponentId) -> Vec<ComponentId> {
        self.walk_from(id).map(|(_, node)| node.id.clone()).collect()
    }

    /// Create a leaf of `kind` and append it to `parent`'s children, or to
    /// the roots when `parent` is absent or not in the tree.
    ///
    /// Ids are drawn from `ids` until one is found that the tree does not
    /// already hold.
    pub fn insert(
        &mut self,
        ids: &mut dyn IdGenerator,
        kind: ComponentType,
        name: impl Into<String>,
        parent: Option<&ComponentId>,
    ) -> &ComponentNode {
        let mut id = ids.next_id();
        while self.nodes.contains_key(&id) {
            tracing::warn!(%id, "id generator returned an id already in use");
            id = ids.next_id();
        }

        let parent = parent.filter(|parent| self.nodes.contains_key(*parent)).cloned();
        match parent.as_ref().and_then(|parent| self.nodes.get_mut(parent)) {
            Some(parent_node) => parent_node.children.push(id.clone()),
            None => self.roots.push(id.clone()),
        }

        let mut node = ComponentNode::new(id.clone(), kind, name.into());
        node.parent = parent;
        self.nodes.entry(id).or_insert(node)
    }

    /// Unlink `id` from its parent (or the roots) and drop it together with
    /// its subtree. Returns the removed nodes in pre-order; empty when `id`
    /// is unknown.
    pub fn detach(&mut self, id: &ComponentId) -> Vec<ComponentNode> {
        let Some(node) = self.nodes.get(id) else {
            return Vec::new();
        };
        let parent = node.parent.clone();
        let doomed = self.subtree_ids(id);

        match parent {
            Some(parent_id) => {
                if let Some(parent_node) = self.nodes.get_mut(&parent_id) {
                    parent_node.children.retain(|child| child != id);
                }
            }
            None => self.roots.retain(|root| root != id),
        }

        doomed
            .iter()
            .filter_map(|doomed_id| self.nodes.remove(doomed_id))
            .collect()
    }

    pub fn clear(&mut self) {
        self.roots.clear();
        self.nodes.clear();
    }

    /// Check the arena invariants, reporting the first violation found
    pub fn validate(&self) -> Result<(), TreeError> {
        for (key, node) in &self.nodes {
            if key != &node.id {
                return Err(TreeError::KeyMismatch {
                    key: key.clone(),
                    id: node.id.clone(),
                });
            }
        }

        let mut seen: HashSet<&ComponentId> = HashSet::with_capacity(self.nodes.len());
        let mut stack: Vec<(Option<&ComponentId>, &ComponentId)> =
            self.roots.iter().rev().map(|root| (None, root)).collect();

        while let Some((holder, id)) = stack.pop() {
            let node = self
                .nodes
                .get(id)
                .ok_or_else(|| TreeError::MissingNode(id.clone()))?;

            if !seen.insert(id) {
                return Err(TreeError::Revisited(id.clone()));
            }

            match holder {
                None if node.parent.is_some() => {
                    return Err(TreeError::RootHasParent(id.clone()));
                }
                Some(holder) if node.parent.as_ref() != Some(holder) => {
                    return Err(TreeError::ParentMismatch {
                        child: id.clone(),
                        holder: holder.clone(),
                        found: node.parent.clone(),
                    });
                }
                _ => {}
            }

            stack.extend(node.children.iter().rev().map(|child| (Some(id), child)));
        }

        if let Some(orphan) = self.nodes.keys().find(|key| !seen.contains(*key)) {
            return Err(TreeError::Unreachable(orphan.clone()));
        }

        Ok(())
    }
}

/// Pre-order iterator returned by [`ComponentTree::walk`]
pub struct Walk<'a> {
    tree: &'a ComponentTree,
    stack: Vec<(usize, &'a ComponentId)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a ComponentNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((depth, id)) = self.stack.pop() {
            if let Some(node) = self.tree.nodes.get(id) {
                self.stack
                    .extend(node.children.iter().rev().map(|child| (depth + 1, child)));
                return Some((depth, node));
            }
        }
        None
    }
}
