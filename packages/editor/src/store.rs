//! # Tree Store
//!
//! Sole owner of the live component tree, the selection and hover cursors and
//! the responsive breakpoint.
//!
//! Every lookup that misses degrades to a no-op or `None`: ids travel through
//! UI event queues and can go stale between dispatch and handling, and "the
//! thing to change is gone" has exactly one sensible answer.
//!
//! Cursors are set without checking that they resolve. Readers go through
//! [`TreeStore::selected_component`], which treats a stale id as no selection.

use crate::mutations::Outcome;
use chrono::Utc;
use pagecraft_model::{
    Breakpoint, CanvasState, ComponentId, ComponentNode, ComponentTree, ComponentType,
    IdGenerator, PropMap, StyleMap, UuidIdGenerator,
};

#[derive(Debug)]
pub struct TreeStore {
    tree: ComponentTree,
    selected_id: Option<ComponentId>,
    hovered_id: Option<ComponentId>,
    breakpoint: Breakpoint,
    ids: Box<dyn IdGenerator>,
}

impl TreeStore {
    /// Empty store drawing random ids
    pub fn new() -> Self {
        Self::with_id_generator(UuidIdGenerator)
    }

    pub fn with_id_generator(ids: impl IdGenerator + 'static) -> Self {
        Self {
            tree: ComponentTree::new(),
            selected_id: None,
            hovered_id: None,
            breakpoint: Breakpoint::default(),
            ids: Box::new(ids),
        }
    }

    pub fn tree(&self) -> &ComponentTree {
        &self.tree
    }

    pub fn selected_id(&self) -> Option<&ComponentId> {
        self.selected_id.as_ref()
    }

    pub fn hovered_id(&self) -> Option<&ComponentId> {
        self.hovered_id.as_ref()
    }

    pub fn breakpoint(&self) -> Breakpoint {
        self.breakpoint
    }

    /// The selected node, or `None` when nothing is selected or the
    /// selection no longer resolves
    pub fn selected_component(&self) -> Option<&ComponentNode> {
        self.selected_id.as_ref().and_then(|id| self.tree.get(id))
    }

    pub fn find(&self, id: &ComponentId) -> Option<&ComponentNode> {
        self.tree.get(id)
    }

    /// Like [`find`](Self::find), restricted to the subtree rooted at `root`
    pub fn find_within(&self, root: &ComponentId, id: &ComponentId) -> Option<&ComponentNode> {
        self.tree
            .walk_from(root)
            .map(|(_, node)| node)
            .find(|node| &node.id == id)
    }

    /// Create a component of `kind` with default styles and props.
    ///
    /// It is appended to `parent` when that resolves and becomes a new root
    /// otherwise. The new component is selected.
    pub fn add(&mut self, kind: ComponentType, parent: Option<&ComponentId>) -> &ComponentNode {
        if let Some(parent) = parent.filter(|parent| !self.tree.contains(parent)) {
            tracing::debug!(%parent, "parent not found, adding {} as root", kind);
        }

        let name = format!("{}-{}", kind, Utc::now().timestamp_millis());
        let node = self.tree.insert(self.ids.as_mut(), kind, name, parent);
        tracing::debug!(id = %node.id, %kind, "added component");

        self.selected_id = Some(node.id.clone());
        node
    }

    /// Delete `id` and its whole subtree.
    ///
    /// Both the selection and the hover cursor are cleared when they point at
    /// any removed node, descendants included, not just at `id` itself. The
    /// stored cursors therefore never name a node that no longer exists.
    pub fn remove(&mut self, id: &ComponentId) -> Outcome {
        let removed = self.tree.detach(id);
        if removed.is_empty() {
            return Outcome::NotFound(id.clone());
        }

        let was_removed = |cursor: &Option<ComponentId>| {
            cursor
                .as_ref()
                .map_or(false, |cursor| removed.iter().any(|node| &node.id == cursor))
        };
        if was_removed(&self.selected_id) {
            self.selected_id = None;
        }
        if was_removed(&self.hovered_id) {
            self.hovered_id = None;
        }

        tracing::debug!(%id, count = removed.len(), "removed subtree");
        Outcome::Applied
    }

    /// Shallow merge: each key in `styles` replaces that key's whole value
    pub fn update_styles(&mut self, id: &ComponentId, styles: StyleMap) -> Outcome {
        self.edit(id, |node| node.styles.extend(styles))
    }

    /// Shallow merge: each key in `props` replaces that key's whole value
    pub fn update_props(&mut self, id: &ComponentId, props: PropMap) -> Outcome {
        self.edit(id, |node| node.props.extend(props))
    }

    pub fn rename(&mut self, id: &ComponentId, name: impl Into<String>) -> Outcome {
        let name = name.into();
        self.edit(id, |node| node.name = name)
    }

    pub fn toggle_lock(&mut self, id: &ComponentId) -> Outcome {
        self.edit(id, |node| node.locked = !node.locked)
    }

    pub fn toggle_visibility(&mut self, id: &ComponentId) -> Outcome {
        self.edit(id, |node| node.hidden = !node.hidden)
    }

    pub fn select(&mut self, id: Option<ComponentId>) {
        self.selected_id = id;
    }

    pub fn set_hovered(&mut self, id: Option<ComponentId>) {
        self.hovered_id = id;
    }

    pub fn set_breakpoint(&mut self, breakpoint: Breakpoint) {
        self.breakpoint = breakpoint;
    }

    /// Independent copy of the tree and both cursors
    pub fn snapshot(&self) -> CanvasState {
        CanvasState {
            components: self.tree.clone(),
            selected_id: self.selected_id.clone(),
            hovered_id: self.hovered_id.clone(),
        }
    }

    /// Replace the tree and cursors with a copy of `state`
    pub fn restore(&mut self, state: &CanvasState) {
        self.restore_owned(state.clone());
    }

    /// Replace the tree and cursors with `state`, taking ownership
    pub fn restore_owned(&mut self, state: CanvasState) {
        self.tree = state.components;
        self.selected_id = state.selected_id;
        self.hovered_id = state.hovered_id;
    }

    pub fn clear(&mut self) {
        self.tree.clear();
        self.selected_id = None;
        self.hovered_id = None;
    }

    fn edit(&mut self, id: &ComponentId, f: impl FnOnce(&mut ComponentNode)) -> Outcome {
        match self.tree.get_mut(id) {
            Some(node) => {
                f(node);
                Outcome::Applied
            }
            None => {
                tracing::debug!(%id, "edit target not found");
                Outcome::NotFound(id.clone())
            }
        }
    }
}

impl Default for TreeStore {
    fn default() -> Self {
        Self::new()
    }
}
