//! # Edit Session
//!
//! Couples a [`TreeStore`] with its [`History`] so that each structural edit
//! gets its own undo step.
//!
//! Cursor and breakpoint changes pass straight through to the store and are
//! not recorded; undoing a selection change is not something users expect.

use crate::{EditorError, History, Mutation, Outcome, TreeStore};
use pagecraft_model::{Breakpoint, CanvasState, ComponentId};

/// One editing session over a single canvas
#[derive(Debug)]
pub struct EditSession {
    /// Session identifier, used in logs
    pub id: String,

    store: TreeStore,
    history: History,
}

impl EditSession {
    /// Create new edit session with an empty canvas
    pub fn new(id: impl Into<String>) -> Self {
        Self::with_store(id, TreeStore::new(), History::new())
    }

    pub fn with_store(id: impl Into<String>, store: TreeStore, history: History) -> Self {
        Self {
            id: id.into(),
            store,
            history,
        }
    }

    pub fn store(&self) -> &TreeStore {
        &self.store
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Checkpoint, then apply.
    ///
    /// A mutation addressed to a missing component is skipped without
    /// touching history, so stale UI events never leave empty undo steps.
    pub fn apply(&mut self, mutation: Mutation) -> Outcome {
        let probe = mutation.validate(&self.store);
        if let Outcome::NotFound(id) = &probe {
            tracing::debug!(session = %self.id, %id, "skipping {}", mutation.label());
            return probe;
        }

        self.history.checkpoint_labeled(&self.store, mutation.label());
        mutation.apply(&mut self.store)
    }

    /// Run several store edits as a single undo step
    pub fn transaction<R>(
        &mut self,
        label: impl Into<String>,
        edit: impl FnOnce(&mut TreeStore) -> R,
    ) -> R {
        self.history.checkpoint_labeled(&self.store, label);
        edit(&mut self.store)
    }

    pub fn undo(&mut self) -> bool {
        self.history.undo(&mut self.store)
    }

    pub fn redo(&mut self) -> bool {
        self.history.redo(&mut self.store)
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn select(&mut self, id: Option<ComponentId>) {
        self.store.select(id);
    }

    pub fn set_hovered(&mut self, id: Option<ComponentId>) {
        self.store.set_hovered(id);
    }

    pub fn set_breakpoint(&mut self, breakpoint: Breakpoint) {
        self.store.set_breakpoint(breakpoint);
    }

    pub fn snapshot(&self) -> CanvasState {
        self.store.snapshot()
    }

    /// Switch to another document: validate `state`, make it the live
    /// canvas and forget all history
    pub fn load(&mut self, state: CanvasState) -> Result<(), EditorError> {
        state.validate()?;
        self.store.restore_owned(state);
        self.history.clear();
        tracing::debug!(session = %self.id, components = self.store.tree().len(), "loaded canvas");
        Ok(())
    }

    pub fn load_json(&mut self, json: &str) -> Result<(), EditorError> {
        let state: CanvasState = serde_json::from_str(json)?;
        self.load(state)
    }

    pub fn snapshot_json(&self) -> Result<String, EditorError> {
        Ok(serde_json::to_string(&self.store.snapshot())?)
    }
}
