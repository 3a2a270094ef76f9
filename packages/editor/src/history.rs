//! # Undo/Redo History
//!
//! Linear, bounded undo/redo over [`TreeStore`] snapshots.
//!
//! ## Design
//!
//! - A checkpoint captures the whole canvas *before* an edit
//! - Undo saves the current canvas for redo, then restores the newest
//!   checkpoint
//! - Redo saves the current canvas for undo, then restores the soonest redo
//! - A checkpoint clears the redo side, so there is never more than one
//!   timeline
//! - The undo side keeps at most `max_levels` entries, evicting the oldest
//!
//! ## Example
//!
//! ```rust,ignore
//! let mut history = History::new();
//! let mut store = TreeStore::new();
//!
//! history.checkpoint_labeled(&store, "Add button");
//! store.add(ComponentType::Button, None);
//!
//! history.undo(&mut store);
//! history.redo(&mut store);
//! ```

use crate::store::TreeStore;
use pagecraft_model::CanvasState;
use std::collections::VecDeque;

/// Number of undo levels kept when none is configured
pub const DEFAULT_MAX_LEVELS: usize = 50;

/// One recorded canvas state
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub state: CanvasState,

    /// Description of the edit this entry undoes (or redoes)
    pub label: Option<String>,
}

#[derive(Debug)]
pub struct History {
    /// Oldest at the front, most recent at the back
    past: VecDeque<HistoryEntry>,

    /// Soonest redo at the front
    future: VecDeque<HistoryEntry>,

    /// Maximum number of undo levels (0 = unlimited)
    max_levels: usize,
}

impl History {
    /// History keeping [`DEFAULT_MAX_LEVELS`] undo levels
    pub fn new() -> Self {
        Self::with_max_levels(DEFAULT_MAX_LEVELS)
    }

    pub fn with_max_levels(max_levels: usize) -> Self {
        Self {
            past: VecDeque::new(),
            future: VecDeque::new(),
            max_levels,
        }
    }

    /// Record the store's current state as an undo point and drop the redo
    /// branch. Call before mutating.
    pub fn checkpoint(&mut self, store: &TreeStore) {
        self.record(store, None);
    }

    pub fn checkpoint_labeled(&mut self, store: &TreeStore, label: impl Into<String>) {
        self.record(store, Some(label.into()));
    }

    fn record(&mut self, store: &TreeStore, label: Option<String>) {
        self.push_past(HistoryEntry {
            state: store.snapshot(),
            label,
        });
        self.future.clear();
    }

    fn push_past(&mut self, entry: HistoryEntry) {
        self.past.push_back(entry);

        if self.max_levels > 0 && self.past.len() > self.max_levels {
            self.past.pop_front();
        }
    }

    /// Restore the most recent checkpoint. Returns false (and changes
    /// nothing) when there is nothing to undo.
    pub fn undo(&mut self, store: &mut TreeStore) -> bool {
        let Some(entry) = self.past.pop_back() else {
            return false;
        };

        self.future.push_front(HistoryEntry {
            state: store.snapshot(),
            label: entry.label.clone(),
        });
        store.restore_owned(entry.state);

        tracing::debug!(
            label = entry.label.as_deref().unwrap_or(""),
            undo_levels = self.past.len(),
            "undo"
        );
        true
    }

    /// Re-apply the most recently undone state. Returns false (and changes
    /// nothing) when there is nothing to redo.
    pub fn redo(&mut self, store: &mut TreeStore) -> bool {
        let Some(entry) = self.future.pop_front() else {
            return false;
        };

        self.push_past(HistoryEntry {
            state: store.snapshot(),
            label: entry.label.clone(),
        });
        store.restore_owned(entry.state);

        tracing::debug!(
            label = entry.label.as_deref().unwrap_or(""),
            redo_levels = self.future.len(),
            "redo"
        );
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn undo_levels(&self) -> usize {
        self.past.len()
    }

    pub fn redo_levels(&self) -> usize {
        self.future.len()
    }

    pub fn max_levels(&self) -> usize {
        self.max_levels
    }

    /// Undo entries, oldest first
    pub fn past(&self) -> impl ExactSizeIterator<Item = &HistoryEntry> + '_ {
        self.past.iter()
    }

    /// Redo entries, soonest first
    pub fn future(&self) -> impl ExactSizeIterator<Item = &HistoryEntry> + '_ {
        self.future.iter()
    }

    /// Clear all undo/redo history
    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }

    /// Description of the next undo operation
    pub fn undo_label(&self) -> Option<&str> {
        self.past.back().and_then(|entry| entry.label.as_deref())
    }

    /// Description of the next redo operation
    pub fn redo_label(&self) -> Option<&str> {
        self.future.front().and_then(|entry| entry.label.as_deref())
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
