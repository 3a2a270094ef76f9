//! # Pagecraft Editor
//!
//! Editing engine for the page builder canvas.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ model: ComponentTree arena, CanvasState     │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor                                      │
//! │  - TreeStore: live tree, cursors, breakpoint│
//! │  - History: bounded undo/redo snapshots     │
//! │  - Mutation: serializable structural edits  │
//! │  - EditSession: checkpoint → apply          │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ compilers / workspace: export, persistence  │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Stale ids are not errors**: edits to a missing node are no-ops that
//!    report [`Outcome::NotFound`]
//! 2. **Snapshots, not inverses**: history stores whole-canvas copies, so any
//!    edit is undoable without knowing how to invert it
//! 3. **Linear history**: a checkpoint after an undo drops the redo branch
//! 4. **Store knows nothing of history**: [`History`] drives the store through
//!    `snapshot`/`restore` only
//!
//! ## Usage
//!
//! ```rust
//! use pagecraft_editor::{EditSession, Mutation};
//! use pagecraft_model::ComponentType;
//!
//! let mut session = EditSession::new("doc");
//!
//! let outcome = session.apply(Mutation::AddComponent {
//!     kind: ComponentType::Button,
//!     parent_id: None,
//! });
//! let button = outcome.created_id().cloned().unwrap();
//! assert_eq!(session.store().selected_id(), Some(&button));
//!
//! session.undo();
//! assert!(session.store().find(&button).is_none());
//!
//! session.redo();
//! assert!(session.store().find(&button).is_some());
//! ```

mod errors;
mod history;
mod mutations;
mod session;
mod store;

pub use errors::EditorError;
pub use history::{History, HistoryEntry, DEFAULT_MAX_LEVELS};
pub use mutations::{Mutation, Outcome};
pub use session::EditSession;
pub use store::TreeStore;

// Re-export model types for convenience
pub use pagecraft_model::{
    Breakpoint, CanvasState, ComponentId, ComponentNode, ComponentTree, ComponentType, PropMap,
    PropValue, StyleMap, StyleValue,
};
