//! Saved projects on top of a small key/value storage layer.
//!
//! The project list lives under one key and the current project's id under
//! another, so any backend that can store strings by name can hold a
//! workspace: [`MemoryStore`] for tests and embedding, [`DirectoryStore`] for
//! the command line.

pub mod error;
pub mod kv;
pub mod project;

pub use error::{StorageError, StorageResult};
pub use kv::{DirectoryStore, KeyValueStore, MemoryStore};
pub use project::{Project, ProjectStore, CURRENT_PROJECT_KEY, PROJECTS_KEY};
