//! # Pagecraft Model
//!
//! Data model for the page builder: component kinds, nodes, the id-addressed
//! component arena and canvas snapshots.
//!
//! ```text
//! ComponentTree
//!   roots: [a, d]
//!   nodes: a ─┬─ b
//!             └─ c
//!          d
//! ```
//!
//! Nodes refer to their children and parent by [`ComponentId`]. The arena only
//! grows through [`ComponentTree::insert`], which appends leaves, so a tree
//! built through the API is always acyclic with unique ids. Trees that come
//! from outside (deserialized projects) are checked with
//! [`ComponentTree::validate`].

pub mod canvas;
pub mod component;
pub mod defaults;
pub mod error;
pub mod id_generator;
pub mod style;
pub mod tree;

pub use canvas::{Breakpoint, CanvasState};
pub use component::{ComponentId, ComponentNode, ComponentType};
pub use defaults::{default_props, default_styles};
pub use error::{TreeError, UnknownVariant};
pub use id_generator::{IdGenerator, SequentialIdGenerator, UuidIdGenerator};
pub use style::{css_property_name, PropMap, PropValue, StyleMap, StyleValue};
pub use tree::{ComponentTree, Walk};
