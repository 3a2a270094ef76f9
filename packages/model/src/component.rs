use crate::defaults::{default_props, default_styles};
use crate::error::UnknownVariant;
use crate::style::{PropMap, StyleMap};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a component node, unique within a tree
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentId(String);

impl ComponentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ComponentId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ComponentId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Kinds of component that can be placed on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentType {
    Container,
    Row,
    Column,
    Text,
    Heading,
    Button,
    Image,
    Input,
    Textarea,
    Card,
    Navbar,
    Footer,
    Hero,
}

impl ComponentType {
    pub const ALL: [ComponentType; 13] = [
        ComponentType::Container,
        ComponentType::Row,
        ComponentType::Column,
        ComponentType::Text,
        ComponentType::Heading,
        ComponentType::Button,
        ComponentType::Image,
        ComponentType::Input,
        ComponentType::Textarea,
        ComponentType::Card,
        ComponentType::Navbar,
        ComponentType::Footer,
        ComponentType::Hero,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentType::Container => "container",
            ComponentType::Row => "row",
            ComponentType::Column => "column",
            ComponentType::Text => "text",
            ComponentType::Heading => "heading",
            ComponentType::Button => "button",
            ComponentType::Image => "image",
            ComponentType::Input => "input",
            ComponentType::Textarea => "textarea",
            ComponentType::Card => "card",
            ComponentType::Navbar => "navbar",
            ComponentType::Footer => "footer",
            ComponentType::Hero => "hero",
        }
    }

    /// Whether the kind is a layout box meant to hold other components
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            ComponentType::Container
                | ComponentType::Row
                | ComponentType::Column
                | ComponentType::Card
                | ComponentType::Navbar
                | ComponentType::Footer
                | ComponentType::Hero
        )
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ComponentType::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownVariant::new("component type", s))
    }
}

/// A node in the component arena
///
/// Children and parent are id edges into the owning
/// [`ComponentTree`](crate::ComponentTree); they are read-only outside this
/// crate so structural edits always go through the tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentNode {
    pub id: ComponentId,

    #[serde(rename = "type")]
    pub kind: ComponentType,

    /// Display label, not required to be unique
    pub name: String,

    #[serde(default)]
    pub(crate) children: Vec<ComponentId>,

    #[serde(default, rename = "parentId")]
    pub(crate) parent: Option<ComponentId>,

    #[serde(default)]
    pub styles: StyleMap,

    #[serde(default)]
    pub props: PropMap,

    #[serde(default)]
    pub locked: bool,

    #[serde(default)]
    pub hidden: bool,
}

impl ComponentNode {
    /// Detached leaf seeded with the kind's default styles and props
    pub(crate) fn new(id: ComponentId, kind: ComponentType, name: String) -> Self {
        Self {
            id,
            kind,
            name,
            children: Vec::new(),
            parent: None,
            styles: default_styles(kind),
            props: default_props(kind),
            locked: false,
            hidden: false,
        }
    }

    pub fn children(&self) -> &[ComponentId] {
        &self.children
    }

    pub fn parent(&self) -> Option<&ComponentId> {
        self.parent.as_ref()
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// String value of a prop, if present and textual
    pub fn prop_str(&self, key: &str) -> Option<&str> {
        self.props.get(key).and_then(|value| value.as_str())
    }
}
