use crate::component::{ComponentId, ComponentNode};
use crate::error::{TreeError, UnknownVariant};
use crate::tree::ComponentTree;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Snapshot of the canvas: the whole tree plus the interaction cursors
///
/// The state owns everything it holds, so cloning it is a deep copy and two
/// states never share nodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasState {
    pub components: ComponentTree,
    pub selected_id: Option<ComponentId>,
    pub hovered_id: Option<ComponentId>,
}

impl CanvasState {
    pub fn new(components: ComponentTree) -> Self {
        Self {
            components,
            selected_id: None,
            hovered_id: None,
        }
    }

    /// Check tree integrity; cursors may be stale and are not checked
    pub fn validate(&self) -> Result<(), TreeError> {
        self.components.validate()
    }

    pub fn selected(&self) -> Option<&ComponentNode> {
        self.selected_id
            .as_ref()
            .and_then(|id| self.components.get(id))
    }
}

/// Responsive preview mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Mobile,
    Tablet,
    #[default]
    Desktop,
}

impl Breakpoint {
    pub fn as_str(&self) -> &'static str {
        match self {
            Breakpoint::Mobile => "mobile",
            Breakpoint::Tablet => "tablet",
            Breakpoint::Desktop => "desktop",
        }
    }

    /// Preview viewport width in CSS pixels
    pub fn viewport_width(&self) -> u32 {
        match self {
            Breakpoint::Mobile => 375,
            Breakpoint::Tablet => 768,
            Breakpoint::Desktop => 1280,
        }
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Breakpoint {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mobile" => Ok(Breakpoint::Mobile),
            "tablet" => Ok(Breakpoint::Tablet),
            "desktop" => Ok(Breakpoint::Desktop),
            other => Err(UnknownVariant::new("breakpoint", other)),
        }
    }
}
