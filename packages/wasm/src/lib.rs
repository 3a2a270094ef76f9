use pagecraft_compiler_css::compile_to_css;
use pagecraft_compiler_html::{compile_to_html, CompileOptions};
use pagecraft_editor::{EditSession, Mutation};
use pagecraft_model::{Breakpoint, ComponentId, ComponentType, PropMap, StyleMap};
use std::fmt::Display;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn js_error(context: &str, err: impl Display) -> JsValue {
    JsValue::from_str(&format!("{}: {}", context, err))
}

/// Editing session for a browser canvas
///
/// Structural edits are undoable; selection, hover and breakpoint are not.
/// Edits addressed to an id that no longer exists return `false`.
#[wasm_bindgen]
pub struct CanvasEditor {
    session: EditSession,
}

#[wasm_bindgen]
impl CanvasEditor {
    #[wasm_bindgen(constructor)]
    pub fn new() -> CanvasEditor {
        CanvasEditor {
            session: EditSession::new("wasm"),
        }
    }

    /// Add a component and return its id
    pub fn add(&mut self, kind: &str, parent_id: Option<String>) -> Result<String, JsValue> {
        let kind: ComponentType = kind.parse().map_err(|e| js_error("Invalid kind", e))?;
        Ok(self.add_kind(kind, parent_id))
    }

    pub fn remove(&mut self, id: &str) -> bool {
        self.apply(Mutation::RemoveComponent {
            node_id: ComponentId::from(id),
        })
    }

    /// Merge a JSON object of styles into a component
    #[wasm_bindgen(js_name = updateStyles)]
    pub fn update_styles(&mut self, id: &str, styles: &str) -> Result<bool, JsValue> {
        let styles: StyleMap =
            serde_json::from_str(styles).map_err(|e| js_error("Invalid styles", e))?;
        Ok(self.apply(Mutation::UpdateStyles {
            node_id: ComponentId::from(id),
            styles,
        }))
    }

    /// Merge a JSON object of props into a component
    #[wasm_bindgen(js_name = updateProps)]
    pub fn update_props(&mut self, id: &str, props: &str) -> Result<bool, JsValue> {
        let props: PropMap =
            serde_json::from_str(props).map_err(|e| js_error("Invalid props", e))?;
        Ok(self.apply(Mutation::UpdateProps {
            node_id: ComponentId::from(id),
            props,
        }))
    }

    pub fn rename(&mut self, id: &str, name: &str) -> bool {
        self.apply(Mutation::Rename {
            node_id: ComponentId::from(id),
            name: name.to_string(),
        })
    }

    #[wasm_bindgen(js_name = toggleLock)]
    pub fn toggle_lock(&mut self, id: &str) -> bool {
        self.apply(Mutation::ToggleLock {
            node_id: ComponentId::from(id),
        })
    }

    #[wasm_bindgen(js_name = toggleVisibility)]
    pub fn toggle_visibility(&mut self, id: &str) -> bool {
        self.apply(Mutation::ToggleVisibility {
            node_id: ComponentId::from(id),
        })
    }

    pub fn select(&mut self, id: Option<String>) {
        self.session.select(id.map(ComponentId::from));
    }

    #[wasm_bindgen(js_name = setHovered)]
    pub fn set_hovered(&mut self, id: Option<String>) {
        self.session.set_hovered(id.map(ComponentId::from));
    }

    #[wasm_bindgen(js_name = setBreakpoint)]
    pub fn set_breakpoint(&mut self, breakpoint: &str) -> Result<(), JsValue> {
        let breakpoint: Breakpoint = breakpoint
            .parse()
            .map_err(|e| js_error("Invalid breakpoint", e))?;
        self.session.set_breakpoint(breakpoint);
        Ok(())
    }

    #[wasm_bindgen(getter)]
    pub fn breakpoint(&self) -> String {
        self.session.store().breakpoint().to_string()
    }

    /// Preview width for the current breakpoint, in CSS pixels
    #[wasm_bindgen(getter, js_name = viewportWidth)]
    pub fn viewport_width(&self) -> u32 {
        self.session.store().breakpoint().viewport_width()
    }

    #[wasm_bindgen(getter, js_name = selectedId)]
    pub fn selected_id(&self) -> Option<String> {
        self.session
            .store()
            .selected_id()
            .map(|id| id.as_str().to_string())
    }

    #[wasm_bindgen(getter, js_name = hoveredId)]
    pub fn hovered_id(&self) -> Option<String> {
        self.session
            .store()
            .hovered_id()
            .map(|id| id.as_str().to_string())
    }

    pub fn undo(&mut self) -> bool {
        self.session.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.session.redo()
    }

    #[wasm_bindgen(js_name = canUndo)]
    pub fn can_undo(&self) -> bool {
        self.session.can_undo()
    }

    #[wasm_bindgen(js_name = canRedo)]
    pub fn can_redo(&self) -> bool {
        self.session.can_redo()
    }

    /// Canvas state as JSON
    pub fn snapshot(&self) -> Result<String, JsValue> {
        self.session
            .snapshot_json()
            .map_err(|e| js_error("Serialization error", e))
    }

    /// Replace the canvas with a saved state; history is reset
    pub fn load(&mut self, json: &str) -> Result<(), JsValue> {
        self.session
            .load_json(json)
            .map_err(|e| js_error("Load error", e))
    }

    /// Empty the canvas (undoable)
    pub fn clear(&mut self) {
        self.apply(Mutation::ClearCanvas);
    }

    #[wasm_bindgen(js_name = exportHtml)]
    pub fn export_html(&self, use_classes: bool) -> Result<String, JsValue> {
        let options = CompileOptions {
            use_classes,
            inline_styles: !use_classes,
            ..CompileOptions::default()
        };
        compile_to_html(self.session.store().tree(), options)
            .map_err(|e| js_error("Compile error", e))
    }

    #[wasm_bindgen(js_name = exportCss)]
    pub fn export_css(&self) -> String {
        compile_to_css(self.session.store().tree())
    }
}

impl CanvasEditor {
    fn add_kind(&mut self, kind: ComponentType, parent_id: Option<String>) -> String {
        let outcome = self.session.apply(Mutation::AddComponent {
            kind,
            parent_id: parent_id.map(ComponentId::from),
        });
        outcome
            .created_id()
            .map(|id| id.as_str().to_string())
            .unwrap_or_default()
    }

    fn apply(&mut self, mutation: Mutation) -> bool {
        self.session.apply(mutation).is_applied()
    }
}

impl Default for CanvasEditor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_select_remove() {
        let mut editor = CanvasEditor::new();

        let button = editor.add_kind(ComponentType::Button, None);
        assert_eq!(editor.selected_id(), Some(button.clone()));

        let text = editor.add_kind(ComponentType::Text, Some(button.clone()));
        assert_eq!(editor.selected_id(), Some(text.clone()));

        assert!(editor.remove(&button));
        assert_eq!(editor.selected_id(), None);
        assert!(!editor.remove(&text));
    }

    #[test]
    fn test_edits_and_history() {
        let mut editor = CanvasEditor::new();
        let card = editor.add_kind(ComponentType::Card, None);

        assert!(editor
            .update_styles(&card, r##"{"backgroundColor": "#000"}"##)
            .unwrap());
        assert!(editor.update_props(&card, r#"{"title": "Plans"}"#).unwrap());
        assert!(editor.toggle_lock(&card));
        assert!(!editor.toggle_visibility("missing"));

        assert!(editor.can_undo());
        assert!(editor.undo());
        assert!(editor.can_redo());
        assert!(editor.redo());

        let css = editor.export_css();
        assert!(css.contains("background-color: #000;"));
    }

    #[test]
    fn test_update_props_accepts_nested_values() {
        let mut editor = CanvasEditor::new();
        let row = editor.add_kind(ComponentType::Row, None);

        assert!(editor
            .update_props(&row, r#"{"links": ["Home", "About"], "icon": null}"#)
            .unwrap());
        assert!(editor.snapshot().unwrap().contains(r#""links":["Home","About"]"#));
    }

    #[test]
    fn test_snapshot_and_load() {
        let mut editor = CanvasEditor::new();
        editor.add_kind(ComponentType::Hero, None);
        let json = editor.snapshot().unwrap();

        let mut other = CanvasEditor::new();
        other.load(&json).unwrap();

        assert_eq!(other.snapshot().unwrap(), json);
        assert!(!other.can_undo());
    }

    #[test]
    fn test_breakpoint_and_export() {
        let mut editor = CanvasEditor::new();
        editor.set_breakpoint("tablet").unwrap();
        assert_eq!(editor.breakpoint(), "tablet");
        assert_eq!(editor.viewport_width(), 768);

        editor.add_kind(ComponentType::Heading, None);
        let html = editor.export_html(true).unwrap();
        assert!(html.contains("<h1 class=\"component-0\">Heading Text</h1>"));

        editor.clear();
        assert!(editor.export_css().is_empty());
        assert!(editor.undo());
        assert!(!editor.export_css().is_empty());
    }
}
