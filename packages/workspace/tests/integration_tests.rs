//! Projects persisted to disk and read back through a fresh store

use pagecraft_model::{CanvasState, ComponentTree, ComponentType, SequentialIdGenerator};
use pagecraft_workspace::{DirectoryStore, ProjectStore, PROJECTS_KEY};
use tempfile::TempDir;

fn page() -> CanvasState {
    let mut ids = SequentialIdGenerator::new("page");
    let mut tree = ComponentTree::new();
    let nav = tree
        .insert(&mut ids, ComponentType::Navbar, "nav", None)
        .id
        .clone();
    tree.insert(&mut ids, ComponentType::Button, "cta", Some(&nav));
    tree.insert(&mut ids, ComponentType::Footer, "footer", None);

    let mut state = CanvasState::new(tree);
    state.selected_id = Some(nav);
    state
}

#[test]
fn test_projects_survive_reopen() {
    let dir = TempDir::new().unwrap();

    let saved = {
        let mut store = ProjectStore::new(DirectoryStore::new(dir.path()));
        store.save_project("Portfolio", page()).unwrap()
    };

    let store = ProjectStore::new(DirectoryStore::new(dir.path()));
    let loaded = store.load_current_project().unwrap().unwrap();

    assert_eq!(loaded, saved);
    assert_eq!(loaded.canvas_state, page());
    assert!(loaded.canvas_state.validate().is_ok());
}

#[test]
fn test_file_layout_is_plain_json() {
    let dir = TempDir::new().unwrap();
    let mut store = ProjectStore::new(DirectoryStore::new(dir.path()));
    let project = store.save_project("Blog", page()).unwrap();

    let raw = std::fs::read_to_string(dir.path().join(format!("{}.json", PROJECTS_KEY))).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();

    assert_eq!(json[0]["id"], project.id.as_str());
    assert_eq!(json[0]["name"], "Blog");
    assert!(json[0]["createdAt"].is_i64());
    assert_eq!(json[0]["canvasState"]["selectedId"], "page-1");

    let current =
        std::fs::read_to_string(dir.path().join("pagecraft-current-project.json")).unwrap();
    assert_eq!(current, project.id);
}

#[test]
fn test_delete_then_auto_save_is_a_noop() {
    let dir = TempDir::new().unwrap();
    let mut store = ProjectStore::new(DirectoryStore::new(dir.path()));
    let project = store.save_project("Temp", page()).unwrap();

    store.delete_project(&project.id).unwrap();

    assert!(!store.auto_save(&page()).unwrap());
    assert!(store.list_projects().unwrap().is_empty());
}
