pub mod edit;
pub mod export;
pub mod init;
pub mod project;
pub mod tree;

pub use edit::{edit, EditArgs};
pub use export::{export, ExportArgs};
pub use init::{init, InitArgs};
pub use project::{delete, list, new, open, DeleteArgs, NewArgs, OpenArgs};
pub use tree::tree;

use crate::config::Config;
use anyhow::{anyhow, Result};
use pagecraft_workspace::{DirectoryStore, Project, ProjectStore};

/// Project store rooted at the configured storage directory
pub(crate) fn open_store(config: &Config, cwd: &str) -> ProjectStore<DirectoryStore> {
    ProjectStore::new(DirectoryStore::new(config.get_storage_dir(cwd)))
}

pub(crate) fn current_project(store: &ProjectStore<DirectoryStore>) -> Result<Project> {
    store
        .load_current_project()?
        .ok_or_else(|| anyhow!("No current project. Run `pagecraft new <name>` first"))
}
