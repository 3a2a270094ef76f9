use crate::error::{StorageError, StorageResult};
use crate::kv::KeyValueStore;
use chrono::Utc;
use pagecraft_model::CanvasState;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Key holding the JSON array of all projects
pub const PROJECTS_KEY: &str = "pagecraft-projects";

/// Key holding the id of the project being edited
pub const CURRENT_PROJECT_KEY: &str = "pagecraft-current-project";

/// A named, saved canvas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,

    /// Unix milliseconds
    pub created_at: i64,
    pub updated_at: i64,

    pub canvas_state: CanvasState,
}

impl Project {
    fn new(name: String, canvas_state: CanvasState) -> Self {
        let now = Utc::now().timestamp_millis();
        Self {
            id: Uuid::new_v4().simple().to_string(),
            name,
            created_at: now,
            updated_at: now,
            canvas_state,
        }
    }
}

/// Project list and current-project pointer over any [`KeyValueStore`]
#[derive(Debug)]
pub struct ProjectStore<S> {
    backend: S,
}

impl<S: KeyValueStore> ProjectStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn into_inner(self) -> S {
        self.backend
    }

    /// All projects in creation order. An absent list is an empty one.
    pub fn list_projects(&self) -> StorageResult<Vec<Project>> {
        match self.backend.get(PROJECTS_KEY)? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(Vec::new()),
        }
    }

    /// Look up a project, checking that its canvas is a well-formed tree
    pub fn get_project(&self, id: &str) -> StorageResult<Option<Project>> {
        let project = self
            .list_projects()?
            .into_iter()
            .find(|project| project.id == id);

        if let Some(project) = &project {
            project
                .canvas_state
                .validate()
                .map_err(|source| StorageError::CorruptProject {
                    id: project.id.clone(),
                    source,
                })?;
        }
        Ok(project)
    }

    /// Save `state` into the current project, or into a new one when there
    /// is no current project. The saved project becomes current.
    ///
    /// Updating keeps the project's id and creation time.
    pub fn save_project(
        &mut self,
        name: impl Into<String>,
        state: CanvasState,
    ) -> StorageResult<Project> {
        let name = name.into();
        let mut projects = self.list_projects()?;
        let current = self.current_project_id()?;

        let existing = current
            .as_deref()
            .and_then(|id| projects.iter_mut().find(|project| project.id == id));

        let project = match existing {
            Some(project) => {
                project.name = name;
                project.updated_at = Utc::now().timestamp_millis();
                project.canvas_state = state;
                tracing::debug!(id = %project.id, "updated project");
                project.clone()
            }
            None => {
                let project = Project::new(name, state);
                tracing::debug!(id = %project.id, "created project");
                projects.push(project.clone());
                project
            }
        };

        self.write_projects(&projects)?;
        self.backend.set(CURRENT_PROJECT_KEY, &project.id)?;
        Ok(project)
    }

    /// Always start a new project, even when one is current
    pub fn create_project(
        &mut self,
        name: impl Into<String>,
        state: CanvasState,
    ) -> StorageResult<Project> {
        let mut projects = self.list_projects()?;
        let project = Project::new(name.into(), state);
        projects.push(project.clone());

        self.write_projects(&projects)?;
        self.backend.set(CURRENT_PROJECT_KEY, &project.id)?;
        tracing::debug!(id = %project.id, "created project");
        Ok(project)
    }

    /// Returns whether a project was removed. Deleting the current project
    /// leaves no project current.
    pub fn delete_project(&mut self, id: &str) -> StorageResult<bool> {
        let mut projects = self.list_projects()?;
        let before = projects.len();
        projects.retain(|project| project.id != id);
        let removed = projects.len() != before;

        if removed {
            self.write_projects(&projects)?;
        }
        if self.current_project_id()?.as_deref() == Some(id) {
            self.backend.remove(CURRENT_PROJECT_KEY)?;
        }

        tracing::debug!(%id, removed, "delete project");
        Ok(removed)
    }

    pub fn current_project_id(&self) -> StorageResult<Option<String>> {
        self.backend.get(CURRENT_PROJECT_KEY)
    }

    /// Make `id` current; it must name a saved project
    pub fn set_current_project_id(&mut self, id: &str) -> StorageResult<()> {
        if !self.list_projects()?.iter().any(|project| project.id == id) {
            return Err(StorageError::ProjectNotFound(id.to_string()));
        }
        self.backend.set(CURRENT_PROJECT_KEY, id)
    }

    /// The current project, `None` when there is none or it was deleted
    pub fn load_current_project(&self) -> StorageResult<Option<Project>> {
        match self.current_project_id()? {
            Some(id) => self.get_project(&id),
            None => Ok(None),
        }
    }

    /// Save under the current project's name if a current project exists.
    /// Returns whether anything was saved.
    pub fn auto_save(&mut self, state: &CanvasState) -> StorageResult<bool> {
        let Some(id) = self.current_project_id()? else {
            return Ok(false);
        };
        let Some(project) = self
            .list_projects()?
            .into_iter()
            .find(|project| project.id == id)
        else {
            return Ok(false);
        };

        self.save_project(project.name, state.clone())?;
        Ok(true)
    }

    fn write_projects(&mut self, projects: &[Project]) -> StorageResult<()> {
        let json = serde_json::to_string(projects)?;
        self.backend.set(PROJECTS_KEY, &json)
    }
}
