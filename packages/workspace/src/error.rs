use pagecraft_model::TreeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),

    #[error("Project not found: {0}")]
    ProjectNotFound(String),

    #[error("Project {id} has a corrupt canvas: {source}")]
    CorruptProject {
        id: String,
        #[source]
        source: TreeError,
    },
}

pub type StorageResult<T> = Result<T, StorageError>;
