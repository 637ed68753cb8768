use thiserror::Error;

#[derive(Error, Debug)]
pub enum SaveError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Live stats bank is unavailable")]
    StatsUnavailable,

    #[error("Snapshot is not restorable: {reason}")]
    NotAdmissible { reason: &'static str },

    #[error("No scene could be resolved for the snapshot")]
    SceneUnresolved,

    #[error("Imported document is empty")]
    EmptyImport,

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type SaveResult<T> = Result<T, SaveError>;
