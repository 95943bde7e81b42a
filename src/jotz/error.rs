use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum JotzError {
    #[error("Index {index} is out of range (list has {len} notes)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("No note at index {0}")]
    NoteNotFound(String),

    #[error("Invalid index: {0}")]
    InvalidIndex(String),

    #[error("Session not found: {0}")]
    SessionNotFound(Uuid),

    #[error("No session numbered {0}")]
    SessionNumberNotFound(usize),

    #[error("No uploaded file numbered {0}")]
    FileNotFound(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, JotzError>;
