use crate::field::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AbookError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("No such contact: {0}")]
    ContactNotFound(String),

    #[error("No such note: {0}")]
    NoteNotFound(String),

    #[error("Contact already exists: {0}")]
    DuplicateContact(String),

    #[error("Note already exists: {0}")]
    DuplicateNote(String),

    #[error("Invalid stored entry '{key}': {source}")]
    InvalidEntry {
        key: String,
        #[source]
        source: ValidationError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl AbookError {
    /// True for errors caused by user input (bad format, unknown key,
    /// duplicate key), as opposed to storage failures.
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            AbookError::Io(_)
                | AbookError::Serialization(_)
                | AbookError::Config(_)
                | AbookError::InvalidEntry { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, AbookError>;
