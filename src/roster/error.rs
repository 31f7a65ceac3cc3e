use crate::model::{Field, UserId};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Format error: {0}")]
    Format(String),

    #[error("Validate failed: {}", missing_list(.missing))]
    Validation { missing: Vec<Field> },

    #[error("Already editing user {0}")]
    EditInProgress(UserId),

    #[error("User not found: {0}")]
    UserNotFound(UserId),

    #[error("No row is being edited")]
    NoEditSession,

    #[error("Users have already been loaded")]
    AlreadyLoaded,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

fn missing_list(missing: &[Field]) -> String {
    missing
        .iter()
        .map(|f| f.required_message())
        .collect::<Vec<_>>()
        .join(" ")
}

pub type Result<T> = std::result::Result<T, RosterError>;
