use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrefsError {
    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Profile not found")]
    ProfileNotFound,

    #[error("A profile named '{0}' already exists")]
    DuplicateName(String),

    #[error("Profile cannot be modified once saved")]
    AlreadyPersisted,

    #[error("Unknown form action: {0}")]
    UnknownAction(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PrefsError>;
