use thiserror::Error;

/// Any failure coming back from the record store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Database connection lock poisoned")]
    LockPoisoned,
}

/// Client-side submission problems, caught before any store call.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please select at least one topic")]
    MissingTopic,

    #[error("Please select at least one podcast format")]
    MissingFormat,

    #[error("Unknown topic: {0}")]
    UnknownTopic(String),

    #[error("Unknown podcast format: {0}")]
    UnknownFormat(String),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("No responses selected for deletion")]
    NothingSelected,

    #[error("Not signed in. Run `survey-desk login --admin` first.")]
    NotAuthenticated,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Configuration error: {0}")]
    Config(String),
}
