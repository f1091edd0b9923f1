use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum AdminError {
    #[error("DATABASE_URL not found in environment")]
    MissingDatabaseUrl,

    #[error("configuration error: {0}")]
    Config(#[from] figment::Error),

    #[error("{0}")]
    Usage(String),

    #[error("An account with identifier '{0}' already exists")]
    DuplicateIdentifier(String),

    #[error("Database error: {0}")]
    Database(#[from] SqlxError),
}

impl AdminError {
    pub fn usage(message: impl Into<String>) -> Self {
        AdminError::Usage(message.into())
    }
}
