use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeneralError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

#[derive(Error, Debug)]
pub enum PostError {
    /// The auth layer handed back an identifier that does not parse as a
    /// numeric profile id. Raised before any database call is issued.
    #[error("Invalid user ID '{0}'")]
    InvalidUserId(String),

    #[error("Post {0} not found")]
    NotFound(i64),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl PostError {
    /// Whether the error was produced by client-side validation, as opposed
    /// to a failure reported by the database.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            PostError::InvalidUserId(_) | PostError::InvalidRequest(_)
        )
    }
}
