use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("User \"{0}\" not found")]
    UserNotFound(String),
}

impl Error {
    /// True when the error means the requested user does not exist
    pub fn is_user_not_found(&self) -> bool {
        matches!(self, Error::UserNotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
