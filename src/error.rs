use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("invalid file format: {0}")]
    InvalidFormat(String),
    #[error("invalid tour: {0}")]
    InvalidTour(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::InvalidFormat(message.into())
    }

    pub fn invalid_tour(message: impl Into<String>) -> Self {
        Self::InvalidTour(message.into())
    }
}
