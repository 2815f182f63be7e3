use pagewise_core::PaginationError;

#[derive(thiserror::Error, Debug, serde::Deserialize, serde::Serialize)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unknown step '{0}'. Valid steps: next, prev, first, last or a page number")]
    UnknownStep(String),

    #[error("Failed to read chapters: {0}")]
    Chapters(String),
}

impl From<PaginationError> for Error {
    fn from(err: PaginationError) -> Self {
        match err {
            PaginationError::InvalidArgument(msg) => Error::InvalidArgument(msg),
        }
    }
}
