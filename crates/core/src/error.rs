/// Error type for pagination operations
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PaginationError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl PaginationError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        PaginationError::InvalidArgument(msg.into())
    }
}
