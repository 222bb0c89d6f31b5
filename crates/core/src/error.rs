use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    /// A value outside its recognised set, e.g. a color name other than
    /// "white" or "black".
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// Role/file assignments that do not cover the back rank exactly once.
    #[error("malformed arrangement: {0}")]
    MalformedArrangement(String),
}

pub type Result<T, E = SetupError> = std::result::Result<T, E>;
