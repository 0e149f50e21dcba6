use thiserror::Error;

/// Errors shared by the jsontree crates
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommonError {
    #[error("Unknown data type: {0}")]
    UnknownDataType(String),
}

/// Common Result type alias
pub type CommonResult<T> = Result<T, CommonError>;
