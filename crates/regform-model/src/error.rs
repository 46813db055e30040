use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegformError {
    #[error("unknown field: {0}")]
    UnknownField(String),
    #[error("stored records are not valid JSON: {0}")]
    Storage(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RegformError>;
