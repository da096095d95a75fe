use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("duplicate part id: {0}")]
    DuplicateId(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
