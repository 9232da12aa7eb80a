use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub struct DeleteResult {
    pub deleted_count: i64,
}

#[derive(Debug, Error)]
pub enum InsertError {
    #[error("An entity with the same id already exists")]
    DuplicateKey,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
