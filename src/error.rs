//! Error types for loading the stage catalog

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Stage catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Stage catalog is empty")]
    Empty,

    #[error("Duplicate stage id in catalog: {id}")]
    DuplicateId { id: String },
}
