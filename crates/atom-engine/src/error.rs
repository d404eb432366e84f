use thiserror::Error;

/// Failures while loading the element reference table.
#[derive(Debug, Error)]
pub enum ElementTableError {
    #[error("malformed element table: {0}")]
    Json(#[from] serde_json::Error),

    #[error("element table is empty")]
    Empty,

    #[error("duplicate atomic number {0}")]
    DuplicateNumber(u32),

    #[error("atomic numbers not contiguous: expected {expected}, found {found}")]
    NonContiguous { expected: u32, found: u32 },
}

pub type Result<T> = std::result::Result<T, ElementTableError>;
