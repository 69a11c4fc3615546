use thiserror::Error;

use crate::domain::utils::id::TableId;

#[derive(Debug, Error)]
pub enum Error {
    #[error("File not found or could not be read: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse grid JSON: {0}")]
    DeserializationError(#[from] serde_json::Error),

    #[error("Malformed table identifier '{label}': {reason}")]
    FormatError { label: String, reason: String },

    #[error("Failed to build occupancy grid: {0}")]
    GridConstructionError(String),

    #[error("Table {0} is not part of the grid schema")]
    InvalidTable(TableId),

    #[error("Invalid party size '{input}': {reason}")]
    ValidationError { input: String, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
