use serde::{Serialize, Deserialize};
use thiserror::Error;

#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum ErrorCode {
    #[error("Invalid question record")]
    InvalidRecord,
    #[error("Question ID already in use")]
    IdentifierInUse,
    #[error("Question not found")]
    NotFound,
    #[error("Failed to create question")]
    CreateFailed,
    #[error("Failed to update question")]
    UpdateFailed,
    #[error("Failed to delete question")]
    DeleteFailed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
