use crate::domain::plant::value_objects::PlantId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlantError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Plant not found: {id}")]
    NotFound { id: PlantId },

    #[error("Storage error: {message}")]
    Storage { message: String },
}

impl PlantError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

impl From<rusqlite::Error> for PlantError {
    fn from(error: rusqlite::Error) -> Self {
        Self::Storage {
            message: error.to_string(),
        }
    }
}
