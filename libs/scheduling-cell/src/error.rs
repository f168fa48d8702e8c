use thiserror::Error;

use shared_models::AppError;

#[derive(Error, Debug)]
pub enum SchedulingError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<SchedulingError> for AppError {
    fn from(err: SchedulingError) -> Self {
        match err {
            SchedulingError::NotFound(msg) => AppError::NotFound(msg),
            SchedulingError::InvalidInput(msg) => AppError::BadRequest(msg),
            SchedulingError::Storage(msg) => AppError::Storage(msg),
        }
    }
}
