use thiserror::Error;

use shared_models::AppError;

/// Failure taxonomy of a triage turn. The engine performs no retries and
/// never substitutes a default recommendation; callers pick the user-facing
/// retry message from the variant.
#[derive(Error, Debug)]
pub enum TriageError {
    #[error("Invalid triage input: {0}")]
    InvalidInput(String),

    #[error("Model overloaded: {0}")]
    ModelOverloaded(String),

    #[error("Model rate limited: {0}")]
    ModelRateLimited(String),

    #[error("Model returned a non-conforming payload: {0}")]
    ContractViolation(String),

    #[error("Model request failed: {0}")]
    Upstream(String),
}

impl From<TriageError> for AppError {
    fn from(err: TriageError) -> Self {
        match err {
            TriageError::InvalidInput(msg) => AppError::BadRequest(msg),
            TriageError::ModelOverloaded(_) => AppError::ModelOverloaded(
                "AI model is overloaded. Please try again shortly.".to_string(),
            ),
            TriageError::ModelRateLimited(_) => AppError::ModelRateLimited(
                "Request limit reached. Please try again in a few minutes.".to_string(),
            ),
            TriageError::ContractViolation(msg) => AppError::ModelContract(msg),
            TriageError::Upstream(_) => AppError::ExternalService(
                "AI service unavailable. Please try again later.".to_string(),
            ),
        }
    }
}
