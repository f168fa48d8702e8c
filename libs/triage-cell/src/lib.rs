pub mod error;
pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use error::TriageError;
pub use models::{
    ConversationTurn, PatientContext, TriageResult, TriageRole, TriageStatus, Urgency,
};
pub use router::triage_routes;
pub use services::engine::TriageEngine;
pub use services::model::{GeminiClient, LanguageModel};
