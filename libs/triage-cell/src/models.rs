use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use shared_models::Department;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriageRole {
    Patient,
    Assistant,
}

/// One exchange in a triage session. The full ordered history is resent on
/// every call; there is no server-held conversation state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: TriageRole,
    pub text: String,
}

/// Optional patient metadata. Injected into the system directive as framing,
/// never as a conversation turn, so role alternation is undisturbed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatientContext {
    pub height: Option<f64>,
    pub height_unit: Option<String>,
    pub weight: Option<f64>,
    pub weight_unit: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriageStatus {
    GatheringInfo,
    Conclusion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    Medium,
    High,
    Emergency,
}

/// Structured result of one triage turn: either a follow-up question while
/// gathering information, or a concluded department + urgency recommendation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriageResult {
    pub status: TriageStatus,
    pub message: String,
    #[serde(default)]
    pub recommended_department: Option<Department>,
    #[serde(default)]
    pub reasoning: Option<String>,
    pub urgency: Urgency,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TriageChatRequest {
    pub history: Vec<ConversationTurn>,
    #[serde(default)]
    pub patient_context: Option<PatientContext>,
}
