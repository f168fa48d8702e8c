use serde_json::{json, Value};
use tracing::debug;

use shared_config::AppConfig;
use shared_models::Department;

use crate::error::TriageError;
use crate::models::{ConversationTurn, PatientContext, TriageResult, TriageRole, TriageStatus, Urgency};
use crate::services::model::{GeminiClient, LanguageModel};

const SYSTEM_DIRECTIVE: &str = "\
You are a professional medical triage assistant.

Rules:
1. Ask follow-up questions while information is insufficient.
2. Do NOT diagnose diseases.
3. Once enough information is gathered, conclude with exactly one department and an urgency level.
4. Any life-threatening presentation must conclude with Emergency Medicine at emergency urgency.
5. Departments:
   General Medicine, Orthopedics, Cardiology, Neurology,
   Dermatology, Gastroenterology, Pulmonology, Emergency Medicine.

Return ONLY valid JSON matching the schema.";

/// Advances a triage conversation one turn. Stateless: the caller replays the
/// full history on every call, and each call costs one upstream generation
/// round-trip. Failures propagate; a fallback recommendation is never
/// fabricated since it could understate urgency.
pub struct TriageEngine<M: LanguageModel> {
    model: M,
}

impl TriageEngine<GeminiClient> {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_model(GeminiClient::new(config))
    }
}

impl<M: LanguageModel> TriageEngine<M> {
    pub fn with_model(model: M) -> Self {
        Self { model }
    }

    pub async fn advance(
        &self,
        history: &[ConversationTurn],
        patient_context: Option<&PatientContext>,
    ) -> Result<TriageResult, TriageError> {
        if history.is_empty() {
            return Err(TriageError::InvalidInput(
                "conversation history is empty".to_string(),
            ));
        }
        if history[0].role != TriageRole::Patient {
            return Err(TriageError::InvalidInput(
                "conversation must start with a patient turn".to_string(),
            ));
        }

        debug!("Advancing triage conversation with {} turns", history.len());

        let directive = build_directive(patient_context);
        let contents = build_contents(history);

        let raw = self
            .model
            .generate(&directive, contents, response_schema())
            .await?;

        let result: TriageResult = serde_json::from_str(&raw)
            .map_err(|e| TriageError::ContractViolation(format!("unparseable payload: {}", e)))?;

        validate_result(&result)?;

        Ok(result)
    }
}

fn build_directive(patient_context: Option<&PatientContext>) -> String {
    let Some(ctx) = patient_context else {
        return SYSTEM_DIRECTIVE.to_string();
    };

    let mut directive = String::from(SYSTEM_DIRECTIVE);
    directive.push_str("\n\nPatient context (metadata, not part of the conversation):");

    if let Some(height) = ctx.height {
        let unit = ctx.height_unit.as_deref().unwrap_or("cm");
        directive.push_str(&format!("\n- height: {} {}", height, unit));
    }
    if let Some(weight) = ctx.weight {
        let unit = ctx.weight_unit.as_deref().unwrap_or("kg");
        directive.push_str(&format!("\n- weight: {} {}", weight, unit));
    }
    if let Some(dob) = ctx.date_of_birth {
        directive.push_str(&format!("\n- date of birth: {}", dob.format("%Y-%m-%d")));
    }

    directive
}

fn build_contents(history: &[ConversationTurn]) -> Value {
    let turns: Vec<Value> = history
        .iter()
        .map(|turn| {
            let role = match turn.role {
                TriageRole::Patient => "user",
                TriageRole::Assistant => "model",
            };
            json!({ "role": role, "parts": [{ "text": turn.text }] })
        })
        .collect();

    Value::Array(turns)
}

fn response_schema() -> Value {
    let departments: Vec<&str> = Department::ALL.iter().map(|d| d.as_str()).collect();

    json!({
        "type": "OBJECT",
        "properties": {
            "status": {
                "type": "STRING",
                "enum": ["gathering_info", "conclusion"],
            },
            "message": { "type": "STRING" },
            "recommended_department": {
                "type": "STRING",
                "enum": departments,
                "nullable": true,
            },
            "reasoning": { "type": "STRING", "nullable": true },
            "urgency": {
                "type": "STRING",
                "enum": ["low", "medium", "high", "emergency"],
            },
        },
        "required": ["status", "message", "urgency"],
    })
}

/// Schema conformance beyond field shapes: the cross-field invariants a
/// generated payload must satisfy before it may be returned to a caller.
fn validate_result(result: &TriageResult) -> Result<(), TriageError> {
    match result.status {
        TriageStatus::GatheringInfo => {
            if result.recommended_department.is_some() || result.reasoning.is_some() {
                return Err(TriageError::ContractViolation(
                    "gathering_info turn carried a recommendation".to_string(),
                ));
            }
            if result.urgency == Urgency::Emergency {
                return Err(TriageError::ContractViolation(
                    "emergency urgency requires an Emergency Medicine conclusion".to_string(),
                ));
            }
        }
        TriageStatus::Conclusion => {
            if result.recommended_department.is_none() {
                return Err(TriageError::ContractViolation(
                    "conclusion turn is missing a department recommendation".to_string(),
                ));
            }
            if result.urgency == Urgency::Emergency
                && result.recommended_department != Some(Department::EmergencyMedicine)
            {
                return Err(TriageError::ContractViolation(
                    "emergency urgency must recommend Emergency Medicine".to_string(),
                ));
            }
        }
    }

    Ok(())
}
