use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use tracing::{debug, error};

use shared_config::AppConfig;

use crate::error::TriageError;

/// The language-model collaborator. Takes a system directive, the replayed
/// conversation, and a closed output schema; returns the generated text.
/// Implementations surface capacity exhaustion and rate limiting distinctly
/// and never retry on their own.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    async fn generate(
        &self,
        system_directive: &str,
        contents: Value,
        output_schema: Value,
    ) -> Result<String, TriageError>;
}

/// Gemini `generateContent` client. The base URL comes from configuration so
/// tests can point it at a mock server.
pub struct GeminiClient {
    http: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            http: Client::new(),
            base_url: config.gemini_base_url.clone(),
            api_key: config.gemini_api_key.clone(),
            model: config.gemini_model.clone(),
        }
    }
}

#[async_trait]
impl LanguageModel for GeminiClient {
    async fn generate(
        &self,
        system_directive: &str,
        contents: Value,
        output_schema: Value,
    ) -> Result<String, TriageError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );
        debug!("Requesting schema-constrained generation from {}", self.model);

        let body = json!({
            "systemInstruction": { "parts": [{ "text": system_directive }] },
            "contents": contents,
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": output_schema,
            }
        });

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| TriageError::Upstream(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("Generation request failed ({}): {}", status, error_text);

            return Err(match status.as_u16() {
                503 => TriageError::ModelOverloaded(error_text),
                429 => TriageError::ModelRateLimited(error_text),
                _ => TriageError::Upstream(format!("status {}: {}", status, error_text)),
            });
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| TriageError::Upstream(e.to_string()))?;

        payload["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| {
                TriageError::ContractViolation("response contained no generated text".to_string())
            })
    }
}
