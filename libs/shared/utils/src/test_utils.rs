use std::sync::Arc;

use shared_config::AppConfig;

/// Config builder for cell tests. Point `supabase_url` / `gemini_base_url`
/// at wiremock servers to exercise handlers without live collaborators.
pub struct TestConfig {
    pub supabase_url: String,
    pub supabase_service_key: String,
    pub gemini_base_url: String,
    pub gemini_api_key: String,
    pub gemini_model: String,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            supabase_url: "http://localhost:54321".to_string(),
            supabase_service_key: "test-service-key".to_string(),
            gemini_base_url: "http://localhost:54322".to_string(),
            gemini_api_key: "test-gemini-key".to_string(),
            gemini_model: "gemini-3-flash-preview".to_string(),
        }
    }
}

impl TestConfig {
    pub fn with_supabase_url(mut self, url: &str) -> Self {
        self.supabase_url = url.to_string();
        self
    }

    pub fn with_gemini_base_url(mut self, url: &str) -> Self {
        self.gemini_base_url = url.to_string();
        self
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            supabase_url: self.supabase_url.clone(),
            supabase_service_key: self.supabase_service_key.clone(),
            gemini_base_url: self.gemini_base_url.clone(),
            gemini_api_key: self.gemini_api_key.clone(),
            gemini_model: self.gemini_model.clone(),
        }
    }

    pub fn to_arc(&self) -> Arc<AppConfig> {
        Arc::new(self.to_app_config())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_creation() {
        let config = TestConfig::default();
        let app_config = config.to_app_config();

        assert_eq!(app_config.supabase_url, "http://localhost:54321");
        assert_eq!(app_config.supabase_service_key, "test-service-key");
        assert!(!app_config.gemini_api_key.is_empty());
    }

    #[test]
    fn test_mock_server_overrides() {
        let config = TestConfig::default()
            .with_supabase_url("http://127.0.0.1:9999")
            .with_gemini_base_url("http://127.0.0.1:9998");

        assert_eq!(config.supabase_url, "http://127.0.0.1:9999");
        assert_eq!(config.gemini_base_url, "http://127.0.0.1:9998");
    }
}
