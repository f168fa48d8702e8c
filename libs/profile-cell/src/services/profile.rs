use anyhow::{anyhow, Result};
use chrono::Utc;
use serde_json::json;
use tracing::debug;

use shared_config::AppConfig;
use shared_database::supabase::SupabaseClient;

use crate::models::{Profile, UpsertProfileRequest};

/// Direct pass-through to the profile store. No decision logic lives here.
pub struct ProfileService {
    supabase: SupabaseClient,
}

impl ProfileService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            supabase: SupabaseClient::new(config),
        }
    }

    pub async fn upsert_profile(&self, request: UpsertProfileRequest) -> Result<Profile> {
        debug!("Upserting profile for user: {}", request.id);

        let profile_data = json!({
            "id": request.id,
            "name": request.name,
            "email": request.email,
            "phone": request.phone,
            "height": request.height,
            "weight": request.weight,
            "dob": request.dob,
            "updated_at": Utc::now().to_rfc3339(),
        });

        let result: Vec<Profile> = self
            .supabase
            .upsert("profiles", "id", profile_data)
            .await?;

        result
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("Profile upsert returned no row"))
    }
}
