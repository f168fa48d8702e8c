use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize)]
pub struct DoctorLoginRequest {
    pub email: String,
    pub password: String,
}

/// Stored credential row. `password_hash` is an argon2 PHC string; the
/// submitted secret is never persisted or compared in the clear.
#[derive(Debug, Clone, Deserialize)]
pub struct DoctorCredential {
    pub doctor_id: Uuid,
    pub email: String,
    pub password_hash: String,
}

/// Public doctor identity returned after a successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoctorAccount {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub department_id: Uuid,
    pub experience_years: Option<i32>,
}
