// libs/profile-cell/tests/profile_test.rs

use chrono::NaiveDate;
use serde_json::json;
use uuid::Uuid;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use profile_cell::{ProfileService, UpsertProfileRequest};
use shared_utils::test_utils::TestConfig;

fn service_against(mock_server: &MockServer) -> ProfileService {
    let config = TestConfig::default()
        .with_supabase_url(&mock_server.uri())
        .to_app_config();
    ProfileService::new(&config)
}

fn request(id: Uuid) -> UpsertProfileRequest {
    UpsertProfileRequest {
        id,
        name: "Ada Byrne".to_string(),
        email: "ada@example.com".to_string(),
        phone: Some("+353871234567".to_string()),
        height: Some(168.0),
        weight: Some(61.5),
        dob: NaiveDate::from_ymd_opt(1992, 3, 4),
    }
}

#[tokio::test]
async fn test_upsert_returns_the_stored_row() {
    let mock_server = MockServer::start().await;
    let user_id = Uuid::new_v4();

    Mock::given(method("POST"))
        .and(path("/rest/v1/profiles"))
        .and(query_param("on_conflict", "id"))
        .and(header(
            "Prefer",
            "resolution=merge-duplicates,return=representation",
        ))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([{
            "id": user_id,
            "name": "Ada Byrne",
            "email": "ada@example.com",
            "phone": "+353871234567",
            "height": 168.0,
            "weight": 61.5,
            "dob": "1992-03-04",
            "updated_at": "2024-06-10T09:00:00Z"
        }])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = service_against(&mock_server);
    let profile = service.upsert_profile(request(user_id)).await.unwrap();

    assert_eq!(profile.id, user_id);
    assert_eq!(profile.email, "ada@example.com");
    assert_eq!(profile.dob, NaiveDate::from_ymd_opt(1992, 3, 4));
}

#[tokio::test]
async fn test_backend_fault_propagates_as_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/profiles"))
        .respond_with(ResponseTemplate::new(500).set_body_string("backend fault"))
        .mount(&mock_server)
        .await;

    let service = service_against(&mock_server);
    let result = service.upsert_profile(request(Uuid::new_v4())).await;

    assert!(result.is_err());
}
