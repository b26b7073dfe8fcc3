//! Integration tests for the resource facades.
//!
//! Each facade is exercised against a mock server to verify the paths,
//! methods and payloads it produces, and how it surfaces API responses.

use animal_rescue::resources::{
    Adoptee, Adopter, NewAdoptee, NewAdopter, NewAdoption, NewPetPreference, PetPreference,
};
use animal_rescue::{
    parse_bool_response, BaseUrl, Client, ClientConfig, ContextError, HttpError, RequestContext,
};
use chrono::{TimeZone, Utc};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a client for the mock server, under an `/api/` prefix.
fn client_for(server: &MockServer) -> Client {
    let config = ClientConfig::builder()
        .base_url(BaseUrl::new(format!("{}/api/", server.uri())).unwrap())
        .build()
        .unwrap();
    Client::new(config)
}

// ============================================================================
// Adoptees
// ============================================================================

#[tokio::test]
async fn test_adoptee_create() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/adoptees"))
        .and(body_json(json!({"name": "Rex", "breed": "Lab"})))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({"id": 7, "name": "Rex", "breed": "Lab"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let ctx = RequestContext::background();
    let created = client
        .adoptees()
        .create(
            &ctx,
            &NewAdoptee {
                name: Some("Rex".to_string()),
                breed: Some("Lab".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(created.response.status, 201);
    assert_eq!(
        created.data,
        Adoptee {
            id: Some(7),
            name: Some("Rex".to_string()),
            breed: Some("Lab".to_string()),
            ..Default::default()
        }
    );
}

#[tokio::test]
async fn test_adoptee_list() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/adoptees"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "name": "Rex"},
            {"id": 2, "name": "Fido", "age": "senior"}
        ])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let ctx = RequestContext::background();
    let adoptees = client.adoptees().list(&ctx).await.unwrap().into_inner();

    assert_eq!(adoptees.len(), 2);
    assert_eq!(adoptees[1].name.as_deref(), Some("Fido"));
    assert_eq!(adoptees[1].age.as_deref(), Some("senior"));
}

#[tokio::test]
async fn test_adoptee_edit_sends_only_changed_fields() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/api/adoptee/7"))
        .and(body_json(json!({"age": "3 years"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": 7, "name": "Rex", "age": "3 years"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let ctx = RequestContext::background();
    let edited = client
        .adoptees()
        .edit(
            &ctx,
            7,
            &NewAdoptee {
                age: Some("3 years".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(edited.age.as_deref(), Some("3 years"));
    assert_eq!(edited.name.as_deref(), Some("Rex"));
}

#[tokio::test]
async fn test_adoptee_delete_not_found_is_false() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/adoptee/99"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "Not Found"})))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let ctx = RequestContext::background();

    let result = client.adoptees().delete(&ctx, 99).await;
    match result {
        Err(HttpError::Api(error)) => {
            assert_eq!(error.status(), 404);
            assert_eq!(error.message, "Not Found");
        }
        other => panic!("Expected Api error, got: {other:?}"),
    }

    let deleted = parse_bool_response(client.adoptees().delete(&ctx, 99).await).unwrap();
    assert!(!deleted);
}

#[tokio::test]
async fn test_adoptee_delete_success_is_true() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/adoptee/7"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/adoptee/8"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let ctx = RequestContext::background();

    assert!(parse_bool_response(client.adoptees().delete(&ctx, 7).await).unwrap());
    assert!(parse_bool_response(client.adoptees().delete(&ctx, 8).await).unwrap());
}

#[tokio::test]
async fn test_adoptee_delete_server_error_is_surfaced() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(500).set_body_string("database unavailable"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let ctx = RequestContext::background();

    let result = parse_bool_response(client.adoptees().delete(&ctx, 7).await);
    assert!(matches!(result, Err(HttpError::Api(e)) if e.status() == 500));
}

// ============================================================================
// Adopters
// ============================================================================

#[tokio::test]
async fn test_adopter_get_with_nested_pet_preferences() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/adopter/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 3,
            "first_name": "Ada",
            "last_name": "Lovelace",
            "city": "London",
            "pet_preferences": [{"id": 1, "breed": "Beagle", "gender": "female"}]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let ctx = RequestContext::background();
    let adopter = client.adopters().get(&ctx, 3).await.unwrap().into_inner();

    assert_eq!(adopter.first_name.as_deref(), Some("Ada"));
    assert_eq!(adopter.city.as_deref(), Some("London"));
    assert_eq!(
        adopter.pet_preferences,
        Some(vec![PetPreference {
            id: Some(1),
            breed: Some("Beagle".to_string()),
            gender: Some("female".to_string()),
            ..Default::default()
        }])
    );
}

#[tokio::test]
async fn test_adopter_create_validation_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/adopters"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "message": "Validation Failed",
            "errors": [{"resource": "Adopter", "field": "email", "code": "invalid"}]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let ctx = RequestContext::background();
    let result = client
        .adopters()
        .create(
            &ctx,
            &NewAdopter {
                email: Some("not-an-email".to_string()),
                ..Default::default()
            },
        )
        .await;

    match result {
        Err(HttpError::Api(error)) => {
            assert_eq!(error.status(), 422);
            assert_eq!(error.errors[0].field, "email");
            assert!(error
                .to_string()
                .contains("invalid error caused by email field on Adopter resource"));
        }
        other => panic!("Expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_adopter_list_empty_body_is_empty_list() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/adopters"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let ctx = RequestContext::background();
    let adopters = client.adopters().list(&ctx).await.unwrap();

    assert!(adopters.is_empty());
}

// ============================================================================
// Adoptions
// ============================================================================

#[tokio::test]
async fn test_adoption_create_references_existing_records() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/adoptions"))
        .and(body_json(json!({
            "adopter": {"id": 3},
            "adoptee": {"id": 7},
            "created_at": "2024-05-01T12:30:00Z"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 11,
            "adopter": {"id": 3, "first_name": "Ada"},
            "adoptee": {"id": 7, "name": "Rex"},
            "created_at": "2024-05-01T12:30:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let ctx = RequestContext::background();
    let adoption = client
        .adoptions()
        .create(
            &ctx,
            &NewAdoption {
                adopter: Some(Adopter {
                    id: Some(3),
                    ..Default::default()
                }),
                adoptee: Some(Adoptee {
                    id: Some(7),
                    ..Default::default()
                }),
                created_at: Some(Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap()),
            },
        )
        .await
        .unwrap()
        .into_inner();

    assert_eq!(adoption.id, Some(11));
    assert_eq!(adoption.adopter.unwrap().first_name.as_deref(), Some("Ada"));
    assert_eq!(adoption.created_at.as_deref(), Some("2024-05-01T12:30:00Z"));
}

#[tokio::test]
async fn test_adoption_get_and_delete() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/adoption/11"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 11})))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/adoption/11"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let ctx = RequestContext::background();

    assert_eq!(client.adoptions().get(&ctx, 11).await.unwrap().id, Some(11));
    let response = client.adoptions().delete(&ctx, 11).await.unwrap();
    assert_eq!(response.status, 204);
}

// ============================================================================
// Pet preferences
// ============================================================================

#[tokio::test]
async fn test_pet_preference_paths() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/petprefs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 5, "breed": "Pug"}])))
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/api/petpref/5"))
        .and(body_json(json!({"gender": "male"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": 5, "breed": "Pug", "gender": "male"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/petpref/5"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let ctx = RequestContext::background();

    let prefs = client.pet_preferences().list(&ctx).await.unwrap();
    assert_eq!(prefs[0].breed.as_deref(), Some("Pug"));

    let edited = client
        .pet_preferences()
        .edit(
            &ctx,
            5,
            &NewPetPreference {
                gender: Some("male".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(edited.gender.as_deref(), Some("male"));

    let deleted = parse_bool_response(client.pet_preferences().delete(&ctx, 5).await).unwrap();
    assert!(!deleted);
}

#[tokio::test]
async fn test_facade_honours_cancelled_context() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let ctx = RequestContext::background();
    ctx.cancel();

    let result = client.pet_preferences().list(&ctx).await;
    assert!(matches!(
        result,
        Err(HttpError::Cancelled(ContextError::Canceled))
    ));
}
