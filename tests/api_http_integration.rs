//! End-to-end tests for the REST API.
//!
//! Drives the full router (middleware included) over the in-memory store
//! with `tower::ServiceExt::oneshot`.

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use collab_hub::adapters::http::{api_router, AppState};
use collab_hub::adapters::memory::InMemoryStore;
use collab_hub::application::RecommendationLimits;
use collab_hub::config::ServerConfig;

// =============================================================================
// Test Infrastructure
// =============================================================================

struct Api {
    router: Router,
}

impl Api {
    fn new() -> Self {
        let state = AppState::in_memory(&InMemoryStore::new(), RecommendationLimits::default());
        Self {
            router: api_router(state, &ServerConfig::default()),
        }
    }

    async fn send(
        &self,
        method: Method,
        uri: &str,
        acting_user: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(user) = acting_user {
            builder = builder.header("X-User-Id", user);
        }
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None, None).await
    }

    async fn post(&self, uri: &str, acting_user: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, acting_user, Some(body)).await
    }

    async fn create_user(&self, username: &str, interests: &[&str]) -> String {
        let (status, body) = self
            .post(
                "/api/users",
                None,
                json!({
                    "email": format!("{}@example.com", username),
                    "username": username,
                    "interests": interests,
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{}", body);
        body["id"].as_str().unwrap().to_string()
    }

    async fn create_project(&self, owner: &str, title: &str, category: &str, tags: &[&str]) -> String {
        let (status, body) = self
            .post(
                "/api/projects",
                Some(owner),
                json!({"title": title, "category": category, "tags": tags}),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{}", body);
        body["id"].as_str().unwrap().to_string()
    }
}

// =============================================================================
// Users
// =============================================================================

#[tokio::test]
async fn user_registration_and_profile_update() {
    let api = Api::new();

    let (status, created) = api
        .post(
            "/api/users",
            None,
            json!({
                "email": "ada@example.com",
                "username": "ada",
                "role": "working",
                "companyName": "Engines Ltd",
                "interests": ["AI", "robotics"]
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["role"], "working");
    assert_eq!(created["interests"], json!(["Robotics", "AI"]));
    let id = created["id"].as_str().unwrap();

    let (status, updated) = api
        .send(
            Method::PUT,
            &format!("/api/users/{}", id),
            None,
            Some(json!({"username": "ada.l", "email": "other@example.com"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["username"], "ada.l");
    assert_eq!(updated["email"], "ada@example.com");
    assert_eq!(updated["companyName"], "Engines Ltd");

    let (status, fetched) = api.get(&format!("/api/users/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["username"], "ada.l");
}

#[tokio::test]
async fn user_validation_and_lookup_errors() {
    let api = Api::new();

    let (status, body) = api
        .post("/api/users", None, json!({"email": "no-at-sign", "username": "x"}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_FAILED");

    let (status, _) = api
        .post(
            "/api/users",
            None,
            json!({"email": "a@b.c", "username": "x", "interests": ["Astrology"]}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = api
        .get("/api/users/00000000-0000-0000-0000-000000000001")
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "USER_NOT_FOUND");

    let (status, _) = api.get("/api/users/not-a-uuid").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn blank_username_patch_is_rejected() {
    let api = Api::new();
    let id = api.create_user("ada", &[]).await;

    let (status, _) = api
        .send(
            Method::PUT,
            &format!("/api/users/{}", id),
            None,
            Some(json!({"username": "   "})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// =============================================================================
// Projects
// =============================================================================

#[tokio::test]
async fn project_creation_requires_identity_and_valid_input() {
    let api = Api::new();
    let owner = api.create_user("owner", &[]).await;

    let (status, body) = api
        .post("/api/projects", None, json!({"title": "Drone", "category": "Robotics"}))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "AUTHENTICATION_REQUIRED");

    let (status, _) = api
        .post(
            "/api/projects",
            Some(&owner),
            json!({"title": "  ", "category": "Robotics"}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = api
        .post(
            "/api/projects",
            Some(&owner),
            json!({"title": "Drone", "category": "Astrology"}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = api
        .post(
            "/api/projects",
            Some("00000000-0000-0000-0000-000000000001"),
            json!({"title": "Drone", "category": "Robotics"}),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "USER_NOT_FOUND");

    let (status, body) = api
        .post(
            "/api/projects",
            Some(&owner),
            json!({"title": "Drone", "category": "robotics", "tags": [" ai ", "ai", ""]}),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["category"], "Robotics");
    assert_eq!(body["tags"], json!(["ai"]));
    assert_eq!(body["type"], "combined");
    assert_eq!(body["createdBy"], owner.as_str());
    assert_eq!(body["members"], json!([owner]));
}

#[tokio::test]
async fn project_owner_may_come_from_created_by() {
    let api = Api::new();
    let owner = api.create_user("owner", &[]).await;

    let (status, body) = api
        .post(
            "/api/projects",
            None,
            json!({"title": "Kiln", "category": "Chemistry", "createdBy": owner}),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    assert_eq!(body["createdBy"], owner.as_str());
    assert_eq!(body["members"], json!([owner]));

    let (status, body) = api
        .post(
            "/api/projects",
            None,
            json!({"title": "Kiln", "category": "Chemistry", "createdBy": "bob"}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_FAILED");
}

#[tokio::test]
async fn project_listing_filters() {
    let api = Api::new();
    let ada = api.create_user("ada", &[]).await;
    let bob = api.create_user("bob", &[]).await;

    let drone = api.create_project(&ada, "Drone swarm", "Robotics", &["flight"]).await;
    api.create_project(&ada, "Poster", "Design", &[]).await;
    api.create_project(&bob, "Ledger", "Business", &["finance"]).await;

    let (_, all) = api.get("/api/projects").await;
    assert_eq!(all.as_array().unwrap().len(), 3);

    let (_, by_ada) = api.get(&format!("/api/projects?creator={}", ada)).await;
    assert_eq!(by_ada.as_array().unwrap().len(), 2);

    let (_, text) = api.get("/api/projects?q=FLIGHT").await;
    assert_eq!(text.as_array().unwrap().len(), 1);
    assert_eq!(text[0]["id"], drone.as_str());

    let (_, design) = api.get("/api/projects?category=design").await;
    assert_eq!(design.as_array().unwrap().len(), 1);
    assert_eq!(design[0]["title"], "Poster");

    let (status, _) = api.get("/api/projects?category=Astrology").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// =============================================================================
// Collaboration workflow
// =============================================================================

#[tokio::test]
async fn request_accept_chat_and_delete_cascade() {
    let api = Api::new();
    let owner = api.create_user("owner", &[]).await;
    let bob = api.create_user("bob", &[]).await;
    let carol = api.create_user("carol", &[]).await;
    let project = api.create_project(&owner, "Drone", "Robotics", &[]).await;
    let requests_uri = format!("/api/projects/{}/requests", project);
    let chat_uri = format!("/api/projects/{}/chat", project);

    // Bob asks to join
    let (status, request) = api
        .post(&requests_uri, None, json!({"senderUserId": bob}))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(request["status"], "pending");
    let request_id = request["id"].as_str().unwrap().to_string();
    let respond_uri = format!("/api/requests/{}/respond", request_id);

    let (status, body) = api
        .post(&requests_uri, None, json!({"senderUserId": bob}))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "DUPLICATE_PENDING_REQUEST");

    // Owner cannot request to join their own project
    let (status, body) = api
        .post(&requests_uri, None, json!({"senderUserId": owner}))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "ALREADY_MEMBER");

    // Bob is not a member yet
    let (status, _) = api
        .post(&chat_uri, None, json!({"content": "hi", "senderId": bob}))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // Only the owner decides
    let (status, _) = api
        .post(&respond_uri, Some(&bob), json!({"decision": "accepted"}))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = api
        .post(&respond_uri, None, json!({"decision": "accepted"}))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = api
        .post(&respond_uri, Some(&owner), json!({"decision": "maybe"}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, decided) = api
        .post(&respond_uri, Some(&owner), json!({"decision": "accepted"}))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(decided["request"]["status"], "accepted");
    assert!(decided["request"]["respondedAt"].is_string());
    let members = decided["project"]["members"].as_array().unwrap();
    assert!(members.contains(&json!(bob)));

    let (status, body) = api
        .post(&respond_uri, Some(&owner), json!({"decision": "rejected"}))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "INVALID_STATE_TRANSITION");

    let (status, body) = api
        .post(&requests_uri, None, json!({"senderUserId": bob}))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "ALREADY_MEMBER");

    // Chat between members
    let (status, first) = api
        .post(&chat_uri, None, json!({"content": "hello", "senderId": bob}))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(first["sequence"], 1);

    let (status, second) = api
        .post(&chat_uri, Some(&owner), json!({"content": "welcome"}))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(second["sequence"], 2);
    assert_eq!(second["senderId"], owner.as_str());

    let (status, _) = api
        .post(&chat_uri, None, json!({"content": "   ", "senderId": bob}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = api
        .post(&chat_uri, None, json!({"content": "let me in", "senderId": carol}))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (_, log) = api.get(&chat_uri).await;
    assert_eq!(log.as_array().unwrap().len(), 2);
    assert_eq!(log[0]["content"], "hello");

    let (_, tail) = api.get(&format!("{}?after=1", chat_uri)).await;
    assert_eq!(tail.as_array().unwrap().len(), 1);
    assert_eq!(tail[0]["content"], "welcome");

    let (_, limited) = api.get(&format!("{}?limit=1", chat_uri)).await;
    assert_eq!(limited.as_array().unwrap().len(), 1);
    assert_eq!(limited[0]["sequence"], 1);

    // Delete: owner only, then everything is gone
    let (status, _) = api
        .send(Method::DELETE, &format!("/api/projects/{}", project), Some(&bob), None)
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = api
        .send(Method::DELETE, &format!("/api/projects/{}", project), Some(&owner), None)
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = api.get(&format!("/api/projects/{}", project)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = api.get(&chat_uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = api.get(&requests_uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, body) = api.get(&format!("/api/requests/{}", request_id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "REQUEST_NOT_FOUND");
}

#[tokio::test]
async fn rejected_sender_may_ask_again() {
    let api = Api::new();
    let owner = api.create_user("owner", &[]).await;
    let bob = api.create_user("bob", &[]).await;
    let project = api.create_project(&owner, "Drone", "Robotics", &[]).await;
    let requests_uri = format!("/api/projects/{}/requests", project);

    let (_, first) = api
        .post(&requests_uri, None, json!({"senderUserId": bob}))
        .await;
    let respond_uri = format!("/api/requests/{}/respond", first["id"].as_str().unwrap());

    let (status, decided) = api
        .post(&respond_uri, Some(&owner), json!({"decision": "rejected"}))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(decided["request"]["status"], "rejected");
    assert_eq!(decided["project"]["members"], json!([owner]));

    let (status, _) = api
        .post(&requests_uri, None, json!({"senderUserId": bob}))
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, all) = api.get(&requests_uri).await;
    assert_eq!(all.as_array().unwrap().len(), 2);
    assert_eq!(all[0]["status"], "rejected");
    assert_eq!(all[1]["status"], "pending");

    let (_, pending) = api.get(&format!("{}?status=pending", requests_uri)).await;
    assert_eq!(pending.as_array().unwrap().len(), 1);

    let (status, _) = api.get(&format!("{}?status=maybe", requests_uri)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn request_errors_for_unknown_parties() {
    let api = Api::new();
    let owner = api.create_user("owner", &[]).await;
    let project = api.create_project(&owner, "Drone", "Robotics", &[]).await;
    let ghost = "00000000-0000-0000-0000-000000000002";

    let (status, body) = api
        .post(
            &format!("/api/projects/{}/requests", project),
            None,
            json!({"senderUserId": ghost}),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "USER_NOT_FOUND");

    let (status, body) = api
        .post(
            &format!("/api/projects/{}/requests", ghost),
            None,
            json!({"senderUserId": owner}),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "PROJECT_NOT_FOUND");

    let (status, _) = api
        .post(
            &format!("/api/requests/{}/respond", ghost),
            Some(&owner),
            json!({"decision": "accepted"}),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Recommendations
// =============================================================================

#[tokio::test]
async fn recommendations_rank_interests_then_backfill() {
    let api = Api::new();
    let owner = api.create_user("owner", &[]).await;
    let reader = api.create_user("reader", &["AI"]).await;

    let ai = api.create_project(&owner, "Vision", "AI", &[]).await;
    let tagged = api.create_project(&owner, "Rover", "Robotics", &["ai"]).await;
    let other = api.create_project(&owner, "Poster", "Design", &[]).await;
    let own = api.create_project(&reader, "Mine", "AI", &["ai"]).await;

    let (status, recs) = api.get(&format!("/api/recommendations/{}", reader)).await;
    assert_eq!(status, StatusCode::OK);

    let ids: Vec<&str> = recs
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["project"]["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec![ai.as_str(), tagged.as_str(), other.as_str()]);
    assert!(!ids.contains(&own.as_str()));
    assert_eq!(recs[0]["score"], 3);
    assert_eq!(recs[1]["score"], 1);
    assert_eq!(recs[2]["score"], 0);

    let (_, limited) = api
        .get(&format!("/api/recommendations/{}?limit=1", reader))
        .await;
    assert_eq!(limited.as_array().unwrap().len(), 1);

    let (status, _) = api
        .get("/api/recommendations/00000000-0000-0000-0000-000000000003")
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
