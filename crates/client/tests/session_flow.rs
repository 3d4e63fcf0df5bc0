//! Session lifecycle tests against a mock backend.

use std::sync::Arc;

use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use robotech_client::api::ProfileUpdate;
use robotech_client::storage::{KeyValueStore, KeyValueStoreExt, keys};
use robotech_client::{ApiClient, AuthError, MemoryStore, SessionStore};

fn auth_success_body(token: &str) -> serde_json::Value {
    serde_json::json!({
        "success": true,
        "data": {
            "user": { "id": "u1", "name": "Admin User", "email": "admin@example.com", "role": "admin" },
            "token": token
        }
    })
}

fn session_for(server: &MockServer) -> (SessionStore, Arc<MemoryStore>) {
    let storage = Arc::new(MemoryStore::new());
    let api = ApiClient::from_base_url(server.uri().parse().expect("mock server URI"));
    let session = SessionStore::new(Arc::clone(&storage) as Arc<dyn KeyValueStore>, api);
    (session, storage)
}

#[tokio::test]
async fn login_success_establishes_and_persists_session() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(auth_success_body("tok-1")))
        .mount(&server)
        .await;

    let (session, storage) = session_for(&server);
    let user = session
        .login("admin@example.com", "Secret123")
        .await
        .expect("login");

    assert!(session.is_authenticated());
    assert!(session.is_admin());
    assert_eq!(user.name, "Admin User");

    // Both halves of the session are persisted, independently keyed.
    let stored_token: Option<String> = storage.get_json(keys::AUTH_TOKEN).expect("read token");
    assert_eq!(stored_token.as_deref(), Some("tok-1"));
    assert!(storage.get_raw(keys::USER).expect("read user").is_some());
}

#[tokio::test]
async fn login_failure_leaves_session_anonymous() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "success": false,
            "message": "Invalid credentials"
        })))
        .mount(&server)
        .await;

    let (session, storage) = session_for(&server);
    let err = session
        .login("admin@example.com", "wrong")
        .await
        .expect_err("should fail");

    // Failure result carries a non-empty human-readable message.
    match err {
        AuthError::Rejected(message) => assert!(!message.is_empty()),
        other => panic!("expected Rejected, got {other:?}"),
    }

    assert!(!session.is_authenticated());
    assert!(storage.get_raw(keys::AUTH_TOKEN).expect("read").is_none());
}

#[tokio::test]
async fn login_failure_with_backend_message_surfaces_it() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "success": false,
            "message": "Account is locked"
        })))
        .mount(&server)
        .await;

    let (session, _) = session_for(&server);
    let err = session
        .login("admin@example.com", "Secret123")
        .await
        .expect_err("should fail");

    match err {
        AuthError::Rejected(message) => assert_eq!(message, "Account is locked"),
        other => panic!("expected Rejected, got {other:?}"),
    }
}

#[tokio::test]
async fn restore_verifies_token_and_keeps_valid_session() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .and(header("authorization", "Bearer tok-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "data": { "id": "u1", "name": "Fresh Name", "email": "admin@example.com", "role": "admin" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (session, storage) = session_for(&server);
    storage
        .put_json(
            keys::USER,
            &serde_json::json!({ "id": "u1", "name": "Stale Name", "email": "admin@example.com", "role": "admin" }),
        )
        .expect("seed user");
    storage.put_json(keys::AUTH_TOKEN, "tok-1").expect("seed token");

    assert!(session.restore().await);

    // The verified profile replaces the restored one.
    let user = session.current_user().expect("user");
    assert_eq!(user.name, "Fresh Name");
}

#[tokio::test]
async fn restore_discards_session_when_verification_fails() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&server)
        .await;

    let (session, storage) = session_for(&server);
    storage
        .put_json(
            keys::USER,
            &serde_json::json!({ "id": "u1", "name": "Old", "email": "a@b.co", "role": "user" }),
        )
        .expect("seed user");
    storage.put_json(keys::AUTH_TOKEN, "expired").expect("seed token");

    // Fail-closed: restored session is discarded, persisted copies removed.
    assert!(!session.restore().await);
    assert!(!session.is_authenticated());
    assert!(storage.get_raw(keys::USER).expect("read").is_none());
    assert!(storage.get_raw(keys::AUTH_TOKEN).expect("read").is_none());
}

#[tokio::test]
async fn unauthorized_response_clears_session() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(auth_success_body("tok-1")))
        .mount(&server)
        .await;

    // Token revoked server-side: the next authenticated call gets a 401.
    Mock::given(method("PUT"))
        .and(path("/auth/profile"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&server)
        .await;

    let (session, storage) = session_for(&server);
    session
        .login("admin@example.com", "Secret123")
        .await
        .expect("login");
    assert!(session.is_authenticated());

    let update = ProfileUpdate {
        name: Some("New Name".to_string()),
        ..ProfileUpdate::default()
    };
    let err = session.update_profile(&update).await.expect_err("401");

    assert!(matches!(err, AuthError::NotAuthenticated));
    assert!(!session.is_authenticated());
    assert!(storage.get_raw(keys::AUTH_TOKEN).expect("read").is_none());
}

#[tokio::test]
async fn register_success_logs_in() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/register"))
        .respond_with(ResponseTemplate::new(201).set_body_json(auth_success_body("tok-2")))
        .mount(&server)
        .await;

    let (session, _) = session_for(&server);
    let new_user = robotech_client::api::NewUser {
        name: "Admin User".to_string(),
        email: "admin@example.com".to_string(),
        password: "Secret123".to_string(),
    };

    session.register(&new_user).await.expect("register");
    assert!(session.is_authenticated());
}

#[tokio::test]
async fn register_conflict_surfaces_message_and_stays_anonymous() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/register"))
        .respond_with(ResponseTemplate::new(409).set_body_json(serde_json::json!({
            "success": false,
            "message": "Email already registered"
        })))
        .mount(&server)
        .await;

    let (session, _) = session_for(&server);
    let new_user = robotech_client::api::NewUser {
        name: "Admin User".to_string(),
        email: "admin@example.com".to_string(),
        password: "Secret123".to_string(),
    };

    let err = session.register(&new_user).await.expect_err("conflict");
    match err {
        AuthError::Rejected(message) => assert_eq!(message, "Email already registered"),
        other => panic!("expected Rejected, got {other:?}"),
    }
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn logout_clears_everything_synchronously() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(auth_success_body("tok-1")))
        .mount(&server)
        .await;

    let (session, storage) = session_for(&server);
    session
        .login("admin@example.com", "Secret123")
        .await
        .expect("login");

    session.logout();

    assert!(!session.is_authenticated());
    assert!(session.current_user().is_none());
    assert!(storage.get_raw(keys::USER).expect("read").is_none());
    assert!(storage.get_raw(keys::AUTH_TOKEN).expect("read").is_none());
}
