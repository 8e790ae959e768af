//! API client behavior: bearer attachment, 401 interception, single refresh
//! and replay, session teardown when the refresh token is gone or rejected.

mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use buddyterm::api::{ApiClient, ApiError};
use buddyterm::credentials::{CachedUser, CredentialStore, MemoryCredentialStore};
use buddyterm::logger::Logger;
use buddyterm::service::SessionService;

use common::{RecordedRequest, StubResponse, StubServer};

fn test_user() -> CachedUser {
    CachedUser {
        id: 7,
        email: "ada@example.com".to_string(),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        full_name: "Ada Lovelace".to_string(),
        profile_picture_url: None,
    }
}

fn profile_json() -> String {
    r#"{
        "id": 7,
        "email": "ada@example.com",
        "first_name": "Ada",
        "last_name": "Lovelace",
        "full_name": "Ada Lovelace",
        "is_online": true,
        "posts_count": 3,
        "friends_count": 2,
        "friendship_status": "self"
    }"#
    .to_string()
}

fn client_against(server: &StubServer, store: Arc<dyn CredentialStore>) -> ApiClient {
    ApiClient::new(server.base_url(), Duration::from_secs(5), store)
}

#[tokio::test]
async fn access_token_appears_verbatim_in_authorization_header() {
    let server = StubServer::start_queue(vec![StubResponse::json(200, &profile_json())]).await;
    let store: Arc<dyn CredentialStore> = Arc::new(MemoryCredentialStore::new());
    store.store_session("tok-123", "refresh-1", &test_user()).unwrap();

    let client = client_against(&server, Arc::clone(&store));
    let user = client.profile().await.expect("profile call succeeds");
    assert_eq!(user.id, 7);

    let recorded = server.recorded();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].authorization.as_deref(), Some("Bearer tok-123"));
}

#[tokio::test]
async fn expired_access_token_triggers_one_refresh_and_one_replay() {
    let server = StubServer::start_queue(vec![
        StubResponse::json(401, r#"{"detail":"token expired"}"#),
        StubResponse::json(200, r#"{"access":"fresh-token"}"#),
        StubResponse::json(200, &profile_json()),
    ])
    .await;
    let store: Arc<dyn CredentialStore> = Arc::new(MemoryCredentialStore::new());
    store.store_session("stale-token", "refresh-1", &test_user()).unwrap();

    let client = client_against(&server, Arc::clone(&store));
    let user = client.profile().await.expect("replayed call succeeds");
    assert_eq!(user.id, 7);

    let recorded = server.recorded();
    assert_eq!(recorded.len(), 3, "original, refresh, replay - nothing else");
    assert_eq!(recorded[0].path, "/api/auth/profile/");
    assert_eq!(recorded[0].authorization.as_deref(), Some("Bearer stale-token"));
    assert_eq!(recorded[1].method, "POST");
    assert_eq!(recorded[1].path, "/api/auth/token/refresh/");
    assert_eq!(recorded[1].authorization, None);
    assert!(recorded[1].body.contains("refresh-1"));
    assert_eq!(recorded[2].path, "/api/auth/profile/");
    assert_eq!(recorded[2].authorization.as_deref(), Some("Bearer fresh-token"));

    // The minted token is persisted; the rest of the session is untouched
    assert_eq!(store.access_token().as_deref(), Some("fresh-token"));
    assert_eq!(store.refresh_token().as_deref(), Some("refresh-1"));
    assert!(store.cached_user().is_some());
}

#[tokio::test]
async fn replayed_request_never_triggers_a_second_refresh() {
    let server = StubServer::start_queue(vec![
        StubResponse::json(401, r#"{"detail":"token expired"}"#),
        StubResponse::json(200, r#"{"access":"fresh-token"}"#),
        StubResponse::json(401, r#"{"detail":"still unauthorized"}"#),
    ])
    .await;
    let store: Arc<dyn CredentialStore> = Arc::new(MemoryCredentialStore::new());
    store.store_session("stale-token", "refresh-1", &test_user()).unwrap();

    let client = client_against(&server, Arc::clone(&store));
    let err = client.profile().await.expect_err("second 401 surfaces");
    assert!(matches!(err, ApiError::Unauthorized), "got {err:?}");

    // Exactly three requests: no second exchange was attempted
    assert_eq!(server.recorded().len(), 3);
}

#[tokio::test]
async fn rejected_refresh_clears_all_credentials() {
    let server = StubServer::start_queue(vec![
        StubResponse::json(401, r#"{"detail":"token expired"}"#),
        StubResponse::json(401, r#"{"detail":"refresh token revoked"}"#),
    ])
    .await;
    let store: Arc<dyn CredentialStore> = Arc::new(MemoryCredentialStore::new());
    store.store_session("stale-token", "refresh-1", &test_user()).unwrap();

    let client = client_against(&server, Arc::clone(&store));
    let err = client.profile().await.expect_err("session is gone");
    assert!(matches!(err, ApiError::SessionExpired), "got {err:?}");

    // No replay happened and every stored credential is gone
    assert_eq!(server.recorded().len(), 2);
    assert!(store.access_token().is_none());
    assert!(store.refresh_token().is_none());
    assert!(store.cached_user().is_none());
}

#[tokio::test]
async fn missing_refresh_token_falls_through_to_the_failure_path() {
    let server = StubServer::start_queue(vec![StubResponse::json(401, r#"{"detail":"token expired"}"#)]).await;
    let store: Arc<dyn CredentialStore> = Arc::new(MemoryCredentialStore::new());
    store.store_access_token("stale-token").unwrap();

    let client = client_against(&server, Arc::clone(&store));
    let err = client.profile().await.expect_err("no refresh token to use");
    assert!(matches!(err, ApiError::SessionExpired), "got {err:?}");

    // The refresh endpoint was never called
    assert_eq!(server.recorded().len(), 1);
    assert!(store.access_token().is_none());
}

#[tokio::test]
async fn bad_login_surfaces_the_server_message_without_a_refresh_attempt() {
    let server = StubServer::start_queue(vec![StubResponse::json(
        401,
        r#"{"detail":"No active account found with the given credentials"}"#,
    )])
    .await;
    let store: Arc<dyn CredentialStore> = Arc::new(MemoryCredentialStore::new());

    let client = client_against(&server, Arc::clone(&store));
    let err = client.login("ada@example.com", "wrong").await.expect_err("login fails");
    match err {
        ApiError::Api { status, message } => {
            assert_eq!(status, 401);
            assert!(message.contains("No active account"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
    assert_eq!(server.recorded().len(), 1);
}

#[tokio::test]
async fn validation_errors_carry_field_messages() {
    let server = StubServer::start_queue(vec![StubResponse::json(
        400,
        r#"{"content":["Content cannot be empty."]}"#,
    )])
    .await;
    let store: Arc<dyn CredentialStore> = Arc::new(MemoryCredentialStore::new());
    store.store_session("tok-123", "refresh-1", &test_user()).unwrap();

    let client = client_against(&server, store);
    let err = client.create_comment(1, "", None).await.expect_err("validation fails");
    match err {
        ApiError::Validation(fields) => {
            assert_eq!(fields["content"], vec!["Content cannot be empty.".to_string()]);
        }
        other => panic!("expected Validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn login_then_authenticated_call_needs_no_refresh() {
    let login_body = r#"{
        "access": "access-1",
        "refresh": "refresh-1",
        "user": {
            "id": 7,
            "email": "ada@example.com",
            "first_name": "Ada",
            "last_name": "Lovelace",
            "full_name": "Ada Lovelace",
            "profile_picture_url": null
        }
    }"#;
    let feed_body = r#"{"count":0,"next":null,"previous":null,"results":[]}"#;
    let server = StubServer::start_queue(vec![
        StubResponse::json(200, login_body),
        StubResponse::json(200, feed_body),
    ])
    .await;

    let store: Arc<dyn CredentialStore> = Arc::new(MemoryCredentialStore::new());
    let api = Arc::new(ApiClient::new(
        server.base_url(),
        Duration::from_secs(5),
        Arc::clone(&store),
    ));
    let service = SessionService::from_parts(api, Arc::clone(&store), Logger::new());

    let user = service.login("ada@example.com", "pw").await.expect("login succeeds");
    assert_eq!(user.id, 7);
    assert_eq!(store.access_token().as_deref(), Some("access-1"));
    assert_eq!(store.refresh_token().as_deref(), Some("refresh-1"));

    let feed = service.load_feed(1, false).await.expect("feed loads");
    assert!(feed.posts.is_empty());
    assert!(!feed.has_more);

    let recorded = server.recorded();
    assert_eq!(recorded.len(), 2, "no refresh call in between");
    assert_eq!(recorded[0].authorization, None);
    assert_eq!(recorded[1].authorization.as_deref(), Some("Bearer access-1"));
}

#[tokio::test]
async fn concurrent_401s_share_a_single_refresh_exchange() {
    let refresh_calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&refresh_calls);
    let body = profile_json();

    let server = StubServer::start(Arc::new(move |request: &RecordedRequest| {
        if request.path.ends_with("/token/refresh/") {
            counter.fetch_add(1, Ordering::SeqCst);
            StubResponse::json(200, r#"{"access":"fresh-token"}"#)
        } else if request.authorization.as_deref() == Some("Bearer fresh-token") {
            StubResponse::json(200, &body)
        } else {
            StubResponse::json(401, r#"{"detail":"token expired"}"#)
        }
    }))
    .await;

    let store: Arc<dyn CredentialStore> = Arc::new(MemoryCredentialStore::new());
    store.store_session("stale-token", "refresh-1", &test_user()).unwrap();

    let client = Arc::new(client_against(&server, Arc::clone(&store)));
    let (first, second) = tokio::join!(client.profile(), client.profile());
    assert!(first.is_ok(), "first concurrent call succeeds: {first:?}");
    assert!(second.is_ok(), "second concurrent call succeeds: {second:?}");

    assert_eq!(
        refresh_calls.load(Ordering::SeqCst),
        1,
        "concurrent 401s must coalesce into one exchange"
    );
    assert_eq!(store.access_token().as_deref(), Some("fresh-token"));
}
