// edupro-client/tests/refresh_flow.rs
// Login, bearer auth and the single refresh-on-401 retry

mod common;

use std::sync::Arc;
use std::sync::atomic::Ordering;

use chrono::{Duration, Utc};
use common::{FIRST_ACCESS, MockBackend, PASSWORD, REFRESH, USERNAME, client_for};
use edupro_client::session::SessionCookies;
use edupro_client::{
    AcademicApi, ClientError, FilePart, FinancialApi, HttpClient, ListQuery, MemoryTokenStore,
    TokenStore,
};
use serde_json::Value;

#[tokio::test]
async fn test_login_stores_both_tokens_and_returns_them() {
    let backend = MockBackend::spawn().await;
    let tokens = Arc::new(MemoryTokenStore::new());
    let (client, navigator) = client_for(&backend, tokens.clone());

    let pair = client.login(USERNAME, PASSWORD).await.unwrap();
    assert_eq!(pair.access, FIRST_ACCESS);
    assert_eq!(pair.refresh, REFRESH);

    assert_eq!(tokens.access_token().as_deref(), Some(FIRST_ACCESS));
    assert_eq!(tokens.refresh_token().as_deref(), Some(REFRESH));
    assert!(client.is_authenticated());
    assert!(navigator.visits().is_empty());

    // login itself never carries a bearer token
    assert_eq!(backend.state.auth_headers("/auth/login/"), vec![None]);

    let me = client.me().await.unwrap();
    assert_eq!(me.username, USERNAME);
    assert_eq!(me.display_name(), "Maria Lima");
}

#[tokio::test]
async fn test_bad_credentials_surface_detail_without_refresh() {
    let backend = MockBackend::spawn().await;
    let tokens = Arc::new(MemoryTokenStore::new());
    let (client, navigator) = client_for(&backend, tokens.clone());

    let err = client.login(USERNAME, "wrong").await.unwrap_err();
    assert_eq!(err.status(), Some(401));
    assert_eq!(
        err.to_string(),
        "No active account found with the given credentials"
    );
    assert_eq!(backend.state.refresh_calls(), 0);
    assert!(navigator.visits().is_empty());
    assert!(tokens.access_token().is_none());
}

#[tokio::test]
async fn test_rejected_access_is_refreshed_transparently() {
    let backend = MockBackend::spawn().await;
    let tokens = Arc::new(MemoryTokenStore::new());
    tokens.set_tokens("expired-access", REFRESH);
    let (client, navigator) = client_for(&backend, tokens.clone());

    let page = client.students().list(&ListQuery::new()).await.unwrap();
    assert_eq!(page.count, 2);
    assert_eq!(page.results[0].name, "Ana Souza");

    assert_eq!(backend.state.refresh_calls(), 1);
    assert_eq!(
        backend.state.auth_headers("/academic/students/"),
        vec![
            Some("Bearer expired-access".to_string()),
            Some("Bearer access-2".to_string())
        ]
    );
    // refresh call is anonymous
    assert_eq!(backend.state.auth_headers("/auth/refresh/"), vec![None]);

    assert_eq!(tokens.access_token().as_deref(), Some("access-2"));
    assert_eq!(tokens.refresh_token().as_deref(), Some(REFRESH));
    assert!(navigator.visits().is_empty());

    // the stored token is used directly from now on
    client.students().list(&ListQuery::new()).await.unwrap();
    assert_eq!(backend.state.refresh_calls(), 1);
}

#[tokio::test]
async fn test_locally_expired_access_cookie_still_refreshes() {
    let backend = MockBackend::spawn().await;
    let issued = Utc::now() - Duration::days(2);
    let mut cookies = SessionCookies::default();
    cookies.set_access(FIRST_ACCESS, issued);
    cookies.set_refresh(REFRESH, issued);
    let tokens = Arc::new(MemoryTokenStore::with_cookies(cookies));
    let (client, _navigator) = client_for(&backend, tokens.clone());

    assert!(!client.is_authenticated());
    let me = client.me().await.unwrap();
    assert_eq!(me.id, 1);

    assert_eq!(
        backend.state.auth_headers("/auth/me/"),
        vec![None, Some("Bearer access-2".to_string())]
    );
    assert!(client.is_authenticated());
}

#[tokio::test]
async fn test_rotated_refresh_token_is_stored() {
    let backend = MockBackend::spawn().await;
    backend.state.rotate_refresh.store(true, Ordering::SeqCst);
    let tokens = Arc::new(MemoryTokenStore::new());
    tokens.set_tokens("expired-access", REFRESH);
    let (client, _navigator) = client_for(&backend, tokens.clone());

    client.me().await.unwrap();
    assert_eq!(tokens.refresh_token().as_deref(), Some("refresh-rotated-2"));
}

#[tokio::test]
async fn test_missing_refresh_token_ends_session() {
    let backend = MockBackend::spawn().await;
    let tokens = Arc::new(MemoryTokenStore::new());
    tokens.set_access_token("expired-access");
    let (client, navigator) = client_for(&backend, tokens.clone());

    let err = client.students().list(&ListQuery::new()).await.unwrap_err();
    assert!(matches!(err, ClientError::SessionExpired(_)), "got {err:?}");

    assert_eq!(backend.state.refresh_calls(), 0);
    assert_eq!(backend.state.hits("/academic/students/"), 1);
    assert!(tokens.access_token().is_none());
    assert!(tokens.refresh_token().is_none());
    assert_eq!(navigator.visits(), vec!["/".to_string()]);
}

#[tokio::test]
async fn test_rejected_refresh_ends_session_without_retry() {
    let backend = MockBackend::spawn().await;
    let tokens = Arc::new(MemoryTokenStore::new());
    tokens.set_tokens("expired-access", "revoked-refresh");
    let (client, navigator) = client_for(&backend, tokens.clone());

    let err = client.me().await.unwrap_err();
    assert!(err.is_session_expired());

    assert_eq!(backend.state.refresh_calls(), 1);
    assert_eq!(backend.state.hits("/auth/me/"), 1);
    assert!(tokens.access_token().is_none());
    assert!(tokens.refresh_token().is_none());
    assert_eq!(navigator.visits(), vec!["/".to_string()]);
}

#[tokio::test]
async fn test_unparseable_refresh_answer_ends_session() {
    let backend = MockBackend::spawn().await;
    backend.state.garbage_refresh.store(true, Ordering::SeqCst);
    let tokens = Arc::new(MemoryTokenStore::new());
    tokens.set_tokens("expired-access", REFRESH);
    let (client, navigator) = client_for(&backend, tokens.clone());

    let err = client.me().await.unwrap_err();
    assert!(err.is_session_expired());
    assert_eq!(backend.state.hits("/auth/me/"), 1);
    assert!(tokens.refresh_token().is_none());
    assert_eq!(navigator.visits(), vec!["/".to_string()]);
}

#[tokio::test]
async fn test_second_401_is_returned_without_another_refresh() {
    let backend = MockBackend::spawn().await;
    let tokens = Arc::new(MemoryTokenStore::new());
    tokens.set_tokens(FIRST_ACCESS, REFRESH);
    let (client, navigator) = client_for(&backend, tokens.clone());

    let err = client.get::<Value>("/always-401/").await.unwrap_err();
    assert_eq!(err.status(), Some(401));
    assert_eq!(err.to_string(), "Given token not valid for any token type");

    assert_eq!(backend.state.refresh_calls(), 1);
    assert_eq!(backend.state.hits("/always-401/"), 2);
    // refresh itself succeeded, so the session stays
    assert_eq!(tokens.access_token().as_deref(), Some("access-2"));
    assert!(navigator.visits().is_empty());
}

#[tokio::test]
async fn test_multipart_body_is_resent_after_refresh() {
    let backend = MockBackend::spawn().await;
    let tokens = Arc::new(MemoryTokenStore::new());
    tokens.set_tokens("expired-access", REFRESH);
    let (client, _navigator) = client_for(&backend, tokens.clone());

    let fee = client
        .upload_fee_proof(
            7,
            FilePart::new("receipt.pdf", b"%PDF-1.4 receipt".to_vec()).with_mime("application/pdf"),
        )
        .await
        .unwrap();
    assert_eq!(fee.id, 7);
    assert_eq!(fee.payment_proof.as_deref(), Some("/media/proofs/receipt.pdf"));

    assert_eq!(backend.state.refresh_calls(), 1);
    assert_eq!(
        backend.state.uploads(),
        vec![("payment_proof".to_string(), "receipt.pdf".to_string(), 16)]
    );
}

#[tokio::test]
async fn test_concurrent_requests_refresh_independently() {
    let backend = MockBackend::spawn().await;
    let tokens = Arc::new(MemoryTokenStore::new());
    tokens.set_tokens("expired-access", REFRESH);
    let (client, _navigator) = client_for(&backend, tokens.clone());

    let students = client.students();
    let query = ListQuery::new();
    let (a, b) = tokio::join!(client.me(), students.list(&query));
    assert!(a.is_ok());
    assert!(b.is_ok());
    assert_eq!(backend.state.refresh_calls(), 2);
}

#[tokio::test]
async fn test_logout_clears_tokens_and_goes_home() {
    let backend = MockBackend::spawn().await;
    let tokens = Arc::new(MemoryTokenStore::new());
    let (client, navigator) = client_for(&backend, tokens.clone());

    client.login(USERNAME, PASSWORD).await.unwrap();
    client.logout();

    assert!(!client.is_authenticated());
    assert!(tokens.refresh_token().is_none());
    assert_eq!(navigator.visits(), vec!["/".to_string()]);
}
