// edupro-client/tests/common/mod.rs
// In-process mock of the EduPro backend for integration tests
#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::{Multipart, Path, State},
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use edupro_client::{ApiClient, ClientConfig, MemoryTokenStore, Navigator};
use serde::Deserialize;
use serde_json::{Value, json};

pub const USERNAME: &str = "secretaria";
pub const PASSWORD: &str = "s3cret";
pub const FIRST_ACCESS: &str = "access-1";
pub const REFRESH: &str = "refresh-1";

/// Backend state observable from tests
#[derive(Default)]
pub struct MockState {
    valid_access: Mutex<HashSet<String>>,
    pub refresh_calls: AtomicUsize,
    pub garbage_refresh: AtomicBool,
    pub rotate_refresh: AtomicBool,
    hits: Mutex<HashMap<String, usize>>,
    auth_headers: Mutex<Vec<(String, Option<String>)>>,
    uploads: Mutex<Vec<(String, String, usize)>>,
}

impl MockState {
    pub fn hits(&self, path: &str) -> usize {
        self.hits.lock().unwrap().get(path).copied().unwrap_or(0)
    }

    /// Authorization headers seen on `path`, in order
    pub fn auth_headers(&self, path: &str) -> Vec<Option<String>> {
        self.auth_headers
            .lock()
            .unwrap()
            .iter()
            .filter(|(p, _)| p == path)
            .map(|(_, h)| h.clone())
            .collect()
    }

    /// (field name, file name, size) of received multipart files
    pub fn uploads(&self) -> Vec<(String, String, usize)> {
        self.uploads.lock().unwrap().clone()
    }

    pub fn refresh_calls(&self) -> usize {
        self.refresh_calls.load(Ordering::SeqCst)
    }

    fn record(&self, path: &str, headers: &HeaderMap) {
        *self.hits.lock().unwrap().entry(path.to_string()).or_default() += 1;
        let header = headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        self.auth_headers
            .lock()
            .unwrap()
            .push((path.to_string(), header));
    }

    /// Record the hit and check the bearer token
    fn authorize(&self, path: &str, headers: &HeaderMap) -> Result<(), Response> {
        self.record(path, headers);
        let token = headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "));
        match token {
            Some(t) if self.valid_access.lock().unwrap().contains(t) => Ok(()),
            _ => Err(unauthorized()),
        }
    }
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({
            "detail": "Given token not valid for any token type",
            "code": "token_not_valid"
        })),
    )
        .into_response()
}

pub fn user_json() -> Value {
    json!({
        "id": 1,
        "username": USERNAME,
        "email": "secretaria@escola.example",
        "first_name": "Maria",
        "last_name": "Lima",
        "role": "admin"
    })
}

fn fee_json(id: i64, proof: Option<String>) -> Value {
    json!({
        "id": id,
        "student": 4,
        "reference_month": "2024-05-01",
        "amount": "450.00",
        "due_date": "2024-05-10",
        "status": "pending",
        "payment_proof": proof
    })
}

#[derive(Deserialize)]
struct LoginBody {
    username: String,
    password: String,
}

async fn login(State(state): State<Arc<MockState>>, headers: HeaderMap, Json(req): Json<LoginBody>) -> Response {
    state.record("/auth/login/", &headers);
    if req.username == USERNAME && req.password == PASSWORD {
        Json(json!({"access": FIRST_ACCESS, "refresh": REFRESH, "user": user_json()})).into_response()
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({"detail": "No active account found with the given credentials"})),
        )
            .into_response()
    }
}

async fn refresh(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    state.record("/auth/refresh/", &headers);
    let n = state.refresh_calls.fetch_add(1, Ordering::SeqCst);

    if body.get("refresh").and_then(Value::as_str) != Some(REFRESH) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"detail": "Token is invalid or expired", "code": "token_not_valid"})),
        )
            .into_response();
    }
    if state.garbage_refresh.load(Ordering::SeqCst) {
        return (StatusCode::OK, "definitely not json").into_response();
    }

    let access = format!("access-{}", n + 2);
    state.valid_access.lock().unwrap().insert(access.clone());
    if state.rotate_refresh.load(Ordering::SeqCst) {
        // rotated token is not accepted by this mock; tests only inspect storage
        Json(json!({"access": access, "refresh": format!("refresh-rotated-{}", n + 2)})).into_response()
    } else {
        Json(json!({"access": access})).into_response()
    }
}

async fn me(State(state): State<Arc<MockState>>, headers: HeaderMap) -> Response {
    if let Err(r) = state.authorize("/auth/me/", &headers) {
        return r;
    }
    Json(user_json()).into_response()
}

async fn list_students(State(state): State<Arc<MockState>>, headers: HeaderMap) -> Response {
    if let Err(r) = state.authorize("/academic/students/", &headers) {
        return r;
    }
    Json(json!({
        "count": 2,
        "next": null,
        "previous": null,
        "total_pages": 1,
        "current_page": 1,
        "results": [
            {"id": 1, "name": "Ana Souza", "classroom": 3},
            {"id": 2, "name": "Bruno Dias", "classroom": 3}
        ]
    }))
    .into_response()
}

async fn create_student(State(state): State<Arc<MockState>>, headers: HeaderMap) -> Response {
    if let Err(r) = state.authorize("/academic/students/", &headers) {
        return r;
    }
    (
        StatusCode::BAD_REQUEST,
        Json(json!({
            "name": ["This field is required."],
            "email": ["Enter a valid email address.", "Ensure this field has no more than 254 characters."]
        })),
    )
        .into_response()
}

async fn always_unauthorized(State(state): State<Arc<MockState>>, headers: HeaderMap) -> Response {
    state.record("/always-401/", &headers);
    unauthorized()
}

async fn empty(State(state): State<Arc<MockState>>, headers: HeaderMap) -> Response {
    if let Err(r) = state.authorize("/empty/", &headers) {
        return r;
    }
    StatusCode::NO_CONTENT.into_response()
}

async fn boom(State(state): State<Arc<MockState>>, headers: HeaderMap) -> Response {
    state.record("/boom/", &headers);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "<html><body>Server Error (500)</body></html>",
    )
        .into_response()
}

async fn forbidden(State(state): State<Arc<MockState>>, headers: HeaderMap) -> Response {
    state.record("/forbidden/", &headers);
    (
        StatusCode::FORBIDDEN,
        Json(json!({"detail": "You do not have permission to perform this action."})),
    )
        .into_response()
}

async fn conflict(State(state): State<Arc<MockState>>, headers: HeaderMap) -> Response {
    state.record("/conflict/", &headers);
    (
        StatusCode::CONFLICT,
        Json(json!({"message": "Fee already paid"})),
    )
        .into_response()
}

async fn upload_proof(
    State(state): State<Arc<MockState>>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Response {
    let mut received = Vec::new();
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().unwrap_or_default().to_string();
        let size = field.bytes().await.map(|b| b.len()).unwrap_or(0);
        received.push((name, file_name, size));
    }

    let path = format!("/financial/fees/{id}/upload-proof/");
    if let Err(r) = state.authorize(&path, &headers) {
        return r;
    }
    let proof = received
        .last()
        .map(|(_, file_name, _)| format!("/media/proofs/{file_name}"));
    state.uploads.lock().unwrap().extend(received);
    Json(fee_json(id, proof)).into_response()
}

fn router(state: Arc<MockState>) -> Router {
    Router::new()
        .route("/auth/login/", post(login))
        .route("/auth/refresh/", post(refresh))
        .route("/auth/me/", get(me))
        .route("/academic/students/", get(list_students).post(create_student))
        .route("/always-401/", get(always_unauthorized))
        .route("/empty/", get(empty))
        .route("/boom/", get(boom))
        .route("/forbidden/", get(forbidden))
        .route("/conflict/", get(conflict))
        .route("/financial/fees/{id}/upload-proof/", post(upload_proof))
        .with_state(state)
}

/// Running mock backend
pub struct MockBackend {
    pub base_url: String,
    pub state: Arc<MockState>,
}

impl MockBackend {
    pub async fn spawn() -> Self {
        let state = Arc::new(MockState::default());
        state
            .valid_access
            .lock()
            .unwrap()
            .insert(FIRST_ACCESS.to_string());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = router(state.clone());
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            state,
        }
    }

    pub fn config(&self) -> ClientConfig {
        ClientConfig::new(&self.base_url)
    }
}

/// Navigator recording every redirect
#[derive(Default)]
pub struct RecordingNavigator {
    visits: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn visits(&self) -> Vec<String> {
        self.visits.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.visits.lock().unwrap().push(path.to_string());
    }
}

/// Client wired to the mock with an inspectable store and navigator
pub fn client_for(
    backend: &MockBackend,
    tokens: Arc<MemoryTokenStore>,
) -> (ApiClient, Arc<RecordingNavigator>) {
    let navigator = Arc::new(RecordingNavigator::default());
    let client = backend
        .config()
        .build_client()
        .unwrap()
        .with_token_store(tokens)
        .with_navigator(navigator.clone());
    (client, navigator)
}
