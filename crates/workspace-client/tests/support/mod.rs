//! In-memory fake of the workspace objects API, served by axum on an
//! ephemeral port.
//!
//! The fake keeps a flat map of absolute paths to objects, mirrors the
//! service's error codes, and records every request so tests can assert on
//! what went over the wire.

#![allow(dead_code)]

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    Json, Router,
    extract::{Query, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use workspace_client::{ApiClient, ClientConfig, REQUEST_ID_HEADER};
use workspace_core::{
    ExportRequest, ListResponse, NotebookContent, NotebookDeleteRequest, NotebookImportRequest,
    PathRequest, WorkspaceObjectStatus, parent_dir,
};

// ============================================================================
// Errors
// ============================================================================

/// Error responses in the service's `{error_code, message}` shape.
#[derive(Debug)]
pub enum FakeError {
    NotFound(String),
    AlreadyExists(String),
    NotEmpty(String),
    Internal(String),
}

impl IntoResponse for FakeError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            Self::NotFound(path) => (
                StatusCode::NOT_FOUND,
                "RESOURCE_DOES_NOT_EXIST",
                format!("Path ({}) doesn't exist.", path),
            ),
            Self::AlreadyExists(path) => (
                StatusCode::BAD_REQUEST,
                "RESOURCE_ALREADY_EXISTS",
                format!("Path ({}) already exists.", path),
            ),
            Self::NotEmpty(path) => (
                StatusCode::BAD_REQUEST,
                "DIRECTORY_NOT_EMPTY",
                format!("Folder ({}) is not empty.", path),
            ),
            Self::Internal(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                message,
            ),
        };

        (status, Json(json!({"error_code": code, "message": message}))).into_response()
    }
}

type FakeResult<T> = Result<T, FakeError>;

// ============================================================================
// State
// ============================================================================

/// One request as seen by the fake server.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub request_id: Option<String>,
    pub authorization: Option<String>,
}

#[derive(Debug, Clone)]
struct Stored {
    status: WorkspaceObjectStatus,
    content: Option<String>,
}

/// Shared fake workspace state.
#[derive(Debug, Default)]
pub struct FakeWorkspace {
    objects: Mutex<BTreeMap<String, Stored>>,
    failing_lists: Mutex<HashSet<String>>,
    raw_listings: Mutex<HashMap<String, Value>>,
    requests: Mutex<Vec<RecordedRequest>>,
    list_calls: Mutex<Vec<String>>,
    mkdirs_delay: Mutex<Duration>,
    mkdirs_in_flight: AtomicUsize,
    mkdirs_max_in_flight: AtomicUsize,
    mkdirs_calls: AtomicUsize,
    next_id: AtomicUsize,
}

impl FakeWorkspace {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Seed a folder (parents are not created).
    pub fn add_dir(&self, path: &str) {
        self.insert(WorkspaceObjectStatus::directory(path), None);
    }

    /// Seed a notebook with base64 content.
    pub fn add_notebook(&self, path: &str, language: workspace_core::Language, content: &str) {
        self.insert(
            WorkspaceObjectStatus::notebook(path, language),
            Some(content.to_string()),
        );
    }

    /// Seed an object of any kind.
    pub fn add_object(&self, status: WorkspaceObjectStatus) {
        self.insert(status, None);
    }

    /// Make `list` on `path` fail with a 500.
    pub fn fail_list(&self, path: &str) {
        self.failing_lists.lock().unwrap().insert(path.to_string());
    }

    /// Answer `list` on `path` with `body` verbatim, bypassing the typed store.
    ///
    /// Lets tests serve object types the client does not model.
    pub fn set_raw_listing(&self, path: &str, body: Value) {
        self.raw_listings
            .lock()
            .unwrap()
            .insert(path.to_string(), body);
    }

    /// Hold each mkdirs request open for `delay` before answering.
    pub fn set_mkdirs_delay(&self, delay: Duration) {
        *self.mkdirs_delay.lock().unwrap() = delay;
    }

    pub fn exists(&self, path: &str) -> bool {
        path == "/" || self.objects.lock().unwrap().contains_key(path)
    }

    pub fn get(&self, path: &str) -> Option<WorkspaceObjectStatus> {
        self.objects
            .lock()
            .unwrap()
            .get(path)
            .map(|stored| stored.status.clone())
    }

    pub fn content(&self, path: &str) -> Option<String> {
        self.objects
            .lock()
            .unwrap()
            .get(path)
            .and_then(|stored| stored.content.clone())
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn list_calls(&self) -> Vec<String> {
        self.list_calls.lock().unwrap().clone()
    }

    pub fn mkdirs_calls(&self) -> usize {
        self.mkdirs_calls.load(Ordering::SeqCst)
    }

    pub fn mkdirs_max_in_flight(&self) -> usize {
        self.mkdirs_max_in_flight.load(Ordering::SeqCst)
    }

    fn insert(&self, mut status: WorkspaceObjectStatus, content: Option<String>) {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) as i64 + 1;
        status.object_id.get_or_insert(id);
        self.objects
            .lock()
            .unwrap()
            .insert(status.path.clone(), Stored { status, content });
    }

    fn is_dir(&self, path: &str) -> bool {
        path == "/"
            || self
                .objects
                .lock()
                .unwrap()
                .get(path)
                .is_some_and(|stored| stored.status.is_directory())
    }

    fn children(&self, path: &str) -> Vec<WorkspaceObjectStatus> {
        self.objects
            .lock()
            .unwrap()
            .values()
            .filter(|stored| parent_dir(&stored.status.path).unwrap_or("/") == path)
            .map(|stored| stored.status.clone())
            .collect()
    }
}

// ============================================================================
// Handlers
// ============================================================================

async fn import(
    State(ws): State<Arc<FakeWorkspace>>,
    Json(req): Json<NotebookImportRequest>,
) -> FakeResult<Json<Value>> {
    let parent = parent_dir(&req.path).unwrap_or("/");
    if !ws.is_dir(parent) {
        return Err(FakeError::NotFound(parent.to_string()));
    }
    if ws.exists(&req.path) && !req.overwrite {
        return Err(FakeError::AlreadyExists(req.path));
    }

    let status = WorkspaceObjectStatus {
        object_type: workspace_core::ObjectType::Notebook,
        path: req.path,
        language: req.language,
        object_id: None,
        created_at: Some(1_700_000_000_000),
        modified_at: Some(1_700_000_000_000),
    };
    ws.insert(status, Some(req.content));

    Ok(Json(json!({})))
}

async fn get_status(
    State(ws): State<Arc<FakeWorkspace>>,
    Query(req): Query<PathRequest>,
) -> FakeResult<Json<WorkspaceObjectStatus>> {
    if req.path == "/" {
        return Ok(Json(WorkspaceObjectStatus::directory("/")));
    }
    ws.get(&req.path)
        .map(Json)
        .ok_or(FakeError::NotFound(req.path))
}

async fn export(
    State(ws): State<Arc<FakeWorkspace>>,
    Query(req): Query<ExportRequest>,
) -> FakeResult<Json<NotebookContent>> {
    let content = ws
        .content(&req.path)
        .ok_or_else(|| FakeError::NotFound(req.path.clone()))?;
    let file_type = req.format.map(|f| f.as_str().to_ascii_lowercase());

    Ok(Json(NotebookContent { content, file_type }))
}

async fn mkdirs(
    State(ws): State<Arc<FakeWorkspace>>,
    Json(req): Json<PathRequest>,
) -> FakeResult<Json<Value>> {
    ws.mkdirs_calls.fetch_add(1, Ordering::SeqCst);
    let now = ws.mkdirs_in_flight.fetch_add(1, Ordering::SeqCst) + 1;
    ws.mkdirs_max_in_flight.fetch_max(now, Ordering::SeqCst);

    let delay = *ws.mkdirs_delay.lock().unwrap();
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    let result = create_dirs(&ws, &req.path);
    ws.mkdirs_in_flight.fetch_sub(1, Ordering::SeqCst);
    result.map(|()| Json(json!({})))
}

fn create_dirs(ws: &FakeWorkspace, path: &str) -> FakeResult<()> {
    let mut current = String::new();
    for segment in path.split('/').filter(|s| !s.is_empty()) {
        current.push('/');
        current.push_str(segment);
        match ws.get(&current) {
            Some(status) if !status.is_directory() => {
                return Err(FakeError::AlreadyExists(current));
            }
            Some(_) => {}
            None => ws.add_dir(&current),
        }
    }
    Ok(())
}

async fn list(
    State(ws): State<Arc<FakeWorkspace>>,
    Query(req): Query<PathRequest>,
) -> FakeResult<Response> {
    ws.list_calls.lock().unwrap().push(req.path.clone());

    if ws.failing_lists.lock().unwrap().contains(&req.path) {
        return Err(FakeError::Internal(format!("listing {} failed", req.path)));
    }
    if let Some(body) = ws.raw_listings.lock().unwrap().get(&req.path) {
        return Ok(Json(body.clone()).into_response());
    }
    if !ws.is_dir(&req.path) {
        return Err(FakeError::NotFound(req.path));
    }

    let objects = ws.children(&req.path);
    // The service drops the field entirely for an empty folder.
    if objects.is_empty() {
        return Ok(Json(json!({})).into_response());
    }
    Ok(Json(ListResponse { objects }).into_response())
}

async fn delete(
    State(ws): State<Arc<FakeWorkspace>>,
    Json(req): Json<NotebookDeleteRequest>,
) -> FakeResult<Json<Value>> {
    if !ws.exists(&req.path) {
        return Err(FakeError::NotFound(req.path));
    }

    let prefix = format!("{}/", req.path.trim_end_matches('/'));
    let mut objects = ws.objects.lock().unwrap();
    let has_children = objects.keys().any(|k| k.starts_with(&prefix));
    if has_children && !req.recursive {
        return Err(FakeError::NotEmpty(req.path));
    }

    objects.retain(|k, _| k != &req.path && !k.starts_with(&prefix));
    Ok(Json(json!({})))
}

async fn record_request(
    State(ws): State<Arc<FakeWorkspace>>,
    request: Request,
    next: Next,
) -> Response {
    let recorded = {
        let header = |name: &str| {
            request
                .headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };

        RecordedRequest {
            method: request.method().to_string(),
            path: request.uri().path().to_string(),
            query: request.uri().query().map(str::to_string),
            request_id: header(REQUEST_ID_HEADER),
            authorization: header("authorization"),
        }
    };
    ws.requests.lock().unwrap().push(recorded);

    next.run(request).await
}

fn router(ws: Arc<FakeWorkspace>) -> Router {
    Router::new()
        .route("/api/2.0/workspace/import", post(import))
        .route("/api/2.0/workspace/get-status", get(get_status))
        .route("/api/2.0/workspace/export", get(export))
        .route("/api/2.0/workspace/mkdirs", post(mkdirs))
        .route("/api/2.0/workspace/list", get(list))
        .route("/api/2.0/workspace/delete", post(delete))
        .layer(middleware::from_fn_with_state(ws.clone(), record_request))
        .with_state(ws)
}

// ============================================================================
// Harness
// ============================================================================

/// A running fake server and a client pointed at it.
pub struct TestServer {
    pub base_url: String,
    pub workspace: Arc<FakeWorkspace>,
    pub client: ApiClient,
}

/// Start a fake server for `workspace` on an ephemeral port.
pub async fn spawn(workspace: Arc<FakeWorkspace>) -> TestServer {
    spawn_with(workspace, |config| config).await
}

/// Start a fake server and customize the client configuration.
pub async fn spawn_with<F>(workspace: Arc<FakeWorkspace>, configure: F) -> TestServer
where
    F: FnOnce(ClientConfig) -> ClientConfig,
{
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local address");
    let app = router(workspace.clone());

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Fake server failed");
    });

    let base_url = format!("http://{}", addr);
    let config = configure(ClientConfig::new(&base_url));
    let client = ApiClient::new(&config).expect("Failed to build client");

    TestServer {
        base_url,
        workspace,
        client,
    }
}
