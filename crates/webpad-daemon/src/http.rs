use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use webpad_core::{ActivityEntry, BufferPatch};

use crate::service::PlaygroundService;

#[derive(Clone)]
pub struct AppState {
    svc: Arc<PlaygroundService>,
}

pub fn router(svc: Arc<PlaygroundService>) -> Router {
    let state = AppState { svc };
    Router::new()
        .route("/healthz", get(healthz))
        .route("/preview", get(preview))
        .route("/standalone", get(standalone))
        .route("/v1/buffers", get(get_buffers).post(update_buffers))
        .route("/v1/render", post(render))
        .route("/v1/project/save", post(save_project))
        .route("/v1/project/export", get(export_project))
        .route("/v1/project/import", post(import_project))
        .route("/v1/activity", get(activity))
        .route("/v1/activity/clear", post(clear_activity))
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

/// The embedded preview surface: always serves the latest published
/// document. A new render replaces it in place; the client iframe just
/// reloads this URL.
async fn preview(State(st): State<AppState>) -> Html<String> {
    Html(st.svc.preview_document())
}

/// The standalone view: composes fresh from the current buffers on every
/// request, for opening in an independent top-level tab.
async fn standalone(State(st): State<AppState>) -> Html<String> {
    Html(st.svc.standalone_document())
}

#[derive(Debug, Serialize)]
struct BuffersResponse {
    html: String,
    css: String,
    js: String,
    test: String,
    assignment: String,
}

async fn get_buffers(State(st): State<AppState>) -> Json<BuffersResponse> {
    let b = st.svc.buffers();
    Json(BuffersResponse {
        html: b.html,
        css: b.css,
        js: b.js,
        test: b.test,
        assignment: b.assignment,
    })
}

#[derive(Debug, Serialize)]
struct OkResponse {
    ok: bool,
}

async fn update_buffers(
    State(st): State<AppState>,
    Json(patch): Json<BufferPatch>,
) -> Json<OkResponse> {
    st.svc.update_buffers(patch);
    Json(OkResponse { ok: true })
}

#[derive(Debug, Deserialize)]
struct RenderRequest {
    #[serde(default)]
    include_tests: bool,
}

async fn render(
    State(st): State<AppState>,
    Json(req): Json<RenderRequest>,
) -> Json<OkResponse> {
    st.svc.render(req.include_tests);
    Json(OkResponse { ok: true })
}

async fn save_project(State(st): State<AppState>) -> Json<OkResponse> {
    st.svc.save();
    Json(OkResponse { ok: true })
}

async fn export_project(State(st): State<AppState>) -> Result<Response, AppError> {
    let (filename, bytes) = st.svc.export()?;
    let headers = [
        (header::CONTENT_TYPE, "application/json".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        ),
    ];
    Ok((headers, bytes).into_response())
}

/// Import an uploaded project file. Reading the body is the one await
/// point; the outcome (including a parse failure) lands in the activity
/// feed, so the response only says whether a restore happened.
async fn import_project(State(st): State<AppState>, body: Bytes) -> Json<OkResponse> {
    let ok = st.svc.import(&body);
    Json(OkResponse { ok })
}

async fn activity(State(st): State<AppState>) -> Json<Vec<ActivityEntry>> {
    Json(st.svc.activity())
}

async fn clear_activity(State(st): State<AppState>) -> Json<OkResponse> {
    st.svc.clear_activity();
    Json(OkResponse { ok: true })
}

#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl<E: Into<anyhow::Error>> From<E> for AppError {
    fn from(value: E) -> Self {
        Self(value.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "request failed");
        let body = Json(serde_json::json!({
            "error": self.0.to_string()
        }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
