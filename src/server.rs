//! HTTP routes for the single-page UI.

use crate::controller::{run_generation, Controller, View};
use crate::display::{copy_to_clipboard, Clipboard};
use crate::error::{error_response, UploadError};
use crate::preview::{PreviewId, PreviewStore};
use crate::service::PromptGenerator;
use crate::style::Style;
use crate::ui;
use crate::upload::UploadedFile;
use axum::{
    extract::{DefaultBodyLimit, Multipart, Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post, put},
    Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Shared state behind every route.
#[derive(Clone)]
pub struct AppState {
    controller: Arc<Mutex<Controller>>,
    generator: Arc<dyn PromptGenerator>,
    clipboard: Arc<dyn Clipboard>,
    previews: PreviewStore,
}

impl AppState {
    pub fn new(generator: Arc<dyn PromptGenerator>, clipboard: Arc<dyn Clipboard>) -> Self {
        let previews = PreviewStore::new();
        Self::with_controller(Controller::new(previews.clone()), previews, generator, clipboard)
    }

    /// Uses a prepared controller; `previews` must be the store it was built with.
    pub fn with_controller(
        controller: Controller,
        previews: PreviewStore,
        generator: Arc<dyn PromptGenerator>,
        clipboard: Arc<dyn Clipboard>,
    ) -> Self {
        Self {
            controller: Arc::new(Mutex::new(controller)),
            generator,
            clipboard,
            previews,
        }
    }

    async fn view(&self) -> View {
        self.controller
            .lock()
            .await
            .view(self.generator.is_configured())
    }
}

#[derive(Debug, Deserialize)]
struct StyleRequest {
    style: Style,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/state", get(get_state))
        .route("/api/image", post(upload_image))
        .route("/api/style", put(set_style))
        .route("/api/generate", post(generate))
        .route("/api/copy", post(copy))
        .route("/preview/:id", get(preview))
        .layer(DefaultBodyLimit::disable())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(ui::INDEX_HTML)
}

async fn get_state(State(state): State<AppState>) -> Json<View> {
    Json(state.view().await)
}

async fn upload_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<View>, UploadError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("image") {
            continue;
        }

        let file_name = field.file_name().unwrap_or("upload").to_string();
        let content_type = field.content_type().unwrap_or_default().to_string();
        let bytes = field.bytes().await?;

        state
            .controller
            .lock()
            .await
            .upload(UploadedFile::new(file_name, content_type, bytes.to_vec()))?;

        return Ok(Json(state.view().await));
    }

    Err(UploadError::MissingFile)
}

async fn set_style(
    State(state): State<AppState>,
    Json(request): Json<StyleRequest>,
) -> Json<View> {
    state.controller.lock().await.select_style(request.style);
    Json(state.view().await)
}

async fn generate(State(state): State<AppState>) -> Json<View> {
    run_generation(&state.controller, state.generator.as_ref()).await;
    Json(state.view().await)
}

async fn copy(State(state): State<AppState>) -> Json<View> {
    let target = state.controller.lock().await.copy_target();
    if let Some((text, indicator)) = target {
        copy_to_clipboard(text, Arc::clone(&state.clipboard), &indicator).await;
    }
    Json(state.view().await)
}

async fn preview(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let entry = PreviewId::parse(&id).and_then(|id| state.previews.get(id));
    match entry {
        Some(entry) => (
            [
                (header::CONTENT_TYPE, entry.mime_type),
                (header::CACHE_CONTROL, "no-store".to_string()),
            ],
            entry.bytes.to_vec(),
        )
            .into_response(),
        None => error_response(StatusCode::NOT_FOUND, "preview not found"),
    }
}
