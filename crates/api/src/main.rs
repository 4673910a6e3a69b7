use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chat::{Advisor, ChatMessage};
use extract::Extractor;
use llm::GeminiClient;
use model::{AppSettings, CasePatch, UseCase};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use store::{CaseStore, SettingsStore};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

/// Briefs shorter than this are rejected before any model call.
const MIN_BRIEF_CHARS: usize = 20;

struct AppState {
    store: CaseStore,
    settings: SettingsStore,
    extractor: Extractor<GeminiClient>,
    advisor: Advisor<GeminiClient>,
    llm: GeminiClient,
}

#[derive(Serialize)]
struct HealthResponse {
    store: String,
    model_credential: bool,
}

#[derive(Deserialize)]
struct ExtractRequest {
    text: String,
}

#[derive(Deserialize)]
struct ChatRequest {
    message: String,
    #[serde(default)]
    history: Vec<ChatMessage>,
}

#[derive(Serialize)]
struct ChatResponse {
    reply: String,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let data_dir = PathBuf::from(
        std::env::var("BIZCASE_DATA_DIR").unwrap_or_else(|_| "data".to_string()),
    );

    // One model client, cloned into both components
    let client = GeminiClient::from_env();
    if !client.has_credential() {
        tracing::warn!(
            "GEMINI_API_KEY is not set; extraction will error and chat will apologize"
        );
    }

    let state = Arc::new(AppState {
        store: CaseStore::new(store::case_file(&data_dir)),
        settings: SettingsStore::new(store::settings_file(&data_dir)),
        extractor: Extractor::new(client.clone()),
        advisor: Advisor::new(client.clone()),
        llm: client,
    });

    let app = Router::new()
        .route("/health", get(health_check))
        .route("/cases", get(list_cases).post(create_case))
        .route("/cases/extract", post(create_case_from_text))
        .route(
            "/cases/:id",
            get(get_case).patch(update_case).delete(delete_case),
        )
        .route("/cases/:id/chat", post(chat_with_case))
        .route("/settings", get(get_settings).put(put_settings))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000")
        .await
        .expect("failed to bind 0.0.0.0:3000");

    tracing::info!("Server listening on http://localhost:3000");

    axum::serve(listener, app).await.expect("server failed");
}

fn internal(err: anyhow::Error) -> StatusCode {
    tracing::error!(error = %err, "request failed");
    StatusCode::INTERNAL_SERVER_ERROR
}

async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let store_status = match state.store.list().await {
        Ok(cases) => format!("ok ({} records)", cases.len()),
        Err(err) => format!("error: {}", err),
    };

    Json(HealthResponse {
        store: store_status,
        model_credential: state.llm.has_credential(),
    })
}

/// Extraction entry point: validates brief length, extracts a draft with
/// the configured domain taxonomy, stamps and persists the record.
async fn create_case_from_text(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ExtractRequest>,
) -> Result<Json<UseCase>, StatusCode> {
    if req.text.trim().chars().count() < MIN_BRIEF_CHARS {
        return Err(StatusCode::BAD_REQUEST);
    }

    let settings = state.settings.get().await.map_err(internal)?;

    let draft = state
        .extractor
        .extract(&req.text, &settings.domains)
        .await
        .map_err(internal)?;

    let case = UseCase::from_draft(draft);
    state.store.create(case.clone()).await.map_err(internal)?;

    Ok(Json(case))
}

/// Manual-entry path: create an empty skeleton record without calling the
/// model.
async fn create_case(
    State(state): State<Arc<AppState>>,
) -> Result<Json<UseCase>, StatusCode> {
    let case = UseCase::skeleton();
    state.store.create(case.clone()).await.map_err(internal)?;
    Ok(Json(case))
}

async fn list_cases(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<UseCase>>, StatusCode> {
    let cases = state.store.list().await.map_err(internal)?;
    Ok(Json(cases))
}

async fn get_case(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<UseCase>, StatusCode> {
    let case = state
        .store
        .get(&id)
        .await
        .map_err(internal)?
        .ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(case))
}

async fn update_case(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(patch): Json<CasePatch>,
) -> Result<Json<UseCase>, StatusCode> {
    let updated = state
        .store
        .update(&id, patch)
        .await
        .map_err(internal)?
        .ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(updated))
}

async fn delete_case(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, StatusCode> {
    if state.store.delete(&id).await.map_err(internal)? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(StatusCode::NOT_FOUND)
    }
}

async fn chat_with_case(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, StatusCode> {
    let case = state
        .store
        .get(&id)
        .await
        .map_err(internal)?
        .ok_or(StatusCode::NOT_FOUND)?;

    let reply = state.advisor.respond(&req.message, &req.history, &case).await;
    Ok(Json(ChatResponse { reply }))
}

async fn get_settings(
    State(state): State<Arc<AppState>>,
) -> Result<Json<AppSettings>, StatusCode> {
    let settings = state.settings.get().await.map_err(internal)?;
    Ok(Json(settings))
}

async fn put_settings(
    State(state): State<Arc<AppState>>,
    Json(settings): Json<AppSettings>,
) -> Result<StatusCode, StatusCode> {
    state.settings.set(&settings).await.map_err(internal)?;
    Ok(StatusCode::NO_CONTENT)
}
