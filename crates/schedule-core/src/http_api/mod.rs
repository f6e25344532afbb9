use std::{net::SocketAddr, sync::Arc};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use parking_lot::RwLock;
use serde::Serialize;
use serde_json::{Value, json};
use tracing::info;

use crate::{
    DaySchedule, Entry, Facets, ProcessedSchedule, ProcessingConfig, ValidationError,
    process_schedule_with,
};

#[derive(Clone)]
pub struct AppState {
    schedule: Arc<RwLock<ProcessedSchedule>>,
    config: Arc<ProcessingConfig>,
}

impl AppState {
    pub fn new(schedule: ProcessedSchedule, config: ProcessingConfig) -> Self {
        Self {
            schedule: Arc::new(RwLock::new(schedule)),
            config: Arc::new(config),
        }
    }

    fn schedule(&self) -> Arc<RwLock<ProcessedSchedule>> {
        self.schedule.clone()
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: String,
}

#[derive(Debug)]
enum ApiError {
    NotFound(String),
    Invalid(String),
}

impl ApiError {
    fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    fn invalid(message: impl Into<String>) -> Self {
        ApiError::Invalid(message.into())
    }
}

impl From<ValidationError> for ApiError {
    fn from(value: ValidationError) -> Self {
        ApiError::Invalid(value.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(message) => {
                let body = Json(ErrorBody {
                    error: "not_found",
                    message,
                });
                (StatusCode::NOT_FOUND, body).into_response()
            }
            ApiError::Invalid(message) => {
                let body = Json(ErrorBody {
                    error: "invalid_request",
                    message,
                });
                (StatusCode::BAD_REQUEST, body).into_response()
            }
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/schedule", get(get_schedule).put(replace_schedule))
        .route("/facets", get(get_facets))
        .route("/days/:date", get(get_day))
        .route("/days/:date/repack", post(repack_day))
        .with_state(state)
}

pub async fn serve(
    addr: SocketAddr,
    schedule: ProcessedSchedule,
    config: ProcessingConfig,
) -> std::io::Result<()> {
    let state = AppState::new(schedule, config);
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

async fn get_schedule(State(state): State<AppState>) -> Json<ProcessedSchedule> {
    let schedule = state.schedule();
    let current = {
        let guard = schedule.read();
        guard.clone()
    };
    Json(current)
}

/// Re-ingests a full batch of raw records. A rejected batch leaves the
/// current schedule in place.
async fn replace_schedule(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<ProcessedSchedule>, ApiError> {
    let records = payload
        .as_array()
        .ok_or_else(|| ApiError::invalid("expected a JSON array of schedule records"))?;
    let processed = process_schedule_with(records, &state.config)?;
    info!(
        days = processed.days.len(),
        entries = processed.entry_count(),
        "schedule replaced"
    );
    {
        let schedule = state.schedule();
        let mut guard = schedule.write();
        *guard = processed.clone();
    }
    Ok(Json(processed))
}

async fn get_facets(State(state): State<AppState>) -> Json<Facets> {
    let schedule = state.schedule();
    let facets = {
        let guard = schedule.read();
        guard.facets()
    };
    Json(facets)
}

async fn get_day(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Json<DaySchedule>, ApiError> {
    let schedule = state.schedule();
    let day = {
        let guard = schedule.read();
        guard.day(&date).cloned()
    };
    day.map(Json)
        .ok_or_else(|| ApiError::not_found(format!("no schedule for {date}")))
}

/// Lanes recomputed from scratch for the stored day. The stored schedule is
/// not modified.
async fn repack_day(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Json<Vec<Entry>>, ApiError> {
    let schedule = state.schedule();
    let entries = {
        let guard = schedule.read();
        guard.day(&date).map(DaySchedule::repacked_entries)
    };
    entries
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("no schedule for {date}")))
}
