use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{CreateUserRequest, User};
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::created;

pub const GREETING: &str = "Hello from backend!";

#[derive(Serialize)]
pub struct HelloPayload {
    pub message: &'static str,
}

#[derive(Serialize)]
pub struct HealthPayload {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
    pub database: DatabaseStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseStatus {
    Connected,
    Disconnected,
}

/// GET /api/hello
pub async fn hello() -> Json<HelloPayload> {
    Json(HelloPayload { message: GREETING })
}

/// GET /api/users
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    let users = state.store.list().await.map_err(AppError::ReadFailed)?;
    Ok(Json(users))
}

/// POST /api/users
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(request) = payload?;
    let new_user = request.validate()?;

    let user = state
        .store
        .insert(new_user)
        .await
        .map_err(AppError::WriteFailed)?;

    tracing::info!(id = %user.id, "Created user");
    Ok(created(user))
}

/// GET /api/health
pub async fn health_check(State(state): State<AppState>) -> Response {
    let database = if state.store.ping().await {
        DatabaseStatus::Connected
    } else {
        DatabaseStatus::Disconnected
    };

    let payload = HealthPayload {
        status: "OK",
        timestamp: Utc::now(),
        database,
    };

    Json(payload).into_response()
}
