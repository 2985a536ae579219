use axum::extract::State;
use axum::response::Response;
use axum::Json;

use super::AppState;
use crate::models::Session;
use crate::utils::error::AppError;
use crate::utils::response::{empty_success, success};

pub async fn get_session(State(state): State<AppState>) -> Response {
    let market = state.marketplace.lock().await;
    success(market.current_user(), "Current session")
}

pub async fn set_session(
    State(state): State<AppState>,
    Json(session): Json<Session>,
) -> Result<Response, AppError> {
    tracing::info!(user_id = %session.id, role = ?session.role, "Session started");
    let stored = session.clone();
    state
        .mutate(move |m| m.set_current_user(Some(stored)))
        .await?;
    Ok(success(session, "Session started"))
}

pub async fn clear_session(State(state): State<AppState>) -> Result<Response, AppError> {
    state.mutate(|m| m.set_current_user(None)).await?;
    tracing::info!("Session cleared");
    Ok(empty_success("Session cleared"))
}
