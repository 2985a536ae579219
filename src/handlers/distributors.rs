use axum::extract::State;
use axum::response::Response;
use axum::Json;

use super::suppliers::CreatedId;
use super::AppState;
use crate::models::NewDistributor;
use crate::utils::error::AppError;
use crate::utils::response::{created, success};

pub async fn list_distributors(State(state): State<AppState>) -> Response {
    let market = state.marketplace.lock().await;
    success(market.distributors(), "Distributors retrieved")
}

pub async fn create_distributor(
    State(state): State<AppState>,
    Json(payload): Json<NewDistributor>,
) -> Result<Response, AppError> {
    let id = state.mutate(move |m| m.add_distributor(payload)).await?;
    tracing::info!(distributor_id = %id, "Distributor registered");
    Ok(created(CreatedId { id }, "Distributor registered"))
}
