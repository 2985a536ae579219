use axum::extract::State;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use super::AppState;
use crate::models::NewSupplier;
use crate::utils::error::AppError;
use crate::utils::response::{created, success};

#[derive(Serialize)]
pub struct CreatedId {
    pub id: String,
}

pub async fn list_suppliers(State(state): State<AppState>) -> Response {
    let market = state.marketplace.lock().await;
    success(market.suppliers(), "Suppliers retrieved")
}

pub async fn create_supplier(
    State(state): State<AppState>,
    Json(payload): Json<NewSupplier>,
) -> Result<Response, AppError> {
    let id = state.mutate(move |m| m.add_supplier(payload)).await?;
    tracing::info!(supplier_id = %id, "Supplier registered");
    Ok(created(CreatedId { id }, "Supplier registered"))
}
