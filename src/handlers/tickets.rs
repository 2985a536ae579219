use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;
use serde::Deserialize;

use super::AppState;
use crate::models::{NewTicket, TicketStatus};
use crate::utils::error::AppError;
use crate::utils::response::{empty_success, success};

#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub status: TicketStatus,
}

pub async fn list_tickets(State(state): State<AppState>) -> Response {
    let market = state.marketplace.lock().await;
    success(market.tickets(), "Tickets retrieved")
}

pub async fn create_ticket(
    State(state): State<AppState>,
    Json(payload): Json<NewTicket>,
) -> Result<Response, AppError> {
    state.mutate(move |m| m.add_ticket(payload)).await?;
    Ok(empty_success("Ticket issued"))
}

/// Unknown identifiers are accepted and ignored.
pub async fn update_ticket_status(
    State(state): State<AppState>,
    Path(ticket_id): Path<String>,
    Json(payload): Json<StatusUpdate>,
) -> Result<Response, AppError> {
    state
        .mutate(move |m| m.update_ticket_status(&ticket_id, payload.status))
        .await?;
    Ok(empty_success("Ticket status updated"))
}
