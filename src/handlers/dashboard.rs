use std::str::FromStr;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use super::AppState;
use crate::dashboard::{DateRange, DistributorDashboard, SupplierDashboard};
use crate::models::{NewTicket, Role, Session};
use crate::utils::error::AppError;
use crate::utils::response::success;
use crate::views::{render_distributor_dashboard, render_issue_ticket, render_supplier_dashboard};

#[derive(Debug, Default, Deserialize)]
pub struct DateRangeQuery {
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct IssueTicketForm {
    #[serde(default)]
    pub ticket_name: String,
    #[serde(default)]
    pub venue: String,
    #[serde(default)]
    pub event_date: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub quantity: String,
    #[serde(default)]
    pub description: String,
}

/// A malformed bound re-renders the unfiltered dashboard with the error
/// shown above the search form.
pub async fn distributor_page(
    State(state): State<AppState>,
    Query(query): Query<DateRangeQuery>,
) -> Response {
    let (range, error) = match DateRange::parse(&query.start_date, &query.end_date) {
        Ok(range) => (range, None),
        Err(e) => {
            tracing::debug!(error = %e, "Rejected date range");
            (DateRange::default(), Some(e.to_string()))
        }
    };

    let market = state.marketplace.lock().await;
    let dashboard = DistributorDashboard::derive(market.tickets(), range);
    let page = render_distributor_dashboard(
        &dashboard,
        query.start_date.trim(),
        query.end_date.trim(),
        error.as_deref(),
    );

    match error {
        Some(_) => (StatusCode::BAD_REQUEST, Html(page)).into_response(),
        None => Html(page).into_response(),
    }
}

pub async fn supplier_page(State(state): State<AppState>) -> Html<String> {
    let market = state.marketplace.lock().await;
    let dashboard = SupplierDashboard::derive(market.tickets(), market.current_user());
    Html(render_supplier_dashboard(&dashboard))
}

pub async fn distributor_summary(
    State(state): State<AppState>,
    Query(query): Query<DateRangeQuery>,
) -> Result<Response, AppError> {
    let range = DateRange::parse(&query.start_date, &query.end_date)?;
    let market = state.marketplace.lock().await;
    let dashboard = DistributorDashboard::derive(market.tickets(), range);
    Ok(success(dashboard, "Distributor dashboard"))
}

pub async fn supplier_summary(State(state): State<AppState>) -> Response {
    let market = state.marketplace.lock().await;
    let dashboard = SupplierDashboard::derive(market.tickets(), market.current_user());
    success(dashboard, "Supplier dashboard")
}

fn require_supplier(session: Option<&Session>) -> Result<Session, AppError> {
    match session {
        Some(session) if session.role == Role::Supplier => Ok(session.clone()),
        _ => Err(AppError::Forbidden(
            "Sign in as a supplier to issue tickets".to_string(),
        )),
    }
}

pub async fn issue_ticket_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let market = state.marketplace.lock().await;
    let session = require_supplier(market.current_user())?;
    let supplier_name = market
        .supplier(&session.id)
        .map(|s| s.name.as_str())
        .unwrap_or(session.id.as_str());
    Ok(Html(render_issue_ticket(supplier_name, None)))
}

pub async fn issue_ticket_submit(
    State(state): State<AppState>,
    Form(form): Form<IssueTicketForm>,
) -> Result<Response, AppError> {
    let (session, supplier_name) = {
        let market = state.marketplace.lock().await;
        let session = require_supplier(market.current_user())?;
        let supplier_name = market
            .supplier(&session.id)
            .map(|s| s.name.clone())
            .unwrap_or_else(|| session.id.clone());
        (session, supplier_name)
    };

    let ticket = match parse_issue_form(form, &session, &supplier_name) {
        Ok(ticket) => ticket,
        Err(message) => {
            tracing::debug!(supplier_id = %session.id, %message, "Rejected ticket form");
            let page = render_issue_ticket(&supplier_name, Some(&message));
            return Ok((StatusCode::BAD_REQUEST, Html(page)).into_response());
        }
    };

    state.mutate(move |m| m.add_ticket(ticket)).await?;
    Ok(Redirect::to("/supplier/dashboard").into_response())
}

fn parse_issue_form(
    form: IssueTicketForm,
    session: &Session,
    supplier_name: &str,
) -> Result<NewTicket, String> {
    let event_date = NaiveDate::parse_from_str(form.event_date.trim(), "%Y-%m-%d")
        .map_err(|_| "Event date must be a date (YYYY-MM-DD)".to_string())?;
    let price = Decimal::from_str(form.price.trim())
        .map_err(|_| "Price must be a number".to_string())?;
    if price < Decimal::ZERO {
        return Err("Price must not be negative".to_string());
    }
    let quantity = form
        .quantity
        .trim()
        .parse::<u32>()
        .map_err(|_| "Quantity must be a whole number".to_string())?;

    let ticket_name = form.ticket_name.trim();
    if ticket_name.is_empty() {
        return Err("Ticket name is required".to_string());
    }

    Ok(NewTicket {
        ticket_name: ticket_name.to_string(),
        venue: form.venue.trim().to_string(),
        event_date,
        price,
        description: form.description.trim().to_string(),
        rules: Default::default(),
        quantity,
        supplier_id: session.id.clone(),
        supplier_name: supplier_name.to_string(),
    })
}
