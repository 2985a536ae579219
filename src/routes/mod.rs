use axum::routing::{get, put};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::config::apply_security_headers;
use crate::handlers::dashboard::{
    distributor_page, distributor_summary, issue_ticket_page, issue_ticket_submit, supplier_page,
    supplier_summary,
};
use crate::handlers::distributors::{create_distributor, list_distributors};
use crate::handlers::session::{clear_session, get_session, set_session};
use crate::handlers::suppliers::{create_supplier, list_suppliers};
use crate::handlers::tickets::{create_ticket, list_tickets, update_ticket_status};
use crate::handlers::{health_check, index, not_found, AppState};

pub fn create_routes(state: AppState, include_hsts: bool) -> Router {
    let api = Router::new()
        .route("/suppliers", get(list_suppliers).post(create_supplier))
        .route("/distributors", get(list_distributors).post(create_distributor))
        .route("/tickets", get(list_tickets).post(create_ticket))
        .route("/tickets/:id/status", put(update_ticket_status))
        .route(
            "/session",
            get(get_session).put(set_session).delete(clear_session),
        )
        .route("/dashboard/distributor", get(distributor_summary))
        .route("/dashboard/supplier", get(supplier_summary));

    let router = Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/distributor/dashboard", get(distributor_page))
        .route("/supplier/dashboard", get(supplier_page))
        .route(
            "/supplier/issue-ticket",
            get(issue_ticket_page).post(issue_ticket_submit),
        )
        .nest("/api", api)
        .fallback(not_found)
        .with_state(state);

    apply_security_headers(router, include_hsts).layer(TraceLayer::new_for_http())
}
