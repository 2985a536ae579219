use super::components::{button, card, escape, input, link_button, page, status_badge, Variant};
use super::stats_grid;
use crate::dashboard::{DistributorDashboard, TicketAction};
use crate::models::Ticket;

const DASHBOARD_PATH: &str = "/distributor/dashboard";

/// `start` and `end` are echoed back into the search inputs as entered.
/// `error` explains why they were not applied.
pub fn render_distributor_dashboard(
    dashboard: &DistributorDashboard<'_>,
    start: &str,
    end: &str,
    error: Option<&str>,
) -> String {
    let mut body = String::from("<h1>Distributor Dashboard</h1>");

    if let Some(error) = error {
        body.push_str(&card("error", &format!(r#"<p class="badge-cancelled">{}</p>"#, escape(error))));
    }

    let mut search = String::from("<h2>Search Tickets</h2>");
    search.push_str(&format!(
        r#"<form method="get" action="{DASHBOARD_PATH}"><div class="grid grid-2">{}{}</div>{}</form>"#,
        input("Start Date", "start_date", "date", start),
        input("End Date", "end_date", "date", end),
        button("Search", Variant::Primary, "submit"),
    ));
    if dashboard.range.has_input() || error.is_some() {
        search.push(' ');
        search.push_str(&link_button("Clear Filters", DASHBOARD_PATH, Variant::Secondary));
    }
    body.push_str(&card("search", &search));

    body.push_str(&stats_grid(&dashboard.stats));

    let mut listing = String::from("<h2>Available Tickets</h2>");
    if dashboard.tickets.is_empty() {
        listing.push_str(r#"<div class="empty"><p class="muted">No tickets found</p></div>"#);
    } else {
        for ticket in &dashboard.tickets {
            listing.push_str(&ticket_row(ticket));
        }
    }
    body.push_str(&card("listing", &listing));

    page("Distributor Dashboard", &body)
}

fn ticket_row(ticket: &Ticket) -> String {
    let mut row = format!(
        r#"<div class="ticket"><div class="header"><div><h3>{name}</h3><p class="muted">{venue} &bull; {date}</p><p class="muted">Supplier: {supplier}</p></div><div><div class="stat-value">${price}</div>{badge}</div></div>"#,
        name = escape(&ticket.ticket_name),
        venue = escape(&ticket.venue),
        date = ticket.event_date.format("%-m/%-d/%Y"),
        supplier = escape(&ticket.supplier_name),
        price = ticket.price,
        badge = status_badge(ticket.status),
    );

    row.push_str(&format!(
        r#"<p class="muted">Quantity: <strong>{}</strong> &nbsp; Ticket ID: <strong>{}</strong></p>"#,
        ticket.quantity,
        escape(&ticket.ticket_id),
    ));

    if !ticket.description.is_empty() {
        row.push_str(&format!(r#"<p class="muted">{}</p>"#, escape(&ticket.description)));
    }

    match TicketAction::for_status(ticket.status) {
        Some(action @ TicketAction::Purchase) => {
            row.push_str(&button(action.label(), Variant::Primary, "button"))
        }
        Some(action @ TicketAction::BuyForResale) => {
            row.push_str(&button(action.label(), Variant::Secondary, "button"))
        }
        None => {}
    }

    row.push_str("</div>");
    row
}
