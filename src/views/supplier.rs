use super::components::{card, escape, link_button, page, status_badge, Variant};
use super::{stats_grid, ISSUE_TICKET_PATH};
use crate::dashboard::SupplierDashboard;
use crate::models::Ticket;

pub fn render_supplier_dashboard(dashboard: &SupplierDashboard<'_>) -> String {
    let mut body = format!(
        r#"<div class="header"><h1>Supplier Dashboard</h1>{}</div>"#,
        link_button("Issue New Ticket", ISSUE_TICKET_PATH, Variant::Primary)
    );

    body.push_str(&stats_grid(&dashboard.stats));

    let mut listing = String::from("<h2>Your Tickets</h2>");
    if dashboard.tickets.is_empty() {
        listing.push_str(&format!(
            r#"<div class="empty"><p class="muted">No tickets issued yet</p>{}</div>"#,
            link_button("Issue Your First Ticket", ISSUE_TICKET_PATH, Variant::Primary)
        ));
    } else {
        for ticket in &dashboard.tickets {
            listing.push_str(&ticket_row(ticket));
        }
    }
    body.push_str(&card("listing", &listing));

    page("Supplier Dashboard", &body)
}

fn ticket_row(ticket: &Ticket) -> String {
    let description = if ticket.description.is_empty() {
        String::new()
    } else {
        format!(r#"<p class="muted">{}</p>"#, escape(&ticket.description))
    };

    format!(
        r#"<div class="ticket"><div class="header"><div><h3>{name}</h3><p class="muted">{venue} &bull; {date}</p></div>{badge}</div><p class="muted">Price: <strong>${price}</strong> &nbsp; Quantity: <strong>{quantity}</strong> &nbsp; Ticket ID: <strong>{id}</strong></p>{description}</div>"#,
        name = escape(&ticket.ticket_name),
        venue = escape(&ticket.venue),
        date = ticket.event_date.format("%-m/%-d/%Y"),
        badge = status_badge(ticket.status),
        price = ticket.price,
        quantity = ticket.quantity,
        id = escape(&ticket.ticket_id),
    )
}
