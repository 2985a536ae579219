//! Server-rendered HTML pages.

pub mod components;
mod distributor;
mod issue_ticket;
mod supplier;

pub use distributor::render_distributor_dashboard;
pub use issue_ticket::render_issue_ticket;
pub use supplier::render_supplier_dashboard;

use crate::dashboard::TicketStats;
use components::card;

pub(crate) const ISSUE_TICKET_PATH: &str = "/supplier/issue-ticket";

/// The row of four summary cards shared by both dashboards.
fn stats_grid(stats: &TicketStats) -> String {
    let cells = [
        ("Total Tickets", stats.total_tickets.to_string()),
        ("Available", stats.available_quantity.to_string()),
        ("Sold", stats.sold.to_string()),
        ("For Resale", stats.for_resale.to_string()),
    ];

    let cards: String = cells
        .iter()
        .map(|(label, value)| {
            card(
                "stat",
                &format!(r#"<div class="stat-label">{label}</div><div class="stat-value">{value}</div>"#),
            )
        })
        .collect();

    format!(r#"<div class="grid grid-4">{cards}</div>"#)
}
