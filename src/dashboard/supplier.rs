use serde::Serialize;

use super::TicketStats;
use crate::models::{Session, Ticket};

/// The signed-in supplier's own tickets. With no session nothing matches.
#[derive(Debug, Clone, Serialize)]
pub struct SupplierDashboard<'a> {
    pub tickets: Vec<&'a Ticket>,
    pub stats: TicketStats,
}

impl<'a> SupplierDashboard<'a> {
    pub fn derive(tickets: &'a [Ticket], session: Option<&Session>) -> Self {
        let tickets: Vec<&Ticket> = match session {
            Some(session) => tickets
                .iter()
                .filter(|t| t.supplier_id == session.id)
                .collect(),
            None => Vec::new(),
        };
        let stats = TicketStats::from_tickets(tickets.iter().copied());

        Self { tickets, stats }
    }
}
