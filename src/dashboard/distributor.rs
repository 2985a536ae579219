use serde::Serialize;

use super::{DateRange, TicketStats};
use crate::models::Ticket;

#[derive(Debug, Clone, Serialize)]
pub struct DistributorDashboard<'a> {
    pub range: DateRange,
    pub tickets: Vec<&'a Ticket>,
    pub stats: TicketStats,
}

impl<'a> DistributorDashboard<'a> {
    pub fn derive(tickets: &'a [Ticket], range: DateRange) -> Self {
        let tickets: Vec<&Ticket> = tickets
            .iter()
            .filter(|t| range.contains(t.event_date))
            .collect();
        let stats = TicketStats::from_tickets(tickets.iter().copied());

        Self {
            range,
            tickets,
            stats,
        }
    }
}
