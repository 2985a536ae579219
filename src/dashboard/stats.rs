use serde::Serialize;

use crate::models::{Ticket, TicketStatus};

/// The four summary figures shown on both dashboards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TicketStats {
    pub total_tickets: usize,
    /// Units still on sale: the summed quantity of `Available` tickets.
    pub available_quantity: u64,
    pub sold: usize,
    pub for_resale: usize,
}

impl TicketStats {
    pub fn from_tickets<'a, I>(tickets: I) -> Self
    where
        I: IntoIterator<Item = &'a Ticket>,
    {
        tickets
            .into_iter()
            .fold(TicketStats::default(), |mut stats, ticket| {
                stats.total_tickets += 1;
                match ticket.status {
                    TicketStatus::Available => stats.available_quantity += u64::from(ticket.quantity),
                    TicketStatus::Sold => stats.sold += 1,
                    TicketStatus::AvailableForResale => stats.for_resale += 1,
                    TicketStatus::Cancelled => {}
                }
                stats
            })
    }
}

/// What a distributor can do with a listed ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TicketAction {
    Purchase,
    BuyForResale,
}

impl TicketAction {
    pub fn for_status(status: TicketStatus) -> Option<Self> {
        match status {
            TicketStatus::Available => Some(TicketAction::Purchase),
            TicketStatus::AvailableForResale => Some(TicketAction::BuyForResale),
            TicketStatus::Sold | TicketStatus::Cancelled => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TicketAction::Purchase => "Purchase Tickets",
            TicketAction::BuyForResale => "Buy for Resale",
        }
    }
}
