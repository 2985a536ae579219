//! Read-only views derived from the ticket collection.
//!
//! Everything here is a pure function of the tickets and the filter inputs;
//! callers recompute on every render.

mod distributor;
mod filter;
mod stats;
mod supplier;

pub use distributor::DistributorDashboard;
pub use filter::{DateRange, DateRangeError};
pub use stats::{TicketAction, TicketStats};
pub use supplier::SupplierDashboard;

#[cfg(test)]
pub(crate) mod fixtures {
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    use crate::models::{Ticket, TicketStatus};

    pub fn ticket(id: &str, supplier_id: &str, date: &str, status: TicketStatus, quantity: u32) -> Ticket {
        Ticket {
            ticket_id: id.to_string(),
            ticket_name: format!("Event {id}"),
            venue: "Arena".to_string(),
            event_date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            price: Decimal::new(100, 0),
            description: String::new(),
            rules: Default::default(),
            status,
            quantity,
            supplier_id: supplier_id.to_string(),
            supplier_name: format!("Supplier {supplier_id}"),
        }
    }
}
