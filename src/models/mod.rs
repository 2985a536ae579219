pub mod distributor;
pub mod supplier;
pub mod ticket;
pub mod user;

pub use distributor::{Distributor, NewDistributor};
pub use supplier::{NewSupplier, Supplier};
pub use ticket::{NewTicket, Ticket, TicketStatus};
pub use user::{Role, Session};

#[cfg(test)]
pub(crate) mod strategies;
