//! The marketplace state container.
//!
//! [`Marketplace`] is the single owner of every collection. It is built by
//! hydrating from storage and persists the affected record after each
//! mutation, so there is no way to observe state that was not loaded first.

mod id;

use tracing::{debug, info};

use crate::models::{
    Distributor, NewDistributor, NewSupplier, NewTicket, Session, Supplier, Ticket, TicketStatus,
};
use crate::storage::{KeyValueStorage, RecordKey, StorageResult, StoreAdapter};

pub use id::{IdGenerator, DISTRIBUTOR_PREFIX, SUPPLIER_PREFIX, TICKET_PREFIX};

#[derive(Debug)]
pub struct Marketplace<S> {
    store: StoreAdapter<S>,
    ids: IdGenerator,
    suppliers: Vec<Supplier>,
    distributors: Vec<Distributor>,
    tickets: Vec<Ticket>,
    current_user: Option<Session>,
}

impl<S: KeyValueStorage> Marketplace<S> {
    /// Loads all four records from `backend`. Missing or corrupt records start
    /// out empty.
    pub fn hydrate(backend: S) -> Self {
        let store = StoreAdapter::new(backend);
        let suppliers: Vec<Supplier> = store.load(RecordKey::Suppliers);
        let distributors: Vec<Distributor> = store.load(RecordKey::Distributors);
        let tickets: Vec<Ticket> = store.load(RecordKey::Tickets);
        let current_user: Option<Session> = store.load(RecordKey::CurrentUser);

        let mut ids = IdGenerator::new();
        suppliers.iter().for_each(|s| ids.observe(&s.id));
        distributors.iter().for_each(|d| ids.observe(&d.id));
        tickets.iter().for_each(|t| ids.observe(&t.ticket_id));

        info!(
            suppliers = suppliers.len(),
            distributors = distributors.len(),
            tickets = tickets.len(),
            signed_in = current_user.is_some(),
            "Marketplace hydrated"
        );

        Self {
            store,
            ids,
            suppliers,
            distributors,
            tickets,
            current_user,
        }
    }

    pub fn suppliers(&self) -> &[Supplier] {
        &self.suppliers
    }

    pub fn distributors(&self) -> &[Distributor] {
        &self.distributors
    }

    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn current_user(&self) -> Option<&Session> {
        self.current_user.as_ref()
    }

    pub fn supplier(&self, id: &str) -> Option<&Supplier> {
        self.suppliers.iter().find(|s| s.id == id)
    }

    pub fn storage(&self) -> &S {
        self.store.backend()
    }

    pub fn add_supplier(&mut self, data: NewSupplier) -> StorageResult<String> {
        let id = self.ids.next(SUPPLIER_PREFIX);
        self.suppliers.push(data.with_id(id.clone()));
        debug!(supplier_id = %id, "Supplier added");
        self.store.save(RecordKey::Suppliers, &self.suppliers)?;
        Ok(id)
    }

    pub fn add_distributor(&mut self, data: NewDistributor) -> StorageResult<String> {
        let id = self.ids.next(DISTRIBUTOR_PREFIX);
        self.distributors.push(data.with_id(id.clone()));
        debug!(distributor_id = %id, "Distributor added");
        self.store.save(RecordKey::Distributors, &self.distributors)?;
        Ok(id)
    }

    /// Issues a ticket. New tickets always start out `Available`.
    pub fn add_ticket(&mut self, data: NewTicket) -> StorageResult<()> {
        let id = self.ids.next(TICKET_PREFIX);
        debug!(ticket_id = %id, supplier_id = %data.supplier_id, "Ticket issued");
        self.tickets.push(data.issue(id));
        self.store.save(RecordKey::Tickets, &self.tickets)
    }

    /// Replaces the status of the ticket with identifier `id`. Any status may
    /// follow any other.
    ///
    /// Returns whether a ticket matched. An unknown identifier changes nothing
    /// and is not an error.
    pub fn update_ticket_status(&mut self, id: &str, status: TicketStatus) -> StorageResult<bool> {
        let mut matched = false;
        for ticket in self.tickets.iter_mut().filter(|t| t.ticket_id == id) {
            debug!(ticket_id = %id, from = %ticket.status, to = %status, "Ticket status updated");
            ticket.status = status;
            matched = true;
        }

        if !matched {
            debug!(ticket_id = %id, "Status update for unknown ticket ignored");
            return Ok(false);
        }

        self.store.save(RecordKey::Tickets, &self.tickets)?;
        Ok(true)
    }

    pub fn set_current_user(&mut self, session: Option<Session>) -> StorageResult<()> {
        self.current_user = session;
        self.store.save_session(self.current_user.as_ref())
    }
}
