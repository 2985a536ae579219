//! Persistent record storage.
//!
//! Four named records (suppliers, distributors, tickets and the current
//! session) are kept as JSON text in a synchronous key-value backend.
//! [`StoreAdapter`] translates between those texts and typed collections.

mod file;
mod memory;

use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::Session;

pub use file::FileStorage;
pub use memory::MemoryStorage;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// A synchronous string-to-string store. Calls may block on I/O.
pub trait KeyValueStorage: Send + Sync {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()>;

    /// Removing a key that was never stored succeeds.
    fn remove(&mut self, key: &str) -> StorageResult<()>;
}

impl<T: KeyValueStorage + ?Sized> KeyValueStorage for Box<T> {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        (**self).remove(key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKey {
    Suppliers,
    Distributors,
    Tickets,
    CurrentUser,
}

impl RecordKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKey::Suppliers => "suppliers",
            RecordKey::Distributors => "distributors",
            RecordKey::Tickets => "tickets",
            RecordKey::CurrentUser => "currentUser",
        }
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug)]
pub struct StoreAdapter<S> {
    backend: S,
}

impl<S: KeyValueStorage> StoreAdapter<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Reads a record, falling back to `T::default()` when it is missing,
    /// unreadable or does not parse.
    pub fn load<T>(&self, key: RecordKey) -> T
    where
        T: Default + DeserializeOwned,
    {
        let text = match self.backend.get(key.as_str()) {
            Ok(Some(text)) => text,
            Ok(None) => return T::default(),
            Err(e) => {
                warn!(record = %key, error = %e, "Failed to read stored record, using default");
                return T::default();
            }
        };

        match serde_json::from_str(&text) {
            Ok(value) => value,
            Err(e) => {
                warn!(record = %key, error = %e, "Stored record is corrupt, using default");
                T::default()
            }
        }
    }

    pub fn save<T>(&mut self, key: RecordKey, value: &T) -> StorageResult<()>
    where
        T: Serialize + ?Sized,
    {
        let text = serde_json::to_string(value)?;
        self.backend.set(key.as_str(), &text)?;
        debug!(record = %key, bytes = text.len(), "Persisted record");
        Ok(())
    }

    /// Persists the session marker, or removes it entirely when there is none.
    pub fn save_session(&mut self, session: Option<&Session>) -> StorageResult<()> {
        match session {
            Some(session) => self.save(RecordKey::CurrentUser, session),
            None => {
                self.backend.remove(RecordKey::CurrentUser.as_str())?;
                debug!(record = %RecordKey::CurrentUser, "Removed record");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::strategies;
    use crate::models::{Distributor, Role, Supplier, Ticket, TicketStatus};
    use proptest::prelude::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn sample_ticket() -> Ticket {
        let mut rules = crate::models::ticket::TicketRules::new();
        rules.insert("maxPerOrder".to_string(), serde_json::json!(4));
        Ticket {
            ticket_id: "TKT-1".to_string(),
            ticket_name: "Gala".to_string(),
            venue: "Opera House".to_string(),
            event_date: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
            price: Decimal::new(12999, 2),
            description: "Black tie".to_string(),
            rules,
            status: TicketStatus::Sold,
            quantity: 2,
            supplier_id: "SUP-1".to_string(),
            supplier_name: "Acme".to_string(),
        }
    }

    #[test]
    fn test_missing_record_loads_default() {
        let adapter = StoreAdapter::new(MemoryStorage::new());
        let tickets: Vec<Ticket> = adapter.load(RecordKey::Tickets);
        assert!(tickets.is_empty());
        let session: Option<Session> = adapter.load(RecordKey::CurrentUser);
        assert!(session.is_none());
    }

    #[test]
    fn test_round_trip_preserves_records() {
        let mut adapter = StoreAdapter::new(MemoryStorage::new());

        let tickets = vec![sample_ticket()];
        adapter.save(RecordKey::Tickets, &tickets).unwrap();
        let loaded: Vec<Ticket> = adapter.load(RecordKey::Tickets);
        assert_eq!(loaded, tickets);

        let empty: Vec<Supplier> = Vec::new();
        adapter.save(RecordKey::Suppliers, &empty).unwrap();
        assert_eq!(adapter.backend().get("suppliers").unwrap().as_deref(), Some("[]"));
        let loaded: Vec<Supplier> = adapter.load(RecordKey::Suppliers);
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_corrupt_records_load_default() {
        let mut backend = MemoryStorage::new();
        backend.set("tickets", "{not json").unwrap();
        backend.set("suppliers", r#"[{"id": 5}]"#).unwrap();
        backend.set("currentUser", r#"{"id":"SUP-1","role":"admin"}"#).unwrap();
        let adapter = StoreAdapter::new(backend);

        let tickets: Vec<Ticket> = adapter.load(RecordKey::Tickets);
        let suppliers: Vec<Supplier> = adapter.load(RecordKey::Suppliers);
        let session: Option<Session> = adapter.load(RecordKey::CurrentUser);
        assert!(tickets.is_empty());
        assert!(suppliers.is_empty());
        assert!(session.is_none());
    }

    #[test]
    fn test_corrupt_text_loads_default_for_every_record() {
        let mut backend = MemoryStorage::new();
        for key in ["suppliers", "distributors", "tickets", "currentUser"] {
            backend.set(key, "{\"truncated\": [").unwrap();
        }
        backend.set("distributors", r#"[{"id":"DIST-1","name":"Dana"}]"#).unwrap();
        let adapter = StoreAdapter::new(backend);

        assert!(adapter.load::<Vec<Supplier>>(RecordKey::Suppliers).is_empty());
        assert!(adapter.load::<Vec<Distributor>>(RecordKey::Distributors).is_empty());
        assert!(adapter.load::<Vec<Ticket>>(RecordKey::Tickets).is_empty());
        assert!(adapter.load::<Option<Session>>(RecordKey::CurrentUser).is_none());
    }

    #[test]
    fn test_clearing_session_removes_key() {
        let mut adapter = StoreAdapter::new(MemoryStorage::new());
        let session = Session::new("DIST-1", Role::Distributor);

        adapter.save_session(Some(&session)).unwrap();
        assert!(adapter.backend().get("currentUser").unwrap().is_some());

        adapter.save_session(None).unwrap();
        assert_eq!(adapter.backend().get("currentUser").unwrap(), None);
        let loaded: Option<Session> = adapter.load(RecordKey::CurrentUser);
        assert!(loaded.is_none());
    }

    fn stored(text: &str) -> StoreAdapter<MemoryStorage> {
        let mut backend = MemoryStorage::new();
        for key in ["suppliers", "distributors", "tickets", "currentUser"] {
            backend.set(key, text).unwrap();
        }
        StoreAdapter::new(backend)
    }

    proptest! {
        #[test]
        fn prop_records_round_trip(
            suppliers in prop::collection::vec(strategies::supplier(), 0..6),
            distributors in prop::collection::vec(strategies::distributor(), 0..6),
            tickets in prop::collection::vec(strategies::ticket(), 0..6),
            session in prop::option::of(strategies::session()),
        ) {
            let mut adapter = StoreAdapter::new(MemoryStorage::new());
            adapter.save(RecordKey::Suppliers, &suppliers).unwrap();
            adapter.save(RecordKey::Distributors, &distributors).unwrap();
            adapter.save(RecordKey::Tickets, &tickets).unwrap();
            adapter.save_session(session.as_ref()).unwrap();

            prop_assert_eq!(adapter.load::<Vec<Supplier>>(RecordKey::Suppliers), suppliers);
            prop_assert_eq!(adapter.load::<Vec<Distributor>>(RecordKey::Distributors), distributors);
            prop_assert_eq!(adapter.load::<Vec<Ticket>>(RecordKey::Tickets), tickets);
            prop_assert_eq!(
                adapter.backend().get("currentUser").unwrap().is_some(),
                session.is_some()
            );
            prop_assert_eq!(adapter.load::<Option<Session>>(RecordKey::CurrentUser), session);
        }

        #[test]
        fn prop_arbitrary_text_never_fails_load(text in "\\PC{0,48}") {
            let adapter = stored(&text);

            prop_assert_eq!(
                adapter.load::<Vec<Supplier>>(RecordKey::Suppliers),
                serde_json::from_str::<Vec<Supplier>>(&text).unwrap_or_default()
            );
            prop_assert_eq!(
                adapter.load::<Vec<Distributor>>(RecordKey::Distributors),
                serde_json::from_str::<Vec<Distributor>>(&text).unwrap_or_default()
            );
            prop_assert_eq!(
                adapter.load::<Vec<Ticket>>(RecordKey::Tickets),
                serde_json::from_str::<Vec<Ticket>>(&text).unwrap_or_default()
            );
            prop_assert_eq!(
                adapter.load::<Option<Session>>(RecordKey::CurrentUser),
                serde_json::from_str::<Option<Session>>(&text).unwrap_or_default()
            );
        }
    }
}
