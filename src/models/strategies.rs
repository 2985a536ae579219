//! proptest strategies for the marketplace records.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use serde_json::Value;

use super::ticket::TicketRules;
use super::{Distributor, NewTicket, Role, Session, Supplier, Ticket, TicketStatus};

fn text() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 &<>'\"-]{0,24}"
}

fn id(prefix: &'static str) -> impl Strategy<Value = String> {
    (0i64..2_000_000_000_000).prop_map(move |n| format!("{prefix}-{n}"))
}

/// Whole cents with at most 15 significant digits, so the value survives
/// the trip through a JSON number.
pub fn price() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

pub fn event_date() -> impl Strategy<Value = NaiveDate> {
    (2000i32..2100, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

pub fn status() -> impl Strategy<Value = TicketStatus> {
    prop::sample::select(TicketStatus::ALL.to_vec())
}

fn rules() -> impl Strategy<Value = TicketRules> {
    prop::collection::btree_map(
        "[a-zA-Z]{1,10}",
        prop_oneof![
            any::<bool>().prop_map(Value::from),
            any::<i64>().prop_map(Value::from),
            "[a-z ]{0,12}".prop_map(Value::from),
        ],
        0..4,
    )
}

pub fn new_ticket() -> impl Strategy<Value = NewTicket> {
    (
        text(),
        text(),
        event_date(),
        price(),
        text(),
        rules(),
        any::<u32>(),
        id("SUP"),
        text(),
    )
        .prop_map(
            |(ticket_name, venue, event_date, price, description, rules, quantity, supplier_id, supplier_name)| {
                NewTicket {
                    ticket_name,
                    venue,
                    event_date,
                    price,
                    description,
                    rules,
                    quantity,
                    supplier_id,
                    supplier_name,
                }
            },
        )
}

pub fn ticket() -> impl Strategy<Value = Ticket> {
    (new_ticket(), id("TKT"), status()).prop_map(|(new_ticket, ticket_id, status)| {
        let mut ticket = new_ticket.issue(ticket_id);
        ticket.status = status;
        ticket
    })
}

pub fn supplier() -> impl Strategy<Value = Supplier> {
    (id("SUP"), text(), text(), text()).prop_map(|(id, name, email, company)| Supplier {
        id,
        name,
        email,
        company,
    })
}

pub fn distributor() -> impl Strategy<Value = Distributor> {
    (id("DIST"), text(), text(), text()).prop_map(|(id, name, email, company)| Distributor {
        id,
        name,
        email,
        company,
    })
}

pub fn session() -> impl Strategy<Value = Session> {
    (
        prop_oneof![id("SUP"), id("DIST"), text()],
        prop_oneof![Just(Role::Supplier), Just(Role::Distributor)],
    )
        .prop_map(|(id, role)| Session { id, role })
}
