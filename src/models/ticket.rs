use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Free-form metadata attached by the issuing supplier. Carried as-is.
pub type TicketRules = BTreeMap<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TicketStatus {
    Available,
    Sold,
    #[serde(rename = "Available for Resale")]
    AvailableForResale,
    Cancelled,
}

impl TicketStatus {
    pub const ALL: [TicketStatus; 4] = [
        TicketStatus::Available,
        TicketStatus::Sold,
        TicketStatus::AvailableForResale,
        TicketStatus::Cancelled,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TicketStatus::Available => "Available",
            TicketStatus::Sold => "Sold",
            TicketStatus::AvailableForResale => "Available for Resale",
            TicketStatus::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub ticket_id: String,
    pub ticket_name: String,
    pub venue: String,
    pub event_date: NaiveDate,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub description: String,
    #[serde(default)]
    pub rules: TicketRules,
    pub status: TicketStatus,
    pub quantity: u32,
    pub supplier_id: String,
    pub supplier_name: String,
}

/// Everything a supplier provides when issuing a ticket. Identifier and
/// status are owned by the marketplace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTicket {
    pub ticket_name: String,
    pub venue: String,
    pub event_date: NaiveDate,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub rules: TicketRules,
    pub quantity: u32,
    pub supplier_id: String,
    pub supplier_name: String,
}

impl NewTicket {
    pub fn issue(self, ticket_id: String) -> Ticket {
        Ticket {
            ticket_id,
            ticket_name: self.ticket_name,
            venue: self.venue,
            event_date: self.event_date,
            price: self.price,
            description: self.description,
            rules: self.rules,
            status: TicketStatus::Available,
            quantity: self.quantity,
            supplier_id: self.supplier_id,
            supplier_name: self.supplier_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_labels_match_wire_format() {
        for status in TicketStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.label()));
        }
    }

    #[test]
    fn test_ticket_uses_camel_case_fields() {
        let json = r#"{
            "ticketId": "TKT-1",
            "ticketName": "Opening Night",
            "venue": "Main Hall",
            "eventDate": "2024-06-15",
            "price": 49.5,
            "description": "",
            "rules": {"transferable": false},
            "status": "Available for Resale",
            "quantity": 3,
            "supplierId": "SUP-1",
            "supplierName": "Acme"
        }"#;

        let ticket: Ticket = serde_json::from_str(json).unwrap();
        assert_eq!(ticket.status, TicketStatus::AvailableForResale);
        assert_eq!(ticket.event_date, NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
        assert_eq!(ticket.price, Decimal::new(495, 1));
        assert_eq!(ticket.rules.get("transferable"), Some(&Value::Bool(false)));
    }

    #[test]
    fn test_price_is_stored_as_number() {
        let ticket = NewTicket {
            ticket_name: "Late Show".to_string(),
            venue: "Club".to_string(),
            event_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            price: Decimal::new(2550, 2),
            description: String::new(),
            rules: TicketRules::new(),
            quantity: 1,
            supplier_id: "SUP-1".to_string(),
            supplier_name: "Acme".to_string(),
        }
        .issue("TKT-1".to_string());

        let json = serde_json::to_string(&ticket).unwrap();
        assert!(json.contains(r#""price":25.5"#), "{json}");

        let parsed: Ticket = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.price, Decimal::new(2550, 2));
    }

    #[test]
    fn test_missing_rules_default_to_empty() {
        let json = r#"{
            "ticketName": "Matinee",
            "venue": "Studio",
            "eventDate": "2024-01-01",
            "price": 10,
            "quantity": 1,
            "supplierId": "SUP-1",
            "supplierName": "Acme"
        }"#;

        let new_ticket: NewTicket = serde_json::from_str(json).unwrap();
        assert!(new_ticket.rules.is_empty());
        assert!(new_ticket.description.is_empty());

        let ticket = new_ticket.issue("TKT-7".to_string());
        assert_eq!(ticket.status, TicketStatus::Available);
        assert_eq!(ticket.ticket_id, "TKT-7");
    }
}
