//! A local ticket marketplace: suppliers issue tickets, distributors browse
//! them, and both get a dashboard summarising inventory.
//!
//! State lives in a single [`state::Marketplace`] that persists each record
//! to a [`storage::KeyValueStorage`] after every change.

pub mod config;
pub mod dashboard;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;
pub mod storage;
pub mod utils;
pub mod views;
