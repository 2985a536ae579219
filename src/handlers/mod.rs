use std::sync::Arc;

use axum::extract::State;
use axum::response::{IntoResponse, Redirect, Response};
use serde::Serialize;
use tokio::sync::Mutex;

use crate::models::Role;
use crate::state::Marketplace;
use crate::storage::{KeyValueStorage, StorageError};
use crate::utils::error::AppError;
use crate::utils::response::success;

pub mod dashboard;
pub mod distributors;
pub mod session;
pub mod suppliers;
pub mod tickets;

pub type DynMarketplace = Marketplace<Box<dyn KeyValueStorage>>;

pub type SharedMarketplace = Arc<Mutex<DynMarketplace>>;

/// Router state. Handlers only ever see a hydrated marketplace.
#[derive(Clone)]
pub struct AppState {
    pub marketplace: SharedMarketplace,
}

impl AppState {
    pub fn hydrate(backend: impl KeyValueStorage + 'static) -> Self {
        let backend: Box<dyn KeyValueStorage> = Box::new(backend);
        Self {
            marketplace: Arc::new(Mutex::new(Marketplace::hydrate(backend))),
        }
    }

    /// Runs a mutation on the blocking pool, since persisting it may block on
    /// file I/O. The lock is held until the write finishes.
    pub async fn mutate<T, F>(&self, f: F) -> Result<T, AppError>
    where
        F: FnOnce(&mut DynMarketplace) -> Result<T, StorageError> + Send + 'static,
        T: Send + 'static,
    {
        let mut market = Arc::clone(&self.marketplace).lock_owned().await;
        let result = tokio::task::spawn_blocking(move || f(&mut *market))
            .await
            .map_err(|e| AppError::InternalServerError(format!("Storage task failed: {e}")))?;
        Ok(result?)
    }
}

#[derive(Serialize)]
struct HealthPayload {
    status: &'static str,
    service: &'static str,
}

pub async fn health_check() -> Response {
    let payload = HealthPayload {
        status: "ok",
        service: "ticket-marketplace",
    };

    success(payload, "Health check successful")
}

/// Sends the visitor to the dashboard for their role.
pub async fn index(State(state): State<AppState>) -> Response {
    let market = state.marketplace.lock().await;
    let target = match market.current_user().map(|s| s.role) {
        Some(Role::Supplier) => "/supplier/dashboard",
        Some(Role::Distributor) | None => "/distributor/dashboard",
    };
    Redirect::to(target).into_response()
}

pub async fn not_found() -> Response {
    AppError::NotFound("No such page".to_string()).into_response()
}
