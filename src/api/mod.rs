// API layer module (adapters for controllers)
// Follows Hexagonal Architecture - API is an adapter

pub mod errors;
pub mod handlers;
pub mod models;
pub mod routes;

use std::sync::Arc;

use crate::domain::repositories::EventRepository;

pub use routes::router;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub events: Arc<dyn EventRepository>,
}

impl AppState {
    /// Creates state backed by the given event repository
    pub fn new(events: Arc<dyn EventRepository>) -> Self {
        Self { events }
    }
}
