use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::event::Event;

/// Errors raised by event repository implementations
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Event not found: {0}")]
    NotFound(Uuid),

    #[error("Event already exists: {0}")]
    AlreadyExists(Uuid),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Stored data is invalid: {0}")]
    Corrupted(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Repository trait for the Event aggregate
///
/// Defines the contract for persisting and retrieving events together
/// with their speakers. Implementations handle storage-specific details
/// and are shared between requests as `Arc<dyn EventRepository>`.
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Find an event by its ID, speakers included
    ///
    /// Soft-deleted events are returned as well.
    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Event>>;

    /// Find all events that are not soft-deleted, speakers included
    ///
    /// Ordered by start date, then ID.
    async fn find_all_active(&self) -> RepositoryResult<Vec<Event>>;

    /// Insert a new event along with any speakers it already holds
    async fn insert(&self, event: &Event) -> RepositoryResult<()>;

    /// Persist changes made to an existing event
    ///
    /// Speakers present on the aggregate but not yet stored are inserted;
    /// stored speakers missing from the aggregate are kept. A deleted event
    /// stays deleted even if the given copy predates the deletion.
    async fn update(&self, event: &Event) -> RepositoryResult<()>;
}
