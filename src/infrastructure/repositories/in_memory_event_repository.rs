use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::event::Event;
use crate::domain::repositories::{EventRepository, RepositoryError, RepositoryResult};

/// In-memory implementation of EventRepository
///
/// Keeps aggregates in insertion order behind an async read/write lock.
/// Each instance is its own isolated store; nothing is shared globally.
#[derive(Default)]
pub struct InMemoryEventRepository {
    events: RwLock<Vec<Event>>,
}

impl InMemoryEventRepository {
    /// Creates an empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Event>> {
        let events = self.events.read().await;

        Ok(events.iter().find(|event| event.id() == id).cloned())
    }

    async fn find_all_active(&self) -> RepositoryResult<Vec<Event>> {
        let events = self.events.read().await;

        let mut active: Vec<Event> = events
            .iter()
            .filter(|event| !event.is_deleted())
            .cloned()
            .collect();
        active.sort_by_key(|event| (event.start_date(), event.id()));

        Ok(active)
    }

    async fn insert(&self, event: &Event) -> RepositoryResult<()> {
        let mut events = self.events.write().await;

        if events.iter().any(|stored| stored.id() == event.id()) {
            return Err(RepositoryError::AlreadyExists(event.id()));
        }

        events.push(event.clone());
        Ok(())
    }

    async fn update(&self, event: &Event) -> RepositoryResult<()> {
        let mut events = self.events.write().await;

        let stored = events
            .iter_mut()
            .find(|stored| stored.id() == event.id())
            .ok_or(RepositoryError::NotFound(event.id()))?;

        // Soft delete is one-way and speakers are only ever appended, so a
        // stale copy cannot revive the event or drop a stored speaker
        let mut speakers = stored.speakers().to_vec();
        for speaker in event.speakers() {
            if !speakers.iter().any(|known| known.id() == speaker.id()) {
                speakers.push(speaker.clone());
            }
        }
        let is_deleted = stored.is_deleted() || event.is_deleted();

        *stored = Event::from_persistence(
            event.id(),
            event.title().map(str::to_string),
            event.description().clone(),
            event.start_date(),
            event.end_date(),
            speakers,
            is_deleted,
        );
        Ok(())
    }
}
