use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, Transaction};
use std::collections::HashMap;
use uuid::Uuid;

use crate::domain::event::{Description, Event, EventSpeaker};
use crate::domain::repositories::{EventRepository, RepositoryError, RepositoryResult};

/// PostgreSQL implementation of EventRepository
///
/// Events live in the `events` table and speakers in `event_speakers`,
/// which cascades on event deletion. Speakers are loaded eagerly with a
/// second query per lookup.
pub struct PostgresEventRepository {
    pool: PgPool,
}

impl PostgresEventRepository {
    /// Creates a new PostgresEventRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn load_speakers(
        &self,
        event_ids: &[Uuid],
    ) -> RepositoryResult<HashMap<Uuid, Vec<EventSpeaker>>> {
        if event_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<SpeakerRow> = sqlx::query_as(
            r#"
            SELECT id, event_id, name, talk_title, talk_description, linked_in_url
            FROM event_speakers
            WHERE event_id = ANY($1)
            ORDER BY position
            "#,
        )
        .bind(event_ids)
        .fetch_all(&self.pool)
        .await?;

        let mut speakers: HashMap<Uuid, Vec<EventSpeaker>> = HashMap::new();
        for row in rows {
            speakers.entry(row.event_id).or_default().push(row.into());
        }

        Ok(speakers)
    }

    async fn insert_speakers(
        tx: &mut Transaction<'_, Postgres>,
        event: &Event,
    ) -> RepositoryResult<()> {
        for speaker in event.speakers() {
            sqlx::query(
                r#"
                INSERT INTO event_speakers (
                    id, event_id, name, talk_title, talk_description, linked_in_url
                )
                VALUES ($1, $2, $3, $4, $5, $6)
                ON CONFLICT (id) DO NOTHING
                "#,
            )
            .bind(speaker.id())
            .bind(event.id())
            .bind(speaker.name())
            .bind(speaker.talk_title())
            .bind(speaker.talk_description())
            .bind(speaker.linked_in_url())
            .execute(&mut **tx)
            .await?;
        }

        Ok(())
    }
}

#[derive(Debug, FromRow)]
struct EventRow {
    id: Uuid,
    title: Option<String>,
    description: String,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    is_deleted: bool,
}

impl EventRow {
    fn into_event(self, speakers: Vec<EventSpeaker>) -> RepositoryResult<Event> {
        let description = Description::new(self.description).map_err(|e| {
            RepositoryError::Corrupted(format!("event {} description: {}", self.id, e))
        })?;

        Ok(Event::from_persistence(
            self.id,
            self.title,
            description,
            self.start_date,
            self.end_date,
            speakers,
            self.is_deleted,
        ))
    }
}

#[derive(Debug, FromRow)]
struct SpeakerRow {
    id: Uuid,
    event_id: Uuid,
    name: String,
    talk_title: String,
    talk_description: String,
    linked_in_url: String,
}

impl From<SpeakerRow> for EventSpeaker {
    fn from(row: SpeakerRow) -> Self {
        EventSpeaker::from_persistence(
            row.id,
            row.event_id,
            row.name,
            row.talk_title,
            row.talk_description,
            row.linked_in_url,
        )
    }
}

#[async_trait]
impl EventRepository for PostgresEventRepository {
    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Event>> {
        let row: Option<EventRow> = sqlx::query_as(
            r#"
            SELECT id, title, description, start_date, end_date, is_deleted
            FROM events
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let mut speakers = self.load_speakers(&[row.id]).await?;
        let event = row.into_event(speakers.remove(&id).unwrap_or_default())?;

        Ok(Some(event))
    }

    async fn find_all_active(&self) -> RepositoryResult<Vec<Event>> {
        let rows: Vec<EventRow> = sqlx::query_as(
            r#"
            SELECT id, title, description, start_date, end_date, is_deleted
            FROM events
            WHERE NOT is_deleted
            ORDER BY start_date, id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let ids: Vec<Uuid> = rows.iter().map(|row| row.id).collect();
        let mut speakers = self.load_speakers(&ids).await?;

        rows.into_iter()
            .map(|row| {
                let owned = speakers.remove(&row.id).unwrap_or_default();
                row.into_event(owned)
            })
            .collect()
    }

    async fn insert(&self, event: &Event) -> RepositoryResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO events (id, title, description, start_date, end_date, is_deleted)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(event.id())
        .bind(event.title())
        .bind(event.description().as_str())
        .bind(event.start_date())
        .bind(event.end_date())
        .bind(event.is_deleted())
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            let duplicate = e
                .as_database_error()
                .map_or(false, |db| db.is_unique_violation());
            if duplicate {
                RepositoryError::AlreadyExists(event.id())
            } else {
                RepositoryError::Database(e)
            }
        })?;

        Self::insert_speakers(&mut tx, event).await?;
        tx.commit().await?;

        Ok(())
    }

    async fn update(&self, event: &Event) -> RepositoryResult<()> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            UPDATE events
            SET title = $2,
                description = $3,
                start_date = $4,
                end_date = $5,
                is_deleted = events.is_deleted OR $6
            WHERE id = $1
            "#,
        )
        .bind(event.id())
        .bind(event.title())
        .bind(event.description().as_str())
        .bind(event.start_date())
        .bind(event.end_date())
        .bind(event.is_deleted())
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(event.id()));
        }

        Self::insert_speakers(&mut tx, event).await?;
        tx.commit().await?;

        Ok(())
    }
}
