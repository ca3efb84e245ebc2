use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::models::{EventInputModel, EventSpeakerInputModel, EventViewModel, ValidatedEvent};
use crate::api::AppState;
use crate::domain::event::{Event, EventSpeaker};

/// Loads an event or short-circuits with 404
async fn load_event(state: &AppState, id: Uuid) -> Result<Event, ApiError> {
    state.events.find_by_id(id).await?.ok_or_else(|| {
        tracing::warn!(event_id = %id, "Event not found");
        ApiError::not_found(format!("Event not found: {}", id))
    })
}

/// List all events that are not deleted
///
/// GET /api/events
pub async fn get_all_events(
    State(state): State<AppState>,
) -> Result<Json<Vec<EventViewModel>>, ApiError> {
    let events = state.events.find_all_active().await?;

    Ok(Json(events.iter().map(EventViewModel::from).collect()))
}

/// Get an event by ID, including soft-deleted ones
///
/// GET /api/events/:id
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<EventViewModel>, ApiError> {
    let event = load_event(&state, id).await?;

    Ok(Json(EventViewModel::from(&event)))
}

/// Create a new event
///
/// POST /api/events
pub async fn create_event(
    State(state): State<AppState>,
    payload: Result<Json<EventInputModel>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(input) = payload?;
    let event = Event::from(ValidatedEvent::try_from(input)?);

    state.events.insert(&event).await?;
    tracing::info!(event_id = %event.id(), "Event created");

    let location = format!("/api/events/{}", event.id());
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(EventViewModel::from(&event)),
    )
        .into_response())
}

/// Update title, description and dates of an event
///
/// PATCH /api/events/:id
pub async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    payload: Result<Json<EventInputModel>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(input) = payload?;
    let changes = ValidatedEvent::try_from(input)?;
    let mut event = load_event(&state, id).await?;

    event.update(
        changes.title,
        changes.description,
        changes.start_date,
        changes.end_date,
    );
    state.events.update(&event).await?;
    tracing::info!(event_id = %id, "Event updated");

    Ok(StatusCode::NO_CONTENT)
}

/// Soft delete an event
///
/// DELETE /api/events/:id
pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let mut event = load_event(&state, id).await?;

    event.delete();
    state.events.update(&event).await?;
    tracing::info!(event_id = %id, "Event deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// Add a speaker to an event
///
/// POST /api/events/:id/speakers
pub async fn create_speaker(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    payload: Result<Json<EventSpeakerInputModel>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(input) = payload?;
    let speaker = EventSpeaker::try_from(input)?;
    let mut event = load_event(&state, id).await?;

    let speaker_id = speaker.id();
    event.add_speaker(speaker);
    state.events.update(&event).await?;
    tracing::info!(event_id = %id, speaker_id = %speaker_id, "Speaker added");

    Ok(StatusCode::NO_CONTENT)
}
