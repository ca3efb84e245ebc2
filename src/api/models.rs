// Wire-facing input and view models
// Mapping between these shapes and the domain aggregate lives here

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::domain::event::{Description, Event, EventSpeaker};

/// Request body for creating or updating an event
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventInputModel {
    #[serde(default)]
    pub title: Option<String>,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

/// Event fields after input validation
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedEvent {
    pub title: Option<String>,
    pub description: Description,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

impl TryFrom<EventInputModel> for ValidatedEvent {
    type Error = ApiError;

    fn try_from(input: EventInputModel) -> Result<Self, Self::Error> {
        let description = Description::new(input.description)?;

        if input.end_date < input.start_date {
            return Err(ApiError::bad_request("End date cannot precede start date"));
        }

        Ok(Self {
            title: input.title,
            description,
            start_date: input.start_date,
            end_date: input.end_date,
        })
    }
}

impl From<ValidatedEvent> for Event {
    fn from(input: ValidatedEvent) -> Self {
        Event::new(
            input.title,
            input.description,
            input.start_date,
            input.end_date,
        )
    }
}

/// Request body for adding a speaker to an event
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSpeakerInputModel {
    pub name: String,
    pub talk_title: String,
    pub talk_description: String,
    pub linked_in_url: String,
}

impl TryFrom<EventSpeakerInputModel> for EventSpeaker {
    type Error = ApiError;

    fn try_from(input: EventSpeakerInputModel) -> Result<Self, Self::Error> {
        let fields = [
            ("name", &input.name),
            ("talkTitle", &input.talk_title),
            ("talkDescription", &input.talk_description),
            ("linkedInUrl", &input.linked_in_url),
        ];

        if let Some((field, _)) = fields.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(ApiError::bad_request(format!("{} cannot be empty", field)));
        }

        Ok(EventSpeaker::new(
            input.name,
            input.talk_title,
            input.talk_description,
            input.linked_in_url,
        ))
    }
}

/// Event representation returned to clients
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventViewModel {
    pub id: Uuid,
    pub title: Option<String>,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub speakers: Vec<EventSpeakerViewModel>,
    pub is_deleted: bool,
}

impl From<&Event> for EventViewModel {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id(),
            title: event.title().map(str::to_string),
            description: event.description().to_string(),
            start_date: event.start_date(),
            end_date: event.end_date(),
            speakers: event
                .speakers()
                .iter()
                .map(EventSpeakerViewModel::from)
                .collect(),
            is_deleted: event.is_deleted(),
        }
    }
}

/// Speaker representation returned to clients
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSpeakerViewModel {
    pub id: Uuid,
    pub name: String,
    pub talk_title: String,
    pub talk_description: String,
    pub linked_in_url: String,
    pub event_id: Uuid,
}

impl From<&EventSpeaker> for EventSpeakerViewModel {
    fn from(speaker: &EventSpeaker) -> Self {
        Self {
            id: speaker.id(),
            name: speaker.name().to_string(),
            talk_title: speaker.talk_title().to_string(),
            talk_description: speaker.talk_description().to_string(),
            linked_in_url: speaker.linked_in_url().to_string(),
            event_id: speaker.event_id(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use chrono::{Duration, TimeZone};
    use serde_json::json;

    fn input(description: &str, hours: i64) -> EventInputModel {
        let start = Utc.with_ymd_and_hms(2023, 11, 27, 16, 0, 0).unwrap();
        EventInputModel {
            title: Some("Conf".to_string()),
            description: description.to_string(),
            start_date: start,
            end_date: start + Duration::hours(hours),
        }
    }

    fn speaker_input(name: &str) -> EventSpeakerInputModel {
        EventSpeakerInputModel {
            name: name.to_string(),
            talk_title: "Pinning".to_string(),
            talk_description: "Why futures move".to_string(),
            linked_in_url: "https://linkedin.com/in/jane".to_string(),
        }
    }

    #[test]
    fn input_model_reads_camel_case_json() {
        let input: EventInputModel = serde_json::from_value(json!({
            "description": "d",
            "startDate": "2023-11-27T16:38:17.837Z",
            "endDate": "2023-11-27T18:38:17.837Z"
        }))
        .unwrap();

        assert_eq!(input.title, None);
        assert_eq!(input.description, "d");
        assert!(input.start_date < input.end_date);
    }

    #[test]
    fn valid_input_maps_to_new_event() {
        let validated = ValidatedEvent::try_from(input("d", 2)).unwrap();
        let event = Event::from(validated.clone());

        assert_eq!(event.title(), Some("Conf"));
        assert_eq!(event.description(), &validated.description);
        assert_eq!(event.start_date(), validated.start_date);
        assert!(!event.is_deleted());
    }

    #[test]
    fn same_start_and_end_is_accepted() {
        assert!(ValidatedEvent::try_from(input("d", 0)).is_ok());
    }

    #[test]
    fn end_before_start_is_rejected() {
        let error = ValidatedEvent::try_from(input("d", -1)).unwrap_err();
        assert_eq!(error.status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn long_description_is_rejected() {
        let error = ValidatedEvent::try_from(input(&"x".repeat(201), 1)).unwrap_err();
        assert_eq!(error.status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn blank_speaker_field_is_rejected() {
        let error = EventSpeaker::try_from(speaker_input(" ")).unwrap_err();

        assert_eq!(error.status, StatusCode::BAD_REQUEST);
        assert!(error.message.contains("name"));
    }

    #[test]
    fn view_model_serializes_camel_case() {
        let mut event = Event::from(ValidatedEvent::try_from(input("d", 1)).unwrap());
        event.add_speaker(EventSpeaker::try_from(speaker_input("Jane")).unwrap());

        let json = serde_json::to_value(EventViewModel::from(&event)).unwrap();

        assert_eq!(json["id"], event.id().to_string());
        assert_eq!(json["isDeleted"], false);
        assert!(json["startDate"].is_string());
        assert_eq!(json["speakers"][0]["name"], "Jane");
        assert_eq!(json["speakers"][0]["linkedInUrl"], "https://linkedin.com/in/jane");
        assert_eq!(json["speakers"][0]["eventId"], event.id().to_string());
    }
}
