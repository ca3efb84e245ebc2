use super::speaker::EventSpeaker;
use super::value_objects::Description;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Event aggregate root
///
/// A conference or talk container with a time window and the speakers
/// presenting at it. The event owns its speakers exclusively.
///
/// # Invariants
/// - The ID is assigned at creation and never changes
/// - `update` only touches title, description and the time window
/// - Deletion is a one-way soft delete: the flag goes from false to true
///   and the event stays addressable by ID
///
/// # Example
/// ```
/// use awesome_events_api::domain::event::{Description, Event};
/// use chrono::Utc;
///
/// let mut event = Event::new(
///     Some("RustConf".to_string()),
///     Description::new("Yearly Rust conference").expect("valid description"),
///     Utc::now(),
///     Utc::now(),
/// );
///
/// event.delete();
/// assert!(event.is_deleted());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    id: Uuid,
    title: Option<String>,
    description: Description,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    speakers: Vec<EventSpeaker>,
    is_deleted: bool,
}

impl Event {
    /// Creates a new Event aggregate
    ///
    /// A fresh ID is generated, the event starts without speakers and
    /// is not deleted.
    pub fn new(
        title: Option<String>,
        description: Description,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            description,
            start_date,
            end_date,
            speakers: Vec::new(),
            is_deleted: false,
        }
    }

    /// Replaces title, description and time window in place
    ///
    /// ID, deletion flag and speakers are left untouched. The caller is
    /// responsible for persisting the change.
    pub fn update(
        &mut self,
        title: Option<String>,
        description: Description,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) {
        self.title = title;
        self.description = description;
        self.start_date = start_date;
        self.end_date = end_date;
    }

    /// Soft deletes the event. Calling it again has no further effect.
    pub fn delete(&mut self) {
        self.is_deleted = true;
    }

    /// Appends a speaker to the event, making the event its owner
    pub fn add_speaker(&mut self, mut speaker: EventSpeaker) {
        speaker.attach_to(self.id);
        self.speakers.push(speaker);
    }

    /// Looks up one of the event's speakers by ID
    pub fn speaker(&self, id: Uuid) -> Option<&EventSpeaker> {
        self.speakers.iter().find(|speaker| speaker.id() == id)
    }

    // ===== Getters =====

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn description(&self) -> &Description {
        &self.description
    }

    pub fn start_date(&self) -> DateTime<Utc> {
        self.start_date
    }

    pub fn end_date(&self) -> DateTime<Utc> {
        self.end_date
    }

    /// Returns the speakers in the order they were added
    pub fn speakers(&self) -> &[EventSpeaker] {
        &self.speakers
    }

    pub fn is_deleted(&self) -> bool {
        self.is_deleted
    }

    /// Reconstructs an Event from persistence layer data
    ///
    /// Speakers are taken as stored; their `event_id` is expected to
    /// already point at `id`.
    ///
    /// # Note
    /// Only to be used by repository implementations for data reconstruction.
    pub fn from_persistence(
        id: Uuid,
        title: Option<String>,
        description: Description,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
        speakers: Vec<EventSpeaker>,
        is_deleted: bool,
    ) -> Self {
        Self {
            id,
            title,
            description,
            start_date,
            end_date,
            speakers,
            is_deleted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn sample_event() -> Event {
        let start = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
        Event::new(
            Some("Conf".to_string()),
            Description::new("d").unwrap(),
            start,
            start + Duration::hours(8),
        )
    }

    fn sample_speaker(name: &str) -> EventSpeaker {
        EventSpeaker::new(
            name.to_string(),
            "Async Rust".to_string(),
            "Futures and executors".to_string(),
            format!("https://linkedin.com/in/{}", name.to_lowercase()),
        )
    }

    #[test]
    fn new_event_is_active_without_speakers() {
        let event = sample_event();

        assert_eq!(event.title(), Some("Conf"));
        assert_eq!(event.description().as_str(), "d");
        assert!(!event.is_deleted());
        assert!(event.speakers().is_empty());
        assert_ne!(event.id(), Uuid::nil());
    }

    #[test]
    fn new_events_get_distinct_ids() {
        assert_ne!(sample_event().id(), sample_event().id());
    }

    #[test]
    fn update_replaces_only_editable_fields() {
        let mut event = sample_event();
        event.add_speaker(sample_speaker("Jane"));
        event.delete();

        let id = event.id();
        let speakers = event.speakers().to_vec();
        let start = Utc.with_ymd_and_hms(2025, 1, 1, 10, 0, 0).unwrap();
        let end = start + Duration::days(2);

        event.update(None, Description::new("new").unwrap(), start, end);

        assert_eq!(event.title(), None);
        assert_eq!(event.description().as_str(), "new");
        assert_eq!(event.start_date(), start);
        assert_eq!(event.end_date(), end);
        assert_eq!(event.id(), id);
        assert!(event.is_deleted());
        assert_eq!(event.speakers(), speakers.as_slice());
    }

    #[test]
    fn update_keeps_active_flag() {
        let mut event = sample_event();
        let start = event.start_date();
        let end = event.end_date();

        event.update(
            Some("Conf2".to_string()),
            Description::new("d").unwrap(),
            start,
            end,
        );

        assert_eq!(event.title(), Some("Conf2"));
        assert!(!event.is_deleted());
    }

    #[test]
    fn delete_is_idempotent() {
        let mut event = sample_event();
        let before = event.clone();

        event.delete();
        let once = event.clone();
        event.delete();

        assert!(event.is_deleted());
        assert_eq!(event, once);
        // Only the flag changed
        assert_eq!(event.title(), before.title());
        assert_eq!(event.description(), before.description());
        assert_eq!(event.start_date(), before.start_date());
        assert_eq!(event.end_date(), before.end_date());
    }

    #[test]
    fn add_speaker_grows_collection_by_one() {
        let mut event = sample_event();
        let speaker = sample_speaker("Jane");
        let speaker_id = speaker.id();

        event.add_speaker(speaker);

        assert_eq!(event.speakers().len(), 1);
        let stored = event.speaker(speaker_id).expect("speaker retrievable by id");
        assert_eq!(stored.name(), "Jane");
        assert_eq!(stored.event_id(), event.id());
        assert_ne!(stored.id(), event.id());
    }

    #[test]
    fn speakers_keep_insertion_order() {
        let mut event = sample_event();
        event.add_speaker(sample_speaker("Jane"));
        event.add_speaker(sample_speaker("John"));

        let names: Vec<&str> = event.speakers().iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["Jane", "John"]);
    }

    #[test]
    fn unknown_speaker_lookup_returns_none() {
        let event = sample_event();
        assert!(event.speaker(Uuid::new_v4()).is_none());
    }

    #[test]
    fn from_persistence_keeps_stored_state() {
        let id = Uuid::new_v4();
        let start = Utc::now();
        let event = Event::from_persistence(
            id,
            None,
            Description::new("stored").unwrap(),
            start,
            start,
            Vec::new(),
            true,
        );

        assert_eq!(event.id(), id);
        assert!(event.is_deleted());
        assert_eq!(event.title(), None);
    }
}
