use uuid::Uuid;

/// A person presenting at an event
///
/// Owned by exactly one [`Event`](super::Event). The speaker's `event_id` is
/// nil until the speaker is attached through [`Event::add_speaker`](super::Event::add_speaker).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventSpeaker {
    id: Uuid,
    name: String,
    talk_title: String,
    talk_description: String,
    linked_in_url: String,
    event_id: Uuid,
}

impl EventSpeaker {
    /// Creates a new, unattached speaker with its own identifier
    pub fn new(
        name: String,
        talk_title: String,
        talk_description: String,
        linked_in_url: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            talk_title,
            talk_description,
            linked_in_url,
            event_id: Uuid::nil(),
        }
    }

    /// Links the speaker to its owning event
    pub(super) fn attach_to(&mut self, event_id: Uuid) {
        self.event_id = event_id;
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn talk_title(&self) -> &str {
        &self.talk_title
    }

    pub fn talk_description(&self) -> &str {
        &self.talk_description
    }

    pub fn linked_in_url(&self) -> &str {
        &self.linked_in_url
    }

    /// Returns the owning event's ID (nil if not yet attached)
    pub fn event_id(&self) -> Uuid {
        self.event_id
    }

    /// Reconstructs a speaker from persistence layer data
    ///
    /// Only to be used by repository implementations.
    pub fn from_persistence(
        id: Uuid,
        event_id: Uuid,
        name: String,
        talk_title: String,
        talk_description: String,
        linked_in_url: String,
    ) -> Self {
        Self {
            id,
            name,
            talk_title,
            talk_description,
            linked_in_url,
            event_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_speaker_has_fresh_id_and_no_owner() {
        let first = EventSpeaker::new(
            "Jane".to_string(),
            "Ownership".to_string(),
            "Borrowing in practice".to_string(),
            "https://linkedin.com/in/jane".to_string(),
        );
        let second = first.clone();
        let third = EventSpeaker::new(
            "John".to_string(),
            "Traits".to_string(),
            "Dispatch".to_string(),
            "https://linkedin.com/in/john".to_string(),
        );

        assert_eq!(first.event_id(), Uuid::nil());
        assert_eq!(first.id(), second.id());
        assert_ne!(first.id(), third.id());
        assert_eq!(first.name(), "Jane");
        assert_eq!(first.talk_title(), "Ownership");
    }
}
