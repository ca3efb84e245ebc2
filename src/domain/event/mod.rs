// Event domain module
// Contains the event aggregate root, its speakers and value objects

#![allow(clippy::module_inception)]

pub mod event;
pub mod speaker;
pub mod value_objects;

// Re-export main types for convenience
pub use event::Event;
pub use speaker::EventSpeaker;
pub use value_objects::{Description, DescriptionError};
