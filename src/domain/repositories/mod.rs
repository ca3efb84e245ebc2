// Repository ports (interfaces implemented by the infrastructure layer)

pub mod event_repository;

pub use event_repository::{EventRepository, RepositoryError, RepositoryResult};
