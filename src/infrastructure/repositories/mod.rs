// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod in_memory_event_repository;
pub mod postgres_event_repository;

pub use in_memory_event_repository::InMemoryEventRepository;
pub use postgres_event_repository::PostgresEventRepository;
