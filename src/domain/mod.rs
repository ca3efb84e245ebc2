// Domain layer module exports
// Event aggregate and the repository port it is persisted through
// Domain is independent of infrastructure concerns

pub mod event;
pub mod repositories;
