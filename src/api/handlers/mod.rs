// HTTP handlers

pub mod events;
pub mod health;
