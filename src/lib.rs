//! Awesome Events API Library
//!
//! This library provides the core functionality for the Awesome Events API:
//! the event aggregate, its storage adapters and the HTTP layer.

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;
