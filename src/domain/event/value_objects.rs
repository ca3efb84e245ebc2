use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Maximum number of characters an event description may hold
pub const DESCRIPTION_MAX_LEN: usize = 200;

/// Reasons a description is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescriptionError {
    #[error("Description cannot be empty")]
    Empty,

    #[error("Description exceeds {max} characters (got {len})")]
    TooLong { len: usize, max: usize },
}

/// Description value object for an event
///
/// # Invariants
/// - Must contain at least one non-whitespace character
/// - At most 200 characters long
/// - Is immutable after construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Description(String);

impl Description {
    /// Creates a new Description value object
    ///
    /// # Example
    /// ```
    /// use awesome_events_api::domain::event::Description;
    ///
    /// let description = Description::new("Rust meetup").expect("valid description");
    /// assert_eq!(description.as_str(), "Rust meetup");
    /// assert!(Description::new("").is_err());
    /// ```
    pub fn new(description: impl Into<String>) -> Result<Self, DescriptionError> {
        let description = description.into();

        if description.trim().is_empty() {
            return Err(DescriptionError::Empty);
        }

        let len = description.chars().count();
        if len > DESCRIPTION_MAX_LEN {
            return Err(DescriptionError::TooLong {
                len,
                max: DESCRIPTION_MAX_LEN,
            });
        }

        Ok(Description(description))
    }

    /// Returns the description as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Description {
    type Error = DescriptionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Description::new(value)
    }
}

impl From<Description> for String {
    fn from(description: Description) -> Self {
        description.0
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
