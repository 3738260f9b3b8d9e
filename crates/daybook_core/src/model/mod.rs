//! Entity records kept by the feature stores.
//!
//! # Responsibility
//! - Define the flat records persisted per store (tasks, finance, habits,
//!   notes, contacts, calendar events, shopping lists, user profile).
//! - Provide `validate()` helpers used by stores before any mutation.
//!
//! # Invariants
//! - Every record is identified by a generated `EntityId` that is never reused.
//! - Cross-entity references are plain id matches; nothing enforces them.

use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub mod contact;
pub mod event;
pub mod finance;
pub mod habit;
pub mod note;
pub mod profile;
pub mod shopping;
pub mod task;

/// Stable identifier for every stored record.
pub type EntityId = Uuid;

/// Money in the smallest unit of the configured currency.
pub type Amount = i64;

/// Generates a fresh record id.
pub fn new_id() -> EntityId {
    Uuid::new_v4()
}

/// Current wall-clock time in Unix epoch milliseconds.
pub fn now_epoch_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Input validation failure raised before a store mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required text field is empty after trimming.
    EmptyField(&'static str),
    /// A money field must be strictly positive.
    NonPositiveAmount { field: &'static str, value: Amount },
    /// A money field must not be negative.
    NegativeAmount { field: &'static str, value: Amount },
    /// A clock time is not `HH:MM`.
    InvalidTime { field: &'static str, value: String },
    /// An end time precedes its start time.
    EndBeforeStart,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField(field) => write!(f, "`{field}` cannot be empty"),
            Self::NonPositiveAmount { field, value } => {
                write!(f, "`{field}` must be greater than zero, got {value}")
            }
            Self::NegativeAmount { field, value } => {
                write!(f, "`{field}` cannot be negative, got {value}")
            }
            Self::InvalidTime { field, value } => {
                write!(f, "`{field}` must be HH:MM, got `{value}`")
            }
            Self::EndBeforeStart => write!(f, "end time cannot be earlier than start time"),
        }
    }
}

impl Error for ValidationError {}

pub(crate) fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::EmptyField(field))
    } else {
        Ok(())
    }
}

pub(crate) fn require_positive(field: &'static str, value: Amount) -> Result<(), ValidationError> {
    if value > 0 {
        Ok(())
    } else {
        Err(ValidationError::NonPositiveAmount { field, value })
    }
}

/// Parses a `HH:MM` clock time into minutes after midnight.
pub fn parse_clock_time(field: &'static str, value: &str) -> Result<u16, ValidationError> {
    let invalid = || ValidationError::InvalidTime {
        field,
        value: value.to_string(),
    };
    let (hours, minutes) = value.trim().split_once(':').ok_or_else(invalid)?;
    if hours.len() != 2 || minutes.len() != 2 {
        return Err(invalid());
    }
    let hours: u16 = hours.parse().map_err(|_| invalid())?;
    let minutes: u16 = minutes.parse().map_err(|_| invalid())?;
    if hours > 23 || minutes > 59 {
        return Err(invalid());
    }
    Ok(hours * 60 + minutes)
}
